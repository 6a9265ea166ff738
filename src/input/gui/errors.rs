use crate::config::ConfigError;
use crate::core::data::screen_size::ScreenSizeError;
use crate::core::images::errors::ImageError;
use crate::input::network::ListenerError;

#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("no display found")]
    NoDisplay,
    #[error("failed to create overlay window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create drawing surface: {0}")]
    Surface(#[from] pixels::Error),
    #[error(transparent)]
    ScreenSize(#[from] ScreenSizeError),
    #[error(transparent)]
    Images(#[from] ImageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Listener(#[from] ListenerError),
}
