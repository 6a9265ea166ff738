pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod logging;
pub mod presenters;
pub mod storage;

pub use config::{OverlayConfig, load_config};
pub use controllers::marker::{MarkerController, MarkerSink};
pub use controllers::snapshot::{SnapshotController, SnapshotRequest};
pub use input::network::{ListenerHandle, ListenerProtocol, ListenerSettings};
pub use logging::init_logging;
pub use presenters::file::png::PngFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_overlay::RunOverlayCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
