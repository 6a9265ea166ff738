use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::config::errors::ConfigError;
use crate::core::data::bounds_policy::BoundsPolicy;
use crate::core::images::errors::ImageError;
use crate::core::images::loader::{DEFAULT_FOOTPRINT, ImageLoader};
use crate::core::images::slot::SlotName;
use crate::input::network::{ListenerProtocol, ListenerSettings};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub listener: ListenerConfig,
    pub images: ImagesConfig,
    pub marker: MarkerConfig,
    pub window: WindowConfig,
    pub hud: HudConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    pub protocol: ListenerProtocol,
    pub host: String,
    pub port: u16,
    pub read_timeout_ms: u64,
    pub max_payload_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            protocol: ListenerProtocol::Http,
            host: "127.0.0.1".to_string(),
            port: 8080,
            read_timeout_ms: 5_000,
            max_payload_bytes: 1024,
        }
    }
}

impl ListenerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|err| {
                ConfigError::Invalid(format!("cannot resolve {}:{}: {err}", self.host, self.port))
            })?
            .next()
            .ok_or_else(|| {
                ConfigError::Invalid(format!("{}:{} resolved to no address", self.host, self.port))
            })
    }

    pub fn settings(&self) -> Result<ListenerSettings, ConfigError> {
        Ok(ListenerSettings {
            protocol: self.protocol,
            addr: self.socket_addr()?,
            read_timeout: Duration::from_millis(self.read_timeout_ms),
            max_payload_bytes: self.max_payload_bytes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub directory: PathBuf,
    /// Side length of the square footprint every image is resized to.
    pub size: u32,
    /// Reject images that are not colour with alpha (palette, grayscale, RGB).
    pub require_alpha: bool,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub gaze: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            size: DEFAULT_FOOTPRINT,
            require_alpha: true,
            top_left: SlotName::TopLeft.default_file_name().to_string(),
            top_right: SlotName::TopRight.default_file_name().to_string(),
            bottom_left: SlotName::BottomLeft.default_file_name().to_string(),
            gaze: SlotName::Gaze.default_file_name().to_string(),
        }
    }
}

impl ImagesConfig {
    pub fn loader(&self) -> Result<ImageLoader, ImageError> {
        Ok(ImageLoader::new(&self.directory, self.size)?
            .with_require_alpha(self.require_alpha)
            .with_file_name(SlotName::TopLeft, &self.top_left)
            .with_file_name(SlotName::TopRight, &self.top_right)
            .with_file_name(SlotName::BottomLeft, &self.bottom_left)
            .with_file_name(SlotName::Gaze, &self.gaze))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub bounds: BoundsPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub always_on_top: bool,
    pub click_through: bool,
    /// X11 only: ask the window manager to leave the window alone.
    pub bypass_window_manager: bool,
    pub skip_taskbar: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Gaze Overlay".to_string(),
            always_on_top: true,
            click_through: true,
            bypass_window_manager: true,
            skip_taskbar: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub enabled: bool,
}
