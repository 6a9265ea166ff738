//! Overlay configuration, read from an optional TOML file.

pub mod errors;
pub mod loader;
pub mod schema;

pub use errors::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config};
pub use schema::OverlayConfig;
