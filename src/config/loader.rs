//! TOML config loading and validation.

use std::path::Path;

use tracing::info;

use crate::config::errors::ConfigError;
use crate::config::schema::OverlayConfig;

/// Looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "gaze_overlay.toml";

/// Loads the config from `path`, or from [`DEFAULT_CONFIG_FILE`] if present.
///
/// With no explicit path and no default file, the built-in defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<OverlayConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            load_from_path(Path::new(DEFAULT_CONFIG_FILE))
        }
        None => {
            info!("no config file found, using defaults");
            Ok(OverlayConfig::default())
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<OverlayConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = load_from_str(&content)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn load_from_str(content: &str) -> Result<OverlayConfig, ConfigError> {
    let config: OverlayConfig = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &OverlayConfig) -> Result<(), ConfigError> {
    if config.listener.port == 0 {
        return Err(ConfigError::Invalid("listener.port must be non-zero".into()));
    }

    if config.listener.read_timeout_ms == 0 {
        return Err(ConfigError::Invalid(
            "listener.read_timeout_ms must be positive".into(),
        ));
    }

    if config.listener.max_payload_bytes == 0 {
        return Err(ConfigError::Invalid(
            "listener.max_payload_bytes must be positive".into(),
        ));
    }

    if config.images.size == 0 {
        return Err(ConfigError::Invalid("images.size must be positive".into()));
    }

    Ok(())
}
