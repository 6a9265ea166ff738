use std::path::PathBuf;

use crate::core::images::colour_mode::ColourMode;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read PNG header of {}: {source}", path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },
    #[error("can not convert mode {mode} of {}, only colour images with alpha are supported", path.display())]
    UnsupportedColourMode { path: PathBuf, mode: ColourMode },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image footprint must be positive, got {0}")]
    InvalidSize(u32),
}
