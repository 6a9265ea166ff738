use crate::core::data::bounds_policy::OutOfBounds;
use crate::core::data::screen_size::ScreenSizeError;
use crate::core::images::errors::ImageError;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    ScreenSize(#[from] ScreenSizeError),
    #[error(transparent)]
    Images(#[from] ImageError),
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
    #[error("no frame has been generated yet")]
    NothingToWrite,
}
