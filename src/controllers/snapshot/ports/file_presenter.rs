use std::path::Path;

use crate::controllers::snapshot::errors::SnapshotError;
use crate::core::data::frame_buffer::FrameBuffer;

pub trait FilePresenterPort {
    fn present(&self, frame: &FrameBuffer, filepath: &Path) -> Result<(), SnapshotError>;
}
