use std::path::Path;

use crate::controllers::snapshot::errors::SnapshotError;
use crate::controllers::snapshot::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::storage::write_png::write_png;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        write_png(frame, filepath)?;
        Ok(())
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
