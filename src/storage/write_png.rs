use std::path::Path;

use image::{ColorType, ImageFormat};

use crate::core::data::frame_buffer::FrameBuffer;

pub fn write_png(frame: &FrameBuffer, filepath: impl AsRef<Path>) -> image::ImageResult<()> {
    let size = frame.size();

    image::save_buffer_with_format(
        filepath,
        frame.buffer(),
        size.width(),
        size.height(),
        ColorType::Rgba8,
        ImageFormat::Png,
    )
}
