use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameBufferError {
    #[error("screen size {size} needs {expected} bytes but buffer holds {actual}")]
    BoundsMismatch {
        size: ScreenSize,
        expected: usize,
        actual: usize,
    },
}

pub type FrameBufferData = Vec<u8>;

/// Straight-alpha RGBA frame covering the whole overlay surface.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    size: ScreenSize,
    buffer: FrameBufferData,
}

impl FrameBuffer {
    /// Creates a fully transparent frame.
    #[must_use]
    pub fn new(size: ScreenSize) -> Self {
        Self {
            size,
            buffer: vec![0; size.rgba_len()],
        }
    }

    pub fn from_data(size: ScreenSize, buffer: FrameBufferData) -> Result<Self, FrameBufferError> {
        if size.rgba_len() != buffer.len() {
            return Err(FrameBufferError::BoundsMismatch {
                size,
                expected: size.rgba_len(),
                actual: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> ScreenSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &FrameBufferData {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.size.width() as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<[u8; 4]> {
        if point.x < 0
            || point.y < 0
            || point.x as u32 >= self.size.width()
            || point.y as u32 >= self.size.height()
        {
            return None;
        }

        let index = point.y as usize * self.row_stride() + point.x as usize * BYTES_PER_PIXEL;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);
        Some(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_size(width: u32, height: u32) -> ScreenSize {
        ScreenSize::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_transparent_buffer() {
        let frame = FrameBuffer::new(create_size(10, 10));

        assert_eq!(frame.buffer().len(), 400);
        assert!(frame.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = (0..16).collect();
        let frame = FrameBuffer::from_data(create_size(2, 2), data.clone()).unwrap();

        assert_eq!(frame.buffer(), &data);
        assert_eq!(frame.pixel(Point { x: 1, y: 1 }), Some([12, 13, 14, 15]));
    }

    #[test]
    fn test_from_data_wrong_size() {
        let size = create_size(2, 2);
        let result = FrameBuffer::from_data(size, vec![0; 12]);

        assert_eq!(
            result.unwrap_err(),
            FrameBufferError::BoundsMismatch {
                size,
                expected: 16,
                actual: 12,
            }
        );
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let frame = FrameBuffer::new(create_size(3, 3));

        assert_eq!(frame.pixel(Point { x: -1, y: 0 }), None);
        assert_eq!(frame.pixel(Point { x: 0, y: 3 }), None);
        assert_eq!(frame.pixel(Point { x: 3, y: 0 }), None);
        assert_eq!(frame.pixel(Point { x: 2, y: 2 }), Some([0, 0, 0, 0]));
    }
}
