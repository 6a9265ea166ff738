use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenSizeError {
    #[error("screen size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Physical pixel dimensions of the overlay surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenSize {
    width: u32,
    height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenSizeError> {
        if width == 0 || height == 0 {
            return Err(ScreenSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn centre(&self) -> Point {
        Point {
            x: (self.width / 2) as i32,
            y: (self.height / 2) as i32,
        }
    }

    #[must_use]
    pub fn rgba_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

impl std::fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_size_new_valid() {
        let size = ScreenSize::new(1920, 1080).unwrap();

        assert_eq!(size.width(), 1920);
        assert_eq!(size.height(), 1080);
        assert_eq!(size.rgba_len(), 1920 * 1080 * 4);
    }

    #[test]
    fn test_screen_size_must_be_positive() {
        assert_eq!(
            ScreenSize::new(0, 1080),
            Err(ScreenSizeError::InvalidSize { width: 0, height: 1080 })
        );
        assert_eq!(
            ScreenSize::new(1920, 0),
            Err(ScreenSizeError::InvalidSize { width: 1920, height: 0 })
        );
    }

    #[test]
    fn test_screen_size_centre() {
        let size = ScreenSize::new(1000, 800).unwrap();

        assert_eq!(size.centre(), Point { x: 500, y: 400 });
    }
}
