use crate::core::data::bounds_policy::{BoundsPolicy, OutOfBounds};
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

/// A position expressed as fractions of the screen's width and height.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NormalizedPosition {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_within_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Maps the position onto `screen` after applying `policy`.
    ///
    /// Pixel coordinates are `round(x * width)` and `round(y * height)`.
    pub fn to_pixels(
        &self,
        screen: ScreenSize,
        policy: BoundsPolicy,
    ) -> Result<Point, OutOfBounds> {
        let position = policy.apply(*self)?;

        Ok(Point {
            x: (position.x * f64::from(screen.width())).round() as i32,
            y: (position.y * f64::from(screen.height())).round() as i32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u32, height: u32) -> ScreenSize {
        ScreenSize::new(width, height).unwrap()
    }

    #[test]
    fn test_to_pixels_centre() {
        let position = NormalizedPosition::new(0.5, 0.5);

        assert_eq!(
            position.to_pixels(screen(1000, 800), BoundsPolicy::Clamp),
            Ok(Point { x: 500, y: 400 })
        );
    }

    #[test]
    fn test_to_pixels_rounds_to_nearest() {
        let position = NormalizedPosition::new(0.3333, 0.6667);

        assert_eq!(
            position.to_pixels(screen(1920, 1080), BoundsPolicy::Clamp),
            Ok(Point { x: 640, y: 720 })
        );
    }

    #[test]
    fn test_to_pixels_corners() {
        let size = screen(1920, 1080);

        assert_eq!(
            NormalizedPosition::new(0.0, 0.0).to_pixels(size, BoundsPolicy::Clamp),
            Ok(Point { x: 0, y: 0 })
        );
        assert_eq!(
            NormalizedPosition::new(1.0, 1.0).to_pixels(size, BoundsPolicy::Clamp),
            Ok(Point { x: 1920, y: 1080 })
        );
    }

    #[test]
    fn test_to_pixels_matches_rounding_across_unit_square() {
        let size = screen(1366, 768);

        for step_x in 0..=20 {
            for step_y in 0..=20 {
                let x = f64::from(step_x) / 20.0;
                let y = f64::from(step_y) / 20.0;
                let point = NormalizedPosition::new(x, y)
                    .to_pixels(size, BoundsPolicy::Reject)
                    .unwrap();

                assert_eq!(point.x, (x * 1366.0).round() as i32);
                assert_eq!(point.y, (y * 768.0).round() as i32);
            }
        }
    }

    #[test]
    fn test_to_pixels_allow_goes_off_screen() {
        let position = NormalizedPosition::new(-0.1, 1.5);

        assert_eq!(
            position.to_pixels(screen(1000, 800), BoundsPolicy::Allow),
            Ok(Point { x: -100, y: 1200 })
        );
    }

    #[test]
    fn test_is_within_unit_square() {
        assert!(NormalizedPosition::new(0.0, 1.0).is_within_unit_square());
        assert!(!NormalizedPosition::new(-0.01, 0.5).is_within_unit_square());
        assert!(!NormalizedPosition::new(0.5, 1.01).is_within_unit_square());
    }
}
