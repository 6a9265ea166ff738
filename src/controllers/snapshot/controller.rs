use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::snapshot::errors::SnapshotError;
use crate::controllers::snapshot::ports::file_presenter::FilePresenterPort;
use crate::core::actions::compose_frame::compose_frame::compose_frame;
use crate::core::data::bounds_policy::BoundsPolicy;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::normalized_position::NormalizedPosition;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::images::slot::ImageSlots;

/// Everything needed to render one overlay frame off-screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SnapshotRequest {
    pub size: ScreenSize,
    pub marker: NormalizedPosition,
    pub bounds: BoundsPolicy,
}

/// Renders the overlay without a window, for checking layouts headlessly.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<FrameBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    /// Composes the frame and returns the marker centre in pixels.
    pub fn generate(
        &mut self,
        slots: &ImageSlots,
        request: SnapshotRequest,
    ) -> Result<Point, SnapshotError> {
        let marker = request.marker.to_pixels(request.size, request.bounds)?;

        let start = Instant::now();
        let frame = compose_frame(request.size, slots, marker);

        info!(
            size = %request.size,
            marker = %marker,
            slots = slots.loaded_count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "composed snapshot"
        );

        self.frame = Some(frame);
        Ok(marker)
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }

    pub fn write(&self, filepath: &Path) -> Result<(), SnapshotError> {
        let frame = self.frame.as_ref().ok_or(SnapshotError::NothingToWrite)?;
        self.presenter.present(frame, filepath)?;
        info!(path = %filepath.display(), "snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::images::slot::{ImageSlot, SlotName};
    use image::{Rgba, RgbaImage};
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockFilePresenter {
        written: RefCell<Vec<PathBuf>>,
    }

    impl FilePresenterPort for MockFilePresenter {
        fn present(&self, _frame: &FrameBuffer, filepath: &Path) -> Result<(), SnapshotError> {
            self.written.borrow_mut().push(filepath.to_path_buf());
            Ok(())
        }
    }

    fn request(x: f64, y: f64, bounds: BoundsPolicy) -> SnapshotRequest {
        SnapshotRequest {
            size: ScreenSize::new(100, 80).unwrap(),
            marker: NormalizedPosition::new(x, y),
            bounds,
        }
    }

    #[test]
    fn test_generate_places_marker() {
        let slots = ImageSlots::new(
            vec![ImageSlot::new(
                SlotName::Gaze,
                RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255])),
            )],
            vec![],
        );
        let mut controller = SnapshotController::new(MockFilePresenter::default());

        let marker = controller
            .generate(&slots, request(0.5, 0.5, BoundsPolicy::Clamp))
            .unwrap();

        assert_eq!(marker, Point { x: 50, y: 40 });
        let frame = controller.frame().unwrap();
        assert_eq!(frame.pixel(Point { x: 49, y: 39 }), Some([9, 9, 9, 255]));
    }

    #[test]
    fn test_generate_respects_reject_policy() {
        let mut controller = SnapshotController::new(MockFilePresenter::default());

        let result = controller.generate(&ImageSlots::default(), request(1.5, 0.5, BoundsPolicy::Reject));

        assert!(matches!(result, Err(SnapshotError::OutOfBounds(_))));
        assert!(controller.frame().is_none());
    }

    #[test]
    fn test_write_before_generate_fails() {
        let controller = SnapshotController::new(MockFilePresenter::default());

        let result = controller.write(Path::new("out.png"));

        assert!(matches!(result, Err(SnapshotError::NothingToWrite)));
    }

    #[test]
    fn test_write_hands_frame_to_presenter() {
        let mut controller = SnapshotController::new(MockFilePresenter::default());
        controller
            .generate(&ImageSlots::default(), request(0.0, 0.0, BoundsPolicy::Clamp))
            .unwrap();

        controller.write(Path::new("snapshots/frame.png")).unwrap();

        assert_eq!(
            *controller.presenter.written.borrow(),
            vec![PathBuf::from("snapshots/frame.png")]
        );
    }
}
