use rayon::prelude::*;

use crate::core::actions::compose_frame::blend::blend_source_over;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::images::slot::{ImageSlot, ImageSlots};

/// A slot clipped against the frame, ready to be blitted row by row.
struct Placement<'a> {
    slot: &'a ImageSlot,
    origin: Point,
    first_row: usize,
    end_row: usize,
    first_col: usize,
    end_col: usize,
}

impl<'a> Placement<'a> {
    fn clip(slot: &'a ImageSlot, origin: Point, size: ScreenSize) -> Option<Self> {
        let left = i64::from(origin.x).max(0);
        let top = i64::from(origin.y).max(0);
        let right = (i64::from(origin.x) + i64::from(slot.width())).min(i64::from(size.width()));
        let bottom =
            (i64::from(origin.y) + i64::from(slot.height())).min(i64::from(size.height()));

        if left >= right || top >= bottom {
            return None;
        }

        Some(Self {
            slot,
            origin,
            first_row: top as usize,
            end_row: bottom as usize,
            first_col: left as usize,
            end_col: right as usize,
        })
    }

    fn blit_row(&self, y: usize, row: &mut [u8]) {
        if y < self.first_row || y >= self.end_row {
            return;
        }

        let src_y = (y as i64 - i64::from(self.origin.y)) as usize;
        let src_stride = self.slot.width() as usize * BYTES_PER_PIXEL;
        let src_row = &self.slot.rgba()[src_y * src_stride..(src_y + 1) * src_stride];

        for x in self.first_col..self.end_col {
            let src_x = (x as i64 - i64::from(self.origin.x)) as usize;
            let dst = &mut row[x * BYTES_PER_PIXEL..(x + 1) * BYTES_PER_PIXEL];
            let src = &src_row[src_x * BYTES_PER_PIXEL..(src_x + 1) * BYTES_PER_PIXEL];
            blend_source_over(dst, src);
        }
    }
}

/// Composes the overlay into a new transparent frame.
#[must_use]
pub fn compose_frame(size: ScreenSize, slots: &ImageSlots, marker: Point) -> FrameBuffer {
    let mut frame = FrameBuffer::new(size);
    compose_frame_into(&mut frame, slots, marker);
    frame
}

/// Clears `frame` and draws every loaded slot onto it.
///
/// Corners are drawn first and the gaze marker last, so the marker sits on
/// top wherever they overlap. Anything outside the frame is clipped.
pub fn compose_frame_into(frame: &mut FrameBuffer, slots: &ImageSlots, marker: Point) {
    let size = frame.size();
    let stride = frame.row_stride();

    let placements: Vec<Placement<'_>> = slots
        .draw_order()
        .filter_map(|slot| Placement::clip(slot, slot.position(size, marker), size))
        .collect();

    frame
        .buffer_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            row.fill(0);
            for placement in &placements {
                placement.blit_row(y, row);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::images::slot::SlotName;
    use image::{Rgba, RgbaImage};

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn size(width: u32, height: u32) -> ScreenSize {
        ScreenSize::new(width, height).unwrap()
    }

    fn solid(name: SlotName, side: u32, rgba: [u8; 4]) -> ImageSlot {
        ImageSlot::new(name, RgbaImage::from_pixel(side, side, Rgba(rgba)))
    }

    #[test]
    fn test_empty_slots_give_transparent_frame() {
        let frame = compose_frame(size(8, 8), &ImageSlots::default(), Point { x: 4, y: 4 });

        assert!(frame.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_corners_are_anchored() {
        let slots = ImageSlots::new(
            vec![
                solid(SlotName::TopLeft, 2, RED),
                solid(SlotName::TopRight, 2, RED),
                solid(SlotName::BottomLeft, 2, RED),
            ],
            vec![],
        );

        let frame = compose_frame(size(10, 8), &slots, Point { x: 5, y: 4 });

        assert_eq!(frame.pixel(Point { x: 0, y: 0 }), Some(RED));
        assert_eq!(frame.pixel(Point { x: 1, y: 1 }), Some(RED));
        assert_eq!(frame.pixel(Point { x: 2, y: 2 }), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(Point { x: 8, y: 0 }), Some(RED));
        assert_eq!(frame.pixel(Point { x: 9, y: 1 }), Some(RED));
        assert_eq!(frame.pixel(Point { x: 7, y: 0 }), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(Point { x: 0, y: 6 }), Some(RED));
        assert_eq!(frame.pixel(Point { x: 1, y: 7 }), Some(RED));
        assert_eq!(frame.pixel(Point { x: 9, y: 7 }), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_gaze_is_centred_on_marker() {
        let slots = ImageSlots::new(vec![solid(SlotName::Gaze, 4, BLUE)], vec![]);

        let frame = compose_frame(size(20, 20), &slots, Point { x: 10, y: 10 });

        assert_eq!(frame.pixel(Point { x: 8, y: 8 }), Some(BLUE));
        assert_eq!(frame.pixel(Point { x: 11, y: 11 }), Some(BLUE));
        assert_eq!(frame.pixel(Point { x: 7, y: 8 }), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(Point { x: 12, y: 12 }), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_gaze_draws_over_corner() {
        let slots = ImageSlots::new(
            vec![solid(SlotName::Gaze, 2, BLUE), solid(SlotName::TopLeft, 4, RED)],
            vec![],
        );

        let frame = compose_frame(size(10, 10), &slots, Point { x: 1, y: 1 });

        assert_eq!(frame.pixel(Point { x: 0, y: 0 }), Some(BLUE));
        assert_eq!(frame.pixel(Point { x: 3, y: 3 }), Some(RED));
    }

    #[test]
    fn test_partially_off_screen_marker_is_clipped() {
        let slots = ImageSlots::new(vec![solid(SlotName::Gaze, 4, BLUE)], vec![]);

        let frame = compose_frame(size(6, 6), &slots, Point { x: 0, y: 6 });

        assert_eq!(frame.pixel(Point { x: 0, y: 4 }), Some(BLUE));
        assert_eq!(frame.pixel(Point { x: 1, y: 5 }), Some(BLUE));
        assert_eq!(frame.pixel(Point { x: 2, y: 5 }), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fully_off_screen_marker_is_skipped() {
        let slots = ImageSlots::new(vec![solid(SlotName::Gaze, 4, BLUE)], vec![]);

        let frame = compose_frame(size(6, 6), &slots, Point { x: -100, y: 5000 });

        assert!(frame.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_compose_into_clears_previous_marker() {
        let slots = ImageSlots::new(vec![solid(SlotName::Gaze, 2, BLUE)], vec![]);
        let mut frame = compose_frame(size(10, 10), &slots, Point { x: 1, y: 1 });

        compose_frame_into(&mut frame, &slots, Point { x: 8, y: 8 });

        assert_eq!(frame.pixel(Point { x: 0, y: 0 }), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(Point { x: 7, y: 7 }), Some(BLUE));
    }
}
