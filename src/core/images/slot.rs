use image::RgbaImage;

use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

/// The fixed set of images the overlay knows how to place.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SlotName {
    TopLeft,
    TopRight,
    BottomLeft,
    Gaze,
}

impl SlotName {
    pub const ALL: &'static [SlotName] = &[
        SlotName::TopLeft,
        SlotName::TopRight,
        SlotName::BottomLeft,
        SlotName::Gaze,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomLeft => "bottom_left",
            Self::Gaze => "gaze",
        }
    }

    #[must_use]
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::TopLeft => "nw.png",
            Self::TopRight => "ne.png",
            Self::BottomLeft => "sw.png",
            Self::Gaze => "gaze.png",
        }
    }

    /// Top-left pixel at which an image of `image_width`x`image_height` is drawn.
    ///
    /// Corner slots are anchored to the screen edges; the gaze slot is
    /// centred on `marker`.
    #[must_use]
    pub fn anchor(
        self,
        screen: ScreenSize,
        image_width: u32,
        image_height: u32,
        marker: Point,
    ) -> Point {
        match self {
            Self::TopLeft => Point { x: 0, y: 0 },
            Self::TopRight => Point {
                x: screen.width() as i32 - image_width as i32,
                y: 0,
            },
            Self::BottomLeft => Point {
                x: 0,
                y: screen.height() as i32 - image_height as i32,
            },
            Self::Gaze => marker.offset(-(image_width as i32 / 2), -(image_height as i32 / 2)),
        }
    }
}

impl std::fmt::Display for SlotName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A decoded, resized RGBA image bound to its slot.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    name: SlotName,
    image: RgbaImage,
}

impl ImageSlot {
    #[must_use]
    pub fn new(name: SlotName, image: RgbaImage) -> Self {
        Self { name, image }
    }

    #[must_use]
    pub fn name(&self) -> SlotName {
        self.name
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[must_use]
    pub fn position(&self, screen: ScreenSize, marker: Point) -> Point {
        self.name.anchor(screen, self.width(), self.height(), marker)
    }
}

/// A slot that failed to load, kept so the failure can be reported later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSlot {
    pub name: SlotName,
    pub reason: String,
}

/// Every slot that loaded at startup, plus the ones that were skipped.
#[derive(Debug, Clone, Default)]
pub struct ImageSlots {
    loaded: Vec<ImageSlot>,
    skipped: Vec<SkippedSlot>,
}

impl ImageSlots {
    #[must_use]
    pub fn new(loaded: Vec<ImageSlot>, skipped: Vec<SkippedSlot>) -> Self {
        Self { loaded, skipped }
    }

    #[must_use]
    pub fn get(&self, name: SlotName) -> Option<&ImageSlot> {
        self.loaded.iter().find(|slot| slot.name == name)
    }

    /// Loaded slots in draw order: corners first, gaze marker last.
    pub fn draw_order(&self) -> impl Iterator<Item = &ImageSlot> {
        SlotName::ALL.iter().filter_map(|&name| self.get(name))
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedSlot] {
        &self.skipped
    }

    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenSize {
        ScreenSize::new(1000, 800).unwrap()
    }

    fn solid(name: SlotName, size: u32) -> ImageSlot {
        ImageSlot::new(name, RgbaImage::from_pixel(size, size, image::Rgba([1, 2, 3, 255])))
    }

    #[test]
    fn test_corner_anchors() {
        let marker = Point { x: 500, y: 400 };

        assert_eq!(SlotName::TopLeft.anchor(screen(), 200, 200, marker), Point { x: 0, y: 0 });
        assert_eq!(SlotName::TopRight.anchor(screen(), 200, 200, marker), Point { x: 800, y: 0 });
        assert_eq!(SlotName::BottomLeft.anchor(screen(), 200, 200, marker), Point { x: 0, y: 600 });
    }

    #[test]
    fn test_gaze_anchor_is_centred_on_marker() {
        let marker = Point { x: 500, y: 400 };

        assert_eq!(SlotName::Gaze.anchor(screen(), 200, 200, marker), Point { x: 400, y: 300 });
    }

    #[test]
    fn test_default_file_names() {
        let names: Vec<&str> = SlotName::ALL.iter().map(|n| n.default_file_name()).collect();

        assert_eq!(names, vec!["nw.png", "ne.png", "sw.png", "gaze.png"]);
    }

    #[test]
    fn test_draw_order_puts_gaze_last() {
        let slots = ImageSlots::new(
            vec![
                solid(SlotName::Gaze, 4),
                solid(SlotName::BottomLeft, 4),
                solid(SlotName::TopLeft, 4),
            ],
            vec![],
        );

        let order: Vec<SlotName> = slots.draw_order().map(ImageSlot::name).collect();

        assert_eq!(order, vec![SlotName::TopLeft, SlotName::BottomLeft, SlotName::Gaze]);
    }

    #[test]
    fn test_missing_slot_lookup() {
        let slots = ImageSlots::new(
            vec![solid(SlotName::TopLeft, 4)],
            vec![SkippedSlot { name: SlotName::Gaze, reason: "missing".into() }],
        );

        assert!(slots.get(SlotName::Gaze).is_none());
        assert_eq!(slots.loaded_count(), 1);
        assert_eq!(slots.skipped()[0].name, SlotName::Gaze);
    }
}
