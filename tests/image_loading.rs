use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use gaze_overlay::core::images::errors::ImageError;
use gaze_overlay::core::images::loader::{DEFAULT_FOOTPRINT, ImageLoader};
use gaze_overlay::core::images::slot::SlotName;

fn write_png(path: &Path, width: u32, height: u32, colour: png::ColorType, data: &[u8]) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(colour);
    encoder.set_depth(png::BitDepth::Eight);
    if colour == png::ColorType::Indexed {
        encoder.set_palette(vec![255, 0, 0, 0, 0, 255]);
    }

    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
}

fn write_rgba(path: &Path, width: u32, height: u32) {
    let data: Vec<u8> = (0..width * height).flat_map(|_| [10, 20, 30, 255]).collect();
    write_png(path, width, height, png::ColorType::Rgba, &data);
}

#[test]
fn test_rgba_slots_are_resized_to_footprint() {
    let dir = tempfile::tempdir().unwrap();
    for slot in SlotName::ALL {
        write_rgba(&dir.path().join(slot.default_file_name()), 64, 32);
    }

    let slots = ImageLoader::new(dir.path(), DEFAULT_FOOTPRINT).unwrap().load_all();

    assert_eq!(slots.loaded_count(), 4);
    assert!(slots.skipped().is_empty());
    let gaze = slots.get(SlotName::Gaze).unwrap();
    assert_eq!((gaze.width(), gaze.height()), (200, 200));
    assert_eq!(gaze.rgba().len(), 200 * 200 * 4);
}

#[test]
fn test_palette_and_grayscale_slots_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_rgba(&dir.path().join("nw.png"), 8, 8);
    write_rgba(&dir.path().join("gaze.png"), 8, 8);
    let indices: Vec<u8> = (0..16).map(|i| i % 2).collect();
    write_png(&dir.path().join("ne.png"), 4, 4, png::ColorType::Indexed, &indices);
    write_png(&dir.path().join("sw.png"), 4, 4, png::ColorType::Grayscale, &[128; 16]);

    let slots = ImageLoader::new(dir.path(), 16).unwrap().load_all();

    assert_eq!(slots.loaded_count(), 2);
    assert!(slots.get(SlotName::TopLeft).is_some());
    assert!(slots.get(SlotName::Gaze).is_some());

    let skipped: Vec<SlotName> = slots.skipped().iter().map(|s| s.name).collect();
    assert_eq!(skipped, vec![SlotName::TopRight, SlotName::BottomLeft]);
    assert!(slots.skipped()[0].reason.contains("mode P"));
    assert!(slots.skipped()[1].reason.contains("mode L"));
}

#[test]
fn test_rgb_without_alpha_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("gaze.png"), 2, 2, png::ColorType::Rgb, &[200; 12]);

    let result = ImageLoader::new(dir.path(), 16).unwrap().load_slot(SlotName::Gaze);

    assert!(matches!(result, Err(ImageError::UnsupportedColourMode { .. })));
}

#[test]
fn test_relaxed_loader_converts_grayscale() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("gaze.png"), 4, 4, png::ColorType::Grayscale, &[128; 16]);

    let slot = ImageLoader::new(dir.path(), 16)
        .unwrap()
        .with_require_alpha(false)
        .load_slot(SlotName::Gaze)
        .unwrap();

    assert_eq!((slot.width(), slot.height()), (16, 16));
    let first = &slot.rgba()[..4];
    assert_eq!(first[0], first[1]);
    assert_eq!(first[1], first[2]);
    assert_eq!(first[3], 255);
}

#[test]
fn test_missing_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_rgba(&dir.path().join("gaze.png"), 8, 8);

    let slots = ImageLoader::new(dir.path(), 16).unwrap().load_all();

    assert_eq!(slots.loaded_count(), 1);
    assert_eq!(slots.skipped().len(), 3);
    assert!(matches!(
        ImageLoader::new(dir.path(), 16).unwrap().load_slot(SlotName::TopLeft),
        Err(ImageError::Read { .. })
    ));
}

#[test]
fn test_garbage_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("nw.png"), b"definitely not an image").unwrap();

    let result = ImageLoader::new(dir.path(), 16).unwrap().load_slot(SlotName::TopLeft);

    assert!(matches!(result, Err(ImageError::Decode { .. })));
}
