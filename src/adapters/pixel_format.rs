//! Pixel format conversion helpers for presentation adapters.

/// Copies straight-alpha RGBA into premultiplied RGBA.
///
/// Transparent window surfaces composite premultiplied colour, so every
/// channel is scaled by its pixel's alpha on the way out.
///
/// # Panics
/// Panics if the buffers differ in length or are not a multiple of 4.
pub fn copy_rgba_premultiplied(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    assert_eq!(
        dst.len(),
        src.len(),
        "dst length {} does not match src length {}",
        dst.len(),
        src.len()
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let alpha = u16::from(src_pixel[3]);

        match alpha {
            0 => dst_pixel.fill(0),
            255 => dst_pixel.copy_from_slice(src_pixel),
            _ => {
                for channel in 0..3 {
                    dst_pixel[channel] = ((u16::from(src_pixel[channel]) * alpha + 127) / 255) as u8;
                }
                dst_pixel[3] = src_pixel[3];
            }
        }
    }
}
