/// Blends one straight-alpha RGBA pixel over another ("source-over").
///
/// Both `dst` and `src` must be 4 bytes long.
#[inline]
pub fn blend_source_over(dst: &mut [u8], src: &[u8]) {
    let src_alpha = u32::from(src[3]);

    if src_alpha == 0 {
        return;
    }

    if src_alpha == 255 {
        dst.copy_from_slice(src);
        return;
    }

    let dst_alpha = u32::from(dst[3]);
    let inverse = 255 - src_alpha;
    // Output alpha scaled by 255 to keep the colour division exact.
    let out_alpha = src_alpha * 255 + dst_alpha * inverse;

    for channel in 0..3 {
        let src_term = u32::from(src[channel]) * src_alpha * 255;
        let dst_term = u32::from(dst[channel]) * dst_alpha * inverse;
        dst[channel] = ((src_term + dst_term + out_alpha / 2) / out_alpha) as u8;
    }

    dst[3] = ((out_alpha + 127) / 255) as u8;
}
