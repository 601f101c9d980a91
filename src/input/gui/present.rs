//! Pixel format conversion for the pixels surface.

/// Copies `[B, G, R, pad]` pixel data into the surface's RGBA layout.
///
/// # Panics
/// Panics if the buffers differ in length or are not a whole number of
/// 4-byte pixels.
pub fn copy_bgrx_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    assert_eq!(
        src.len(),
        dst.len(),
        "src length {} does not match dst length {}",
        src.len(),
        dst.len()
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = src_pixel[2]; // R
        dst_pixel[1] = src_pixel[1]; // G
        dst_pixel[2] = src_pixel[0]; // B
        dst_pixel[3] = 255;
    }
}
