//! Pixel format conversion helpers for presentation adapters.

/// Copies packed raster pixels into an RGBA8 byte buffer.
///
/// # Arguments
/// * `src` - Packed pixels laid out as `R | G<<8 | B<<16 | A<<24`
/// * `dst` - Destination buffer for RGBA data (4 bytes per pixel)
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 4`.
pub fn copy_packed_to_rgba(src: &[u32], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (&src_pixel, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel.copy_from_slice(&src_pixel.to_le_bytes());
    }
}
