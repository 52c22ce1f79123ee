//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use palette_remap::HEADER_SIZE;

/// Assert `bytes` is a packed BMP as written by the encoder
pub fn assert_packed_bmp(bytes: &[u8], width: u32, height: u32) {
    let pixel_bytes = (width * height * 3) as usize;
    assert_eq!(
        bytes.len(),
        HEADER_SIZE as usize + pixel_bytes,
        "Expected {}x{} packed BMP, got {} bytes",
        width,
        height,
        bytes.len()
    );
    assert_eq!(&bytes[0..2], b"BM", "Missing BM magic");
    assert_eq!(&bytes[10..14], &HEADER_SIZE.to_le_bytes(), "Pixel offset");
    assert_eq!(&bytes[18..22], &width.to_le_bytes(), "Width field");
    assert_eq!(&bytes[22..26], &height.to_le_bytes(), "Height field");
    assert_eq!(&bytes[28..30], &24u16.to_le_bytes(), "Bits per pixel");
}

/// Pixel bytes following the 54-byte header, split into `[b, g, r]` triples
pub fn pixels_of(bytes: &[u8]) -> Vec<[u8; 3]> {
    bytes[HEADER_SIZE as usize..]
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect()
}
