//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use palette_remap::BmpHeader;

/// Palette files used across tests
pub mod palettes {
    /// Pure red, green and blue
    pub const RGB: &str = "FF0000\n00FF00\n0000FF\n";

    /// Only white
    pub const WHITE: &str = "FFFFFF\n";

    /// Nothing parseable
    pub const INVALID: &str = "zzzzzz\n";

    /// Four greys with comments and junk lines mixed in. The `#` lines are
    /// skipped even when hex digits follow the `#`.
    pub const GREYS_WITH_JUNK: &str = "\
# four grey levels
#default greys
#FF0000
000000 black
555555
not a colour

AAAAAA
0xFFFFFF white
";
}

/// Encode a standard 24-bit BMP: rows padded to 4 bytes, pixels given as
/// `[blue, green, red]` in storage order.
pub fn bmp_24(width: u32, height: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize, "pixel count");

    let header = BmpHeader::for_image(width, height, 3);
    let padding = header.row_padding() as usize;

    let mut bytes = Vec::new();
    header.write_to(&mut bytes).unwrap();
    if width > 0 {
        for row in pixels.chunks(width as usize) {
            for pixel in row {
                bytes.extend_from_slice(pixel);
            }
            bytes.extend(std::iter::repeat(0).take(padding));
        }
    }
    bytes
}

/// A `width` x `height` image where every pixel is `bgr`.
pub fn solid_bmp(width: u32, height: u32, bgr: [u8; 3]) -> Vec<u8> {
    bmp_24(width, height, &vec![bgr; (width * height) as usize])
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
