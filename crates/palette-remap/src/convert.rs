//! In-place palette conversion.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::palette::Palette;

/// Replace every pixel of `buffer` with its nearest palette color.
///
/// Each pixel's first three bytes are read as `[blue, green, red]` and
/// written back in the same order. Any further channel bytes are left
/// untouched. Pixels are independent of each other.
///
/// Returns the number of pixels whose color changed.
///
/// # Example
///
/// ```
/// use palette_remap::{convert, Palette, PixelBuffer};
///
/// let mut buffer = PixelBuffer::new(2, 2, 3);
/// let changed = convert(&mut buffer, &Palette::parse("FFFFFF"));
///
/// assert_eq!(changed, 4);
/// assert!(buffer.as_bytes().iter().all(|&b| b == 255));
/// ```
pub fn convert(buffer: &mut PixelBuffer, palette: &Palette) -> usize {
    let mut changed = 0;

    for pixel in buffer.pixels_mut() {
        let Some(bgr) = pixel.get_mut(..3) else {
            continue;
        };

        let original = Color::from_bgr([bgr[0], bgr[1], bgr[2]]);
        let chosen = palette.choose(original);
        if chosen != original {
            bgr.copy_from_slice(&chosen.to_bgr());
            changed += 1;
        }
    }

    changed
}
