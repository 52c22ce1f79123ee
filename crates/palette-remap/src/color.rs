//! 8-bit RGB color
//!
//! A [`Color`] has two on-the-wire forms: the packed `0xRRGGBB` integer used
//! by palette files, and the `[blue, green, red]` triple found in 24-bit
//! pixel data.

use std::fmt;
use std::str::FromStr;

use crate::palette::{scan_hex, ParseColorError};

/// An opaque color with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Packed value 0. Also the fallback for matching against an empty palette.
    pub const BLACK: Color = Color::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack `0xRRGGBB`.
    ///
    /// Only the low 24 bits carry color; bits above them are discarded.
    ///
    /// ```
    /// use palette_remap::Color;
    /// assert_eq!(Color::from_packed(0xFF8800), Color::new(0xFF, 0x88, 0x00));
    /// ```
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Pack into `0xRRGGBB`.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Build from pixel bytes in stored `[blue, green, red]` order.
    #[inline]
    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self {
            r: bgr[2],
            g: bgr[1],
            b: bgr[0],
        }
    }

    /// Pixel bytes in stored `[blue, green, red]` order.
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Channel differences are taken in `i32` so that `a - b` never wraps.
    #[inline]
    pub fn distance_squared(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_packed()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_packed())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse the leading hex number of `s`, as palette files are read.
    ///
    /// ```
    /// use palette_remap::Color;
    ///
    /// let orange: Color = "FF8800".parse().unwrap();
    /// assert_eq!(orange, Color::new(255, 136, 0));
    ///
    /// // Trailing garbage stops the scan but is not an error
    /// let red: Color = "  ff0000 red".parse().unwrap();
    /// assert_eq!(red, Color::new(255, 0, 0));
    ///
    /// assert!("zzzzzz".parse::<Color>().is_err());
    /// // `#` is not a prefix, so the `Display` form does not parse back
    /// assert!("#FF8800".parse::<Color>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scan_hex(s).map(Color::from_packed)
    }
}
