//! Palette struct and nearest-color matching.
//!
//! A [`Palette`] is an ordered list of colors. Order matters only for ties:
//! the earliest of several equally close entries wins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::PaletteError;
use super::parse::scan_hex;
use crate::color::Color;

/// An ordered list of allowed output colors.
///
/// The palette may be empty; matching then falls back to [`Color::BLACK`].
///
/// # Example
///
/// ```
/// use palette_remap::{Color, Palette};
///
/// let palette = Palette::parse("000000\nFFFFFF\n");
/// assert_eq!(palette.choose(Color::new(200, 200, 200)), Color::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parse palette text, one hex color per line.
    ///
    /// Lines without a leading hex number are skipped.
    pub fn parse(text: &str) -> Self {
        Self {
            colors: text.lines().filter_map(parse_line).collect(),
        }
    }

    /// Read palette text from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Read`] if the reader fails. Malformed lines
    /// are not errors.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, PaletteError> {
        let mut colors = Vec::new();
        for line in reader.split(b'\n') {
            // Bytes, not String: a stray non-UTF-8 line is just another bad line
            let line = line?;
            if let Some(color) = std::str::from_utf8(&line).ok().and_then(parse_line) {
                colors.push(color);
            }
        }
        Ok(Self { colors })
    }

    /// Load a palette file.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Open`] if the file cannot be opened and
    /// [`PaletteError::Read`] if reading it fails part way.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PaletteError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Find the palette entry closest to `color`.
    ///
    /// Returns `(index, squared distance)`, or `None` for an empty palette.
    /// Only a strictly smaller distance replaces the running best, so the
    /// first of several equidistant entries is returned.
    pub fn find_nearest(&self, color: Color) -> Option<(usize, u32)> {
        let mut best: Option<(usize, u32)> = None;

        for (i, &swatch) in self.colors.iter().enumerate() {
            let dist = swatch.distance_squared(color);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }

        best
    }

    /// The palette color closest to `color`, or black if the palette is empty.
    #[inline]
    pub fn choose(&self, color: Color) -> Color {
        choose_colour(&self.colors, color)
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Nearest-color selection over a plain slice.
///
/// Linear scan with a running best initialised to an unreachable distance.
/// Ties keep the earlier entry; an empty slice yields [`Color::BLACK`].
pub fn choose_colour(palette: &[Color], color: Color) -> Color {
    let mut closest = Color::BLACK;
    let mut closest_dist = u32::MAX;

    for &swatch in palette {
        let dist = swatch.distance_squared(color);
        if dist < closest_dist {
            closest = swatch;
            closest_dist = dist;
        }
    }

    closest
}

fn parse_line(line: &str) -> Option<Color> {
    scan_hex(line).ok().map(Color::from_packed)
}
