#![allow(clippy::module_inception)]

//! palette-remap: restrict a 24-bit bitmap to a fixed set of colors
//!
//! This library reads uncompressed BMP images, replaces every pixel with the
//! closest entry of a user-supplied palette, and writes the result back out
//! in the same format.
//!
//! # Quick Start
//!
//! ```
//! use palette_remap::{convert, Color, Palette, PixelBuffer};
//!
//! let palette = Palette::parse("FF0000\n00FF00\n0000FF\n");
//! assert_eq!(palette.len(), 3);
//!
//! // One pixel, stored as [blue, green, red]
//! let mut buffer = PixelBuffer::from_raw(1, 1, 3, vec![10, 5, 200]).unwrap();
//! convert(&mut buffer, &palette);
//!
//! assert_eq!(buffer.as_bytes(), &[0, 0, 255]);
//! assert_eq!(Color::from_bgr([0, 0, 255]), Color::new(255, 0, 0));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! BMP bytes ──decode──> PixelBuffer ──┐
//!                                     ├──convert──> PixelBuffer ──encode──> BMP bytes
//! hex text ──parse────> Palette ──────┘
//! ```
//!
//! # File Layout
//!
//! The codec reads the 54-byte header field by field (see [`BmpHeader`]),
//! seeks to the declared pixel offset, and drops the per-row padding that
//! aligns every row to 4 bytes. Rows are kept in stored order.
//!
//! Encoding always writes a 54-byte header followed by the pixel bytes
//! back-to-back, **without** row padding. Images whose row length is not a
//! multiple of 4 therefore do not survive an encode/decode round trip
//! unchanged; other readers in this toolchain rely on the packed layout.
//!
//! # Color Matching
//!
//! [`Palette::choose()`] scans the palette in order and keeps the first
//! entry with the smallest squared Euclidean distance in RGB space. Ties go
//! to the earlier entry. An empty palette maps everything to black.

pub mod bitmap;
pub mod buffer;
pub mod color;
pub mod convert;
pub mod palette;


pub use bitmap::{
    decode, encode, encode_to_vec, load_bitmap, save_bitmap, BitmapError, BmpHeader, HEADER_SIZE,
};
pub use buffer::{BufferError, PixelBuffer};
pub use color::Color;
pub use convert::convert;
pub use palette::{choose_colour, Palette, PaletteError};
