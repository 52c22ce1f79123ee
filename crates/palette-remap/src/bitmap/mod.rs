//! Uncompressed BMP container.
//!
//! [`BmpHeader`] maps the fixed 54-byte header, and the codec functions move
//! pixel data between a byte stream and a [`PixelBuffer`](crate::PixelBuffer).

mod codec;
mod error;
mod header;

pub use codec::{decode, encode, encode_to_vec, load_bitmap, save_bitmap};
pub use error::BitmapError;
pub use header::{BmpHeader, HEADER_SIZE, INFO_HEADER_SIZE, MAGIC};
