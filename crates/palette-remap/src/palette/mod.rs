//! Palette types and utilities
//!
//! This module provides the [`Palette`] type, the permissive hex scanner used
//! to read palette files, and nearest-color matching.

mod error;
mod palette;
mod parse;

pub use error::{PaletteError, ParseColorError};
pub use palette::{choose_colour, Palette};
pub use parse::scan_hex;
