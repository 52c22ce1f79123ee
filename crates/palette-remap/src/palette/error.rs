//! Error types for palette operations
//!
//! Malformed palette lines are never errors; they are dropped while parsing.
//! [`PaletteError`] only covers failing to read the palette source at all.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for scanning a single hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// No hexadecimal digit found where the number should start
    NoDigits,
    /// Digits do not fit in 32 bits
    Overflow,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::NoDigits => write!(f, "no hexadecimal digits found"),
            ParseColorError::Overflow => write!(f, "hex value does not fit in 32 bits"),
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for loading a palette.
#[derive(Debug)]
pub enum PaletteError {
    /// The palette file could not be opened
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// Reading from an already opened source failed
    Read(io::Error),
}

impl From<io::Error> for PaletteError {
    fn from(err: io::Error) -> Self {
        PaletteError::Read(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Open { path, source } => {
                write!(f, "error opening file {}: {}", path.display(), source)
            }
            PaletteError::Read(err) => {
                write!(f, "error reading palette: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::Open { source, .. } => Some(source),
            PaletteError::Read(err) => Some(err),
        }
    }
}
