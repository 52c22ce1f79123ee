//! Error type for bitmap decoding and encoding.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Every bitmap failure is an I/O failure; the variant records where it
/// happened.
///
/// Header values that cannot describe a supported image surface as
/// [`BitmapError::Read`] with [`io::ErrorKind::InvalidData`].
#[derive(Debug)]
pub enum BitmapError {
    /// The source file could not be opened
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The destination file could not be created
    Create {
        /// Path that failed to be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// Reading or seeking the source failed
    Read(io::Error),
    /// Writing the destination failed
    Write(io::Error),
}

impl BitmapError {
    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            BitmapError::Open { source, .. } | BitmapError::Create { source, .. } => source,
            BitmapError::Read(err) | BitmapError::Write(err) => err,
        }
    }
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapError::Open { path, source } => {
                write!(f, "error loading bitmap from {}: {}", path.display(), source)
            }
            BitmapError::Create { path, source } => {
                write!(f, "error saving bitmap at {}: {}", path.display(), source)
            }
            BitmapError::Read(err) => write!(f, "error reading bitmap: {}", err),
            BitmapError::Write(err) => write!(f, "error writing bitmap: {}", err),
        }
    }
}

impl std::error::Error for BitmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}
