use palette_remap::{BitmapError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Bitmap(#[from] BitmapError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("No palette file given (use --palette or set `palette` in the config file)")]
    MissingPalette,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_missing_palette_message() {
        let error = ConvertError::MissingPalette;
        assert_eq!(
            error.to_string(),
            "No palette file given (use --palette or set `palette` in the config file)"
        );
    }

    #[test]
    fn test_bitmap_error_is_transparent() {
        let error: ConvertError = BitmapError::Open {
            path: PathBuf::from("photo.bmp"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "error loading bitmap from photo.bmp: No such file or directory"
        );
    }

    #[test]
    fn test_palette_error_is_transparent() {
        let error: ConvertError = PaletteError::Open {
            path: PathBuf::from("colors.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "error opening file colors.txt: Permission denied"
        );
        match error {
            ConvertError::Palette(_) => {}
            _ => panic!("Expected Palette variant"),
        }
    }
}
