use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::ConvertError;

#[derive(Parser, Debug)]
#[command(name = "palette-converter", version)]
#[command(
    about = "Palette Converter replaces the colours in a bitmap image to conform to the given colour palette."
)]
pub struct Cli {
    /// Bitmap image file
    #[arg(short, long, value_name = "BMP")]
    pub file: PathBuf,

    /// Text file containing list of hex colour values separated by new lines
    #[arg(short, long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Output file name [default: converted.bmp]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// YAML file with default palette and output paths
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved paths for one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub palette: PathBuf,
    pub output: PathBuf,
}

impl Cli {
    /// Combine CLI flags with config defaults. Flags win.
    pub fn into_job(self, config: &AppConfig) -> Result<ConversionJob, ConvertError> {
        let palette = self
            .palette
            .or_else(|| config.palette.clone())
            .ok_or(ConvertError::MissingPalette)?;

        Ok(ConversionJob {
            input: self.file,
            palette,
            output: self.output.unwrap_or_else(|| config.output.clone()),
        })
    }

    /// Default tracing filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "palette_converter=warn",
            1 => "palette_converter=info",
            _ => "palette_converter=debug",
        }
    }
}
