use std::io::Cursor;
use std::path::Path;

use palette_remap::{convert, decode, encode_to_vec, load_bitmap, save_bitmap, Palette, PixelBuffer};

use crate::error::ConvertError;

/// Summary of one finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub width: u32,
    pub height: u32,
    /// Pixels whose color was replaced
    pub changed: usize,
    /// Size of the written file in bytes
    pub bytes_written: usize,
}

/// Conversion pipeline that orchestrates decode → remap → encode
///
/// The palette is parsed once and reused for every image converted with
/// this pipeline.
pub struct ConversionPipeline {
    palette: Palette,
}

impl ConversionPipeline {
    pub fn new(palette: Palette) -> Self {
        if palette.is_empty() {
            tracing::warn!("Palette has no valid colors, every pixel will become black");
        }
        Self { palette }
    }

    /// Build a pipeline from a palette file
    pub fn from_palette_file(path: &Path) -> Result<Self, ConvertError> {
        let palette = Palette::load(path)?;
        tracing::info!(path = %path.display(), colors = palette.len(), "Loaded palette");
        for (i, color) in palette.iter().enumerate() {
            tracing::debug!(index = i, %color, "Palette entry");
        }
        Ok(Self::new(palette))
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Remap a decoded image in place
    pub fn convert_buffer(&self, buffer: &mut PixelBuffer) -> usize {
        let changed = convert(buffer, &self.palette);
        tracing::debug!(
            pixels = buffer.width() as usize * buffer.height() as usize,
            changed,
            "Converted pixels"
        );
        changed
    }

    /// Remap an in-memory BMP and return the encoded result
    pub fn convert_bytes(&self, bmp: &[u8]) -> Result<Vec<u8>, ConvertError> {
        let mut buffer = decode(&mut Cursor::new(bmp))?;
        self.convert_buffer(&mut buffer);
        Ok(encode_to_vec(&buffer))
    }

    /// Convert `input` with the palette in `palette_path`, writing `output`.
    ///
    /// The bitmap is read before the palette file is opened, so when both
    /// are unusable the bitmap error is the one reported.
    pub fn run(
        input: &Path,
        palette_path: &Path,
        output: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        let buffer = load_input(input)?;
        let pipeline = Self::from_palette_file(palette_path)?;
        pipeline.finish(buffer, output)
    }

    /// Read `input`, remap it and write the result to `output`.
    ///
    /// The output is encoded in memory first, so nothing is written unless
    /// every earlier step succeeded.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConversionReport, ConvertError> {
        let buffer = load_input(input)?;
        self.finish(buffer, output)
    }

    fn finish(&self, mut buffer: PixelBuffer, output: &Path) -> Result<ConversionReport, ConvertError> {
        let changed = self.convert_buffer(&mut buffer);

        let bytes_written = save_bitmap(&buffer, output)?;
        tracing::info!(path = %output.display(), bytes = bytes_written, "Wrote bitmap");

        Ok(ConversionReport {
            width: buffer.width(),
            height: buffer.height(),
            changed,
            bytes_written,
        })
    }
}

fn load_input(input: &Path) -> Result<PixelBuffer, ConvertError> {
    let buffer = load_bitmap(input)?;
    tracing::info!(
        path = %input.display(),
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels(),
        "Loaded bitmap"
    );
    Ok(buffer)
}
