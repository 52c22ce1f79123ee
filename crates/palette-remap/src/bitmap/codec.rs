//! BMP decode and encode.
//!
//! Decoding honours the declared pixel offset and strips the 4-byte row
//! padding. Encoding writes a 54-byte header and then the pixel bytes with
//! no padding at all; downstream consumers of this tool expect that packed
//! layout.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::error::BitmapError;
use super::header::{BmpHeader, HEADER_SIZE};
use crate::buffer::PixelBuffer;

/// Decode a BMP stream into a [`PixelBuffer`].
///
/// Rows are kept in the order they are stored; no vertical flip is applied.
///
/// # Errors
///
/// [`BitmapError::Read`] when the stream ends early or cannot seek, and when
/// the header declares fewer than 3 bytes per pixel or dimensions that do
/// not fit in memory ([`io::ErrorKind::InvalidData`]).
pub fn decode<R: Read + Seek>(reader: &mut R) -> Result<PixelBuffer, BitmapError> {
    let header = BmpHeader::read_from(reader).map_err(BitmapError::Read)?;
    let channels = header.channels();

    if channels < 3 {
        return Err(invalid_data(format!(
            "unsupported bit depth {} (expected 24)",
            header.bits_per_pixel
        )));
    }

    let len = PixelBuffer::byte_len(header.width, header.height, channels).ok_or_else(|| {
        invalid_data(format!(
            "{}x{} image at {} bits per pixel is too large",
            header.width, header.height, header.bits_per_pixel
        ))
    })?;

    reader
        .seek(SeekFrom::Start(u64::from(header.pixel_offset)))
        .map_err(BitmapError::Read)?;

    let mut data = vec![0u8; len];
    let row_len = header.width as usize * channels as usize;
    let padding = header.row_padding();

    if row_len > 0 {
        for row in data.chunks_exact_mut(row_len) {
            reader.read_exact(row).map_err(BitmapError::Read)?;
            skip(reader, padding).map_err(BitmapError::Read)?;
        }
    }

    PixelBuffer::from_raw(header.width, header.height, channels, data)
        .map_err(|err| invalid_data(err.to_string()))
}

/// Encode `buffer` as a BMP stream.
///
/// Pixel rows are written back-to-back without padding.
pub fn encode<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> Result<(), BitmapError> {
    writer
        .write_all(&header_for(buffer).to_bytes())
        .map_err(BitmapError::Write)?;
    writer.write_all(buffer.as_bytes()).map_err(BitmapError::Write)?;
    writer.flush().map_err(BitmapError::Write)
}

/// Encode `buffer` into a freshly allocated byte vector.
pub fn encode_to_vec(buffer: &PixelBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE as usize + buffer.as_bytes().len());
    bytes.extend_from_slice(&header_for(buffer).to_bytes());
    bytes.extend_from_slice(buffer.as_bytes());
    bytes
}

/// Open and decode the bitmap at `path`.
pub fn load_bitmap(path: impl AsRef<Path>) -> Result<PixelBuffer, BitmapError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BitmapError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&mut BufReader::new(file))
}

/// Encode `buffer` to the file at `path`, replacing any existing file.
///
/// The image is encoded in memory and written in one call, so an encoding
/// problem never leaves a half-written file behind. Returns the number of
/// bytes written.
pub fn save_bitmap(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<usize, BitmapError> {
    let path = path.as_ref();
    let bytes = encode_to_vec(buffer);
    std::fs::write(path, &bytes).map_err(|source| BitmapError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.len())
}

fn header_for(buffer: &PixelBuffer) -> BmpHeader {
    BmpHeader::for_image(buffer.width(), buffer.height(), buffer.channels())
}

/// Discard up to `count` bytes. A short read at end of stream is fine: the
/// last row's padding is often missing from hand-made files.
fn skip<R: Read>(reader: &mut R, count: u64) -> io::Result<()> {
    if count > 0 {
        io::copy(&mut reader.by_ref().take(count), &mut io::sink())?;
    }
    Ok(())
}

fn invalid_data(message: String) -> BitmapError {
    BitmapError::Read(io::Error::new(io::ErrorKind::InvalidData, message))
}
