//! Owned pixel storage addressed as width × height × channel.
//!
//! [`PixelBuffer`] is the single handle to decoded image bytes. Pixels are
//! laid out the way a BMP stores them once row padding is removed: rows one
//! after another, each row `width` pixels, each pixel `channels` bytes.

use std::fmt;
use std::slice::{ChunksExact, ChunksExactMut};

/// Error constructing a [`PixelBuffer`] from raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Byte count does not equal `width * height * channels`
    LengthMismatch {
        /// Length implied by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// `width * height * channels` does not fit in `usize`
    TooLarge,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel data length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            BufferError::TooLarge => write!(f, "image dimensions overflow addressable memory"),
        }
    }
}

impl std::error::Error for BufferError {}

/// A contiguous, exclusively owned block of pixel bytes.
///
/// The byte length always equals `width * height * channels`; every
/// constructor enforces this.
///
/// # Example
///
/// ```
/// use palette_remap::PixelBuffer;
///
/// let mut buffer = PixelBuffer::new(2, 2, 3);
/// buffer.pixel_mut(1, 0).copy_from_slice(&[1, 2, 3]);
///
/// assert_eq!(buffer.get(1, 0, 2), 3);
/// assert_eq!(buffer.as_bytes().len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * channels` overflows `usize`. Use
    /// [`PixelBuffer::byte_len`] first when the dimensions are untrusted.
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        let len = Self::byte_len(width, height, channels)
            .unwrap_or_else(|| panic!("{}x{}x{} pixel buffer is too large", width, height, channels));
        Self {
            width,
            height,
            channels,
            data: vec![0; len],
        }
    }

    /// Wrap existing bytes, checking their length against the dimensions.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: u32,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        let expected = Self::byte_len(width, height, channels).ok_or(BufferError::TooLarge)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Number of bytes a buffer of these dimensions occupies, or `None` on overflow.
    pub fn byte_len(width: u32, height: u32, channels: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(channels as usize)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give up ownership of the backing bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of channel `c` of pixel `(x, y)`.
    #[inline]
    pub fn offset(&self, x: u32, y: u32, c: u32) -> usize {
        debug_assert!(x < self.width && y < self.height && c < self.channels);
        ((y as usize * self.width as usize) + x as usize) * self.channels as usize + c as usize
    }

    /// Read a single channel byte.
    #[inline]
    pub fn get(&self, x: u32, y: u32, c: u32) -> u8 {
        self.data[self.offset(x, y, c)]
    }

    /// All channel bytes of pixel `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = self.offset(x, y, 0);
        &self.data[start..start + self.channels as usize]
    }

    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let start = self.offset(x, y, 0);
        let end = start + self.channels as usize;
        &mut self.data[start..end]
    }

    /// Bytes of row `y`, unpadded.
    pub fn row(&self, y: u32) -> &[u8] {
        let len = self.row_len();
        let start = y as usize * len;
        &self.data[start..start + len]
    }

    /// Unpadded byte length of one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Iterate pixels in storage order.
    pub fn pixels(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.channels.max(1) as usize)
    }

    /// Iterate pixels mutably in storage order.
    pub fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(self.channels.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let buffer = PixelBuffer::new(3, 2, 3);
        assert_eq!(buffer.as_bytes().len(), 18);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_raw_length_checked() {
        let result = PixelBuffer::from_raw(2, 2, 3, vec![0; 11]);
        assert_eq!(
            result,
            Err(BufferError::LengthMismatch {
                expected: 12,
                actual: 11
            })
        );

        assert!(PixelBuffer::from_raw(2, 2, 3, vec![0; 12]).is_ok());
    }

    #[test]
    fn test_offsets_follow_storage_order() {
        let buffer = PixelBuffer::new(4, 3, 3);
        assert_eq!(buffer.offset(0, 0, 0), 0);
        assert_eq!(buffer.offset(1, 0, 0), 3);
        assert_eq!(buffer.offset(0, 1, 0), 12);
        assert_eq!(buffer.offset(3, 2, 2), 35);
    }

    #[test]
    fn test_pixel_access() {
        let data: Vec<u8> = (0..12).collect();
        let mut buffer = PixelBuffer::from_raw(2, 2, 3, data).unwrap();

        assert_eq!(buffer.pixel(1, 1), &[9, 10, 11]);
        assert_eq!(buffer.row(1), &[6, 7, 8, 9, 10, 11]);

        buffer.pixel_mut(0, 1).copy_from_slice(&[42, 43, 44]);
        assert_eq!(buffer.get(0, 1, 1), 43);
        assert_eq!(buffer.pixels().nth(2), Some(&[42u8, 43, 44][..]));
    }

    #[test]
    fn test_empty_image() {
        let buffer = PixelBuffer::new(0, 5, 3);
        assert!(buffer.as_bytes().is_empty());
        assert_eq!(buffer.pixels().count(), 0);
    }

    #[test]
    fn test_byte_len_overflow() {
        assert_eq!(PixelBuffer::byte_len(u32::MAX, u32::MAX, u32::MAX), None);
        assert_eq!(
            PixelBuffer::from_raw(u32::MAX, u32::MAX, u32::MAX, Vec::new()),
            Err(BufferError::TooLarge)
        );
    }
}
