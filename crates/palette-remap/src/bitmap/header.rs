//! The fixed 54-byte BMP header.
//!
//! Fields are read and written one at a time, little-endian, in file order:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0  | 2 | magic (`BM`) |
//! | 2  | 4 | file size |
//! | 6  | 2 | reserved |
//! | 8  | 2 | reserved |
//! | 10 | 4 | pixel data offset |
//! | 14 | 4 | info header size (40) |
//! | 18 | 4 | width |
//! | 22 | 4 | height |
//! | 26 | 2 | planes (1) |
//! | 28 | 2 | bits per pixel |
//! | 30 | 4 | compression |
//! | 34 | 4 | image size |
//! | 38 | 4 | horizontal pixels per metre |
//! | 42 | 4 | vertical pixels per metre |
//! | 46 | 4 | colors used |
//! | 50 | 4 | important colors |

use std::io::{self, Read, Write};

use byteorder::{ByteOrder, ReadBytesExt, LE};

/// Total size of the file header plus info header.
pub const HEADER_SIZE: u32 = 54;

/// Size of the `BITMAPINFOHEADER` block.
pub const INFO_HEADER_SIZE: u32 = 40;

/// File type tag.
pub const MAGIC: [u8; 2] = *b"BM";

/// Parsed BMP header.
///
/// Decoding trusts whatever the file declares; only `width`, `height`,
/// `bits_per_pixel` and `pixel_offset` influence how pixels are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub magic: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset of the first pixel row from the start of the file
    pub pixel_offset: u32,
    pub info_header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_px_per_metre: u32,
    pub y_px_per_metre: u32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl BmpHeader {
    /// Header describing a packed image written right after the header.
    ///
    /// The file size counts unpadded pixel bytes, matching what
    /// [`encode`](super::encode) writes. Arithmetic wraps at 32 bits like the
    /// on-disk field does.
    pub fn for_image(width: u32, height: u32, channels: u32) -> Self {
        let pixel_bytes = width.wrapping_mul(height).wrapping_mul(channels);
        Self {
            magic: MAGIC,
            file_size: HEADER_SIZE.wrapping_add(pixel_bytes),
            reserved1: 0,
            reserved2: 0,
            pixel_offset: HEADER_SIZE,
            info_header_size: INFO_HEADER_SIZE,
            width,
            height,
            planes: 1,
            bits_per_pixel: channels.wrapping_mul(8) as u16,
            compression: 0,
            image_size: 0,
            x_px_per_metre: 0,
            y_px_per_metre: 0,
            colors_used: 0,
            important_colors: 0,
        }
    }

    /// Read the 54 header bytes from `reader`.
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 2];
        reader.read_exact(&mut magic)?;

        Ok(Self {
            magic,
            file_size: reader.read_u32::<LE>()?,
            reserved1: reader.read_u16::<LE>()?,
            reserved2: reader.read_u16::<LE>()?,
            pixel_offset: reader.read_u32::<LE>()?,
            info_header_size: reader.read_u32::<LE>()?,
            width: reader.read_u32::<LE>()?,
            height: reader.read_u32::<LE>()?,
            planes: reader.read_u16::<LE>()?,
            bits_per_pixel: reader.read_u16::<LE>()?,
            compression: reader.read_u32::<LE>()?,
            image_size: reader.read_u32::<LE>()?,
            x_px_per_metre: reader.read_u32::<LE>()?,
            y_px_per_metre: reader.read_u32::<LE>()?,
            colors_used: reader.read_u32::<LE>()?,
            important_colors: reader.read_u32::<LE>()?,
        })
    }

    /// Serialize the header into its 54-byte on-disk form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE as usize] {
        let mut buf = [0u8; HEADER_SIZE as usize];
        buf[0..2].copy_from_slice(&self.magic);
        LE::write_u32(&mut buf[2..6], self.file_size);
        LE::write_u16(&mut buf[6..8], self.reserved1);
        LE::write_u16(&mut buf[8..10], self.reserved2);
        LE::write_u32(&mut buf[10..14], self.pixel_offset);
        LE::write_u32(&mut buf[14..18], self.info_header_size);
        LE::write_u32(&mut buf[18..22], self.width);
        LE::write_u32(&mut buf[22..26], self.height);
        LE::write_u16(&mut buf[26..28], self.planes);
        LE::write_u16(&mut buf[28..30], self.bits_per_pixel);
        LE::write_u32(&mut buf[30..34], self.compression);
        LE::write_u32(&mut buf[34..38], self.image_size);
        LE::write_u32(&mut buf[38..42], self.x_px_per_metre);
        LE::write_u32(&mut buf[42..46], self.y_px_per_metre);
        LE::write_u32(&mut buf[46..50], self.colors_used);
        LE::write_u32(&mut buf[50..54], self.important_colors);
        buf
    }

    /// Write the 54 header bytes to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Bytes per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        u32::from(self.bits_per_pixel) / 8
    }

    /// Unpadded bytes per row.
    #[inline]
    pub fn row_bytes(&self) -> u64 {
        u64::from(self.width) * u64::from(self.channels())
    }

    /// Trailing bytes that pad each stored row to a multiple of 4.
    #[inline]
    pub fn row_padding(&self) -> u64 {
        let row_bytes = self.row_bytes();
        row_bytes.div_ceil(4) * 4 - row_bytes
    }
}
