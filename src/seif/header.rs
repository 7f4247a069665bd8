//! Fixed-size SEIF file header and per-chunk header.
//!
//! ```text
//! offset  size  field
//!      0     4  magic "SEIF"
//!      4     4  flags (u32 LE, reserved)
//!      8     4  encoding tag (u32 LE): 0 = RGB, 1 = RGBA, 2 = ARGB
//!     12     8  meta.signature
//!     20     4  meta.width (u32 LE)
//!     24     4  meta.height (u32 LE)
//!     28     4  chunk_count (u32 LE)
//!     32     4  chunk_size (u32 LE)
//! ```
//!
//! Chunk `i` starts with an 8-byte chunk header (`width`, `height`, u32 LE)
//! at `HEADER_SIZE + i * chunk_size`.

use core::fmt;

use crate::error::SeifError;
use crate::logging::debug;
use crate::pixel::SeifEncoding;

pub(crate) const MAGIC: [u8; 4] = *b"SEIF";

/// Size in bytes of the fixed file header.
pub const HEADER_SIZE: usize = 36;

/// Size in bytes of each chunk header.
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Metadata block embedded in the file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeifMeta {
    /// Descriptive tag, not validated.
    pub signature: [u8; 8],
    pub width: u32,
    pub height: u32,
}

/// Parsed and validated SEIF file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeifHeader {
    pub flags: u32,
    pub encoding: SeifEncoding,
    pub meta: SeifMeta,
    pub chunk_count: u32,
    /// Declared per-chunk stride. The chunk payload is
    /// `chunk_size * encoding_stride()` bytes.
    pub chunk_size: u32,
}

impl SeifHeader {
    /// Parse and validate the header at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, SeifError> {
        let header: &[u8; HEADER_SIZE] = data
            .get(..HEADER_SIZE)
            .and_then(|h| h.try_into().ok())
            .ok_or(SeifError::TooSmall {
                needed: HEADER_SIZE,
                actual: data.len(),
            })?;

        let magic = [header[0], header[1], header[2], header[3]];
        if magic != MAGIC {
            return Err(SeifError::BadMagic(magic));
        }

        let tag = le_u32(header, 8);
        let encoding = SeifEncoding::from_tag(tag).ok_or(SeifError::UnknownEncoding(tag))?;

        let mut signature = [0u8; 8];
        signature.copy_from_slice(&header[12..20]);

        let parsed = SeifHeader {
            flags: le_u32(header, 4),
            encoding,
            meta: SeifMeta {
                signature,
                width: le_u32(header, 20),
                height: le_u32(header, 24),
            },
            chunk_count: le_u32(header, 28),
            chunk_size: le_u32(header, 32),
        };
        debug!("parsed SEIF header: {parsed:?}");
        Ok(parsed)
    }

    /// Bytes per pixel of the payload encoding (3 or 4).
    pub fn encoding_stride(&self) -> usize {
        self.encoding.stride()
    }

    /// Byte offset of chunk `index`'s header.
    pub fn chunk_offset(&self, index: u32) -> u64 {
        HEADER_SIZE as u64 + u64::from(index) * u64::from(self.chunk_size)
    }

    /// Byte offset of chunk `index`'s encoded pixels.
    ///
    /// Payloads step by the chunk header size, not by `chunk_size`; the two
    /// schemes agree for chunk 0, the only chunk accepted today.
    ///
    /// The C viewer that introduced the format copied from
    /// `HEADER_SIZE + index * CHUNK_HEADER_SIZE` instead, i.e. from the chunk
    /// header itself, so its first pixels were the chunk's width and height.
    pub fn payload_offset(&self, index: u32) -> u64 {
        (HEADER_SIZE + CHUNK_HEADER_SIZE) as u64 + u64::from(index) * CHUNK_HEADER_SIZE as u64
    }

    /// Declared payload length in bytes for each chunk.
    pub fn payload_len(&self) -> u64 {
        u64::from(self.chunk_size) * self.encoding_stride() as u64
    }

    /// Signature bytes up to the first NUL.
    pub fn signature(&self) -> &[u8] {
        let sig = &self.meta.signature;
        let end = sig.iter().position(|&b| b == 0).unwrap_or(sig.len());
        &sig[..end]
    }
}

impl fmt::Display for SeifHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[HEADER]:")?;
        writeln!(f, " - magic: \"SEIF\"")?;
        writeln!(f, " - flags: {:#010x}", self.flags)?;
        writeln!(
            f,
            " - encoding: {} ({:#010x})",
            self.encoding.name(),
            self.encoding.tag()
        )?;
        writeln!(f, " - [META]:")?;
        write!(f, "    - signature: ")?;
        for &b in self.signature() {
            write!(f, "{}", core::ascii::escape_default(b))?;
        }
        writeln!(f)?;
        writeln!(f, "    - width: {}", self.meta.width)?;
        writeln!(f, "    - height: {}", self.meta.height)?;
        writeln!(f, " - chunk_count: {}", self.chunk_count)?;
        write!(f, " - chunk_size: {}", self.chunk_size)
    }
}

/// Dimensions declared by a single chunk header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkHeader {
    pub width: u32,
    pub height: u32,
}

impl ChunkHeader {
    /// Read the chunk header at `offset`, failing if it does not fit.
    pub(crate) fn read(data: &[u8], offset: u64) -> Result<Self, SeifError> {
        let bytes = region(data, offset, CHUNK_HEADER_SIZE as u64, "chunk header")?;
        Ok(ChunkHeader {
            width: le_u32(bytes, 0),
            height: le_u32(bytes, 4),
        })
    }
}

/// Borrow `len` bytes at `offset`, or report which region overran the buffer.
pub(crate) fn region<'a>(
    data: &'a [u8],
    offset: u64,
    len: u64,
    what: &'static str,
) -> Result<&'a [u8], SeifError> {
    let out_of_bounds = || SeifError::OutOfBounds {
        what,
        offset,
        len,
        available: data.len(),
    };
    let end = offset.checked_add(len).ok_or_else(out_of_bounds)?;
    let start = usize::try_from(offset).map_err(|_| out_of_bounds())?;
    let end = usize::try_from(end).map_err(|_| out_of_bounds())?;
    data.get(start..end).ok_or_else(out_of_bounds)
}

/// Callers guarantee `at + 4 <= data.len()`.
fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}
