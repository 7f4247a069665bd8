use alloc::vec::Vec;
use core::fmt;

use crate::error::SeifError;
use crate::seif::{ChunkHeader, SeifHeader};

/// Upper bound on chunk headers listed by [`ImageInfo::from_bytes`].
///
/// `chunk_size` may be zero, so a hostile `chunk_count` would otherwise make
/// probing allocate and loop once per declared chunk.
pub const MAX_PROBED_CHUNKS: u32 = 1024;

/// Declared dimensions of one chunk, as found in the chunk table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkInfo {
    pub index: u32,
    /// Byte offset of the chunk header.
    pub offset: u64,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for ChunkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " - [CHUNK {}]:", self.index)?;
        writeln!(f, "    - width: {}", self.width)?;
        write!(f, "    - height: {}", self.height)
    }
}

/// Header and chunk table of a SEIF file, read without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub header: SeifHeader,
    /// The first `min(chunk_count, MAX_PROBED_CHUNKS)` chunk headers, up to
    /// the first one that lies outside the buffer.
    pub chunks: Vec<ChunkInfo>,
    /// A listed chunk header ran past the end of the buffer.
    pub truncated: bool,
}

impl ImageInfo {
    /// Probe a buffer. Multi-chunk files are listed, not rejected.
    ///
    /// Only header errors fail the probe. A chunk table that runs past the
    /// buffer is listed as far as it goes and marked `truncated`, leaving the
    /// verdict on the file to the decoder.
    pub fn from_bytes(data: &[u8]) -> Result<Self, SeifError> {
        let header = SeifHeader::parse(data)?;
        let listed = header.chunk_count.min(MAX_PROBED_CHUNKS);
        let mut chunks = Vec::with_capacity(listed as usize);
        let mut truncated = false;
        for index in 0..listed {
            let offset = header.chunk_offset(index);
            let Ok(chunk) = ChunkHeader::read(data, offset) else {
                truncated = true;
                break;
            };
            chunks.push(ChunkInfo {
                index,
                offset,
                width: chunk.width,
                height: chunk.height,
            });
        }
        Ok(Self {
            header,
            chunks,
            truncated,
        })
    }

    pub fn width(&self) -> u32 {
        self.header.meta.width
    }

    pub fn height(&self) -> u32 {
        self.header.meta.height
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for chunk in &self.chunks {
            write!(f, "\n{chunk}")?;
        }
        if self.truncated {
            write!(f, "\n - [TRUNCATED] chunk table ends after {} entries", self.chunks.len())?;
        }
        Ok(())
    }
}
