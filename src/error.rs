use alloc::string::String;
use enough::StopReason;

/// Errors from SEIF decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SeifError {
    #[error("buffer too small for SEIF header: need {needed} bytes, got {actual}")]
    TooSmall { needed: usize, actual: usize },

    #[error("bad magic bytes {0:02x?}, expected \"SEIF\"")]
    BadMagic([u8; 4]),

    #[error("unknown pixel encoding tag {0:#010x}")]
    UnknownEncoding(u32),

    #[error("{what} at offset {offset} needs {len} bytes, buffer has {available}")]
    OutOfBounds {
        what: &'static str,
        offset: u64,
        len: u64,
        available: usize,
    },

    #[error("multiple chunks are not supported (chunk_count = {0})")]
    UnsupportedMultiChunk(u32),

    #[error(
        "chunk {index} is {actual_width}x{actual_height}, image is {expected_width}x{expected_height}"
    )]
    ChunkDimensionMismatch {
        index: u32,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("could not allocate {0} bytes")]
    OutOfMemory(usize),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for SeifError {
    fn from(r: StopReason) -> Self {
        SeifError::Cancelled(r)
    }
}
