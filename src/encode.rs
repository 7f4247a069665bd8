use alloc::vec::Vec;
use enough::Stop;

use crate::error::SeifError;
use crate::pixel::{PixelLayout, SeifEncoding};

/// Signature written when none is given.
pub const DEFAULT_SIGNATURE: [u8; 8] = *b"zenseif\0";

/// Encode request: target encoding plus header fields the caller may set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeRequest {
    pub(crate) encoding: SeifEncoding,
    pub(crate) flags: u32,
    pub(crate) signature: [u8; 8],
}

impl EncodeRequest {
    pub fn new(encoding: SeifEncoding) -> Self {
        Self {
            encoding,
            flags: 0,
            signature: DEFAULT_SIGNATURE,
        }
    }

    pub fn rgb() -> Self {
        Self::new(SeifEncoding::Rgb)
    }

    pub fn rgba() -> Self {
        Self::new(SeifEncoding::Rgba)
    }

    pub fn argb() -> Self {
        Self::new(SeifEncoding::Argb)
    }

    /// Set the reserved `flags` word.
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_signature(mut self, signature: [u8; 8]) -> Self {
        self.signature = signature;
        self
    }

    /// Encode `pixels` (`Rgb8` or `Rgba8`, row-major, tightly packed).
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
        stop: impl Stop,
    ) -> Result<Vec<u8>, SeifError> {
        crate::seif::encode_seif(pixels, width, height, layout, self, &stop)
    }
}
