//! # zenseif
//!
//! Decoder and encoder for SEIF, a small raster container: a fixed 36-byte
//! header, a chunk table, and raw pixels in one of three channel orders.
//!
//! Decoding always produces tightly packed RGBA8 (`4 * width * height`
//! bytes) regardless of the stored encoding, ready to hand to a renderer.
//!
//! ## Supported Encodings
//!
//! - **RGB** — 3 bytes/pixel, alpha treated as opaque
//! - **RGBA** — 4 bytes/pixel
//! - **ARGB** — 4 bytes/pixel, alpha first
//!
//! ## Non-Goals
//!
//! - Multi-chunk images. Files declaring more than one chunk are rejected
//!   with [`SeifError::UnsupportedMultiChunk`].
//! - Rendering, windows, file I/O. The core works on an in-memory buffer.
//!
//! ## Usage
//!
//! ```
//! use zenseif::{EncodeRequest, ImageInfo, PixelLayout, Unstoppable};
//!
//! let rgba = [255, 0, 0, 255, 0, 255, 0, 128, 0, 0, 255, 64, 9, 9, 9, 0];
//! let file = EncodeRequest::argb().encode(&rgba, 2, 2, PixelLayout::Rgba8, Unstoppable)?;
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(&file)?;
//! assert_eq!((info.width(), info.height()), (2, 2));
//!
//! let images = zenseif::decode(&file, Unstoppable)?;
//! assert_eq!(images[0].pixels(), &rgba[..]);
//! # Ok::<(), zenseif::SeifError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod logging;
mod pixel;

pub mod seif;

mod decode;
mod encode;

use alloc::vec::Vec;

// Re-exports
pub use decode::{DecodeRequest, DecodedImage};
pub use encode::{DEFAULT_SIGNATURE, EncodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::SeifError;
pub use info::{ChunkInfo, ImageInfo, MAX_PROBED_CHUNKS};
pub use limits::Limits;
pub use pixel::{PixelLayout, SeifEncoding};
pub use seif::{SeifHeader, SeifMeta};

/// Decode a SEIF buffer to RGBA8 images with no limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Vec<DecodedImage>, SeifError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode pixels as a single-chunk SEIF image in `encoding`.
pub fn encode_seif(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    encoding: SeifEncoding,
    stop: impl Stop,
) -> Result<Vec<u8>, SeifError> {
    EncodeRequest::new(encoding).encode(pixels, width, height, layout, stop)
}
