//! SEIF container: fixed header, chunk table, raw RGB/RGBA/ARGB payloads.
//!
//! Use top-level [`crate::decode`], [`crate::DecodeRequest`] and
//! [`crate::EncodeRequest`].

mod chunk;
mod encode;
mod header;

pub use header::{CHUNK_HEADER_SIZE, ChunkHeader, HEADER_SIZE, SeifHeader, SeifMeta};

pub(crate) use chunk::decode_chunks;
pub(crate) use encode::encode_seif;
