//! Chunk table traversal and payload transcoding to RGBA8.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{ChunkHeader, SeifHeader, region};
use crate::decode::DecodedImage;
use crate::error::SeifError;
use crate::limits::Limits;
use crate::logging::trace;
use crate::pixel::SeifEncoding;

/// Decode every chunk of an already-validated header into RGBA8 images.
///
/// Either all chunks decode or the first violated invariant is returned.
pub(crate) fn decode_chunks(
    data: &[u8],
    header: &SeifHeader,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<DecodedImage>, SeifError> {
    if header.chunk_count > 1 {
        return Err(SeifError::UnsupportedMultiChunk(header.chunk_count));
    }

    let mut images = Vec::with_capacity(header.chunk_count as usize);
    for index in 0..header.chunk_count {
        images.push(decode_chunk(data, header, index, limits, stop)?);
    }
    Ok(images)
}

fn decode_chunk(
    data: &[u8],
    header: &SeifHeader,
    index: u32,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodedImage, SeifError> {
    let chunk = ChunkHeader::read(data, header.chunk_offset(index))?;
    trace!("chunk {index}: {}x{}", chunk.width, chunk.height);

    let (width, height) = (header.meta.width, header.meta.height);
    if chunk.width != width || chunk.height != height {
        return Err(SeifError::ChunkDimensionMismatch {
            index,
            expected_width: width,
            expected_height: height,
            actual_width: chunk.width,
            actual_height: chunk.height,
        });
    }
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }

    let stride = header.encoding_stride() as u64;
    let payload_offset = header.payload_offset(index);
    let payload = region(data, payload_offset, header.payload_len(), "chunk payload")?;

    // The payload may be padded past width * height, never short of it.
    let pixel_count = u64::from(width) * u64::from(height);
    let pixels_oob = |len| SeifError::OutOfBounds {
        what: "chunk pixels",
        offset: payload_offset,
        len,
        available: data.len(),
    };
    let encoded_len = pixel_count
        .checked_mul(stride)
        .ok_or_else(|| pixels_oob(u64::MAX))?;
    if encoded_len > payload.len() as u64 {
        return Err(pixels_oob(encoded_len));
    }

    if let Some(limits) = limits {
        limits.check_rgba_output(width, height)?;
    }
    stop.check()?;

    // encoded_len <= payload.len(), so it fits in usize.
    let encoded = &payload[..encoded_len as usize];
    let pixels = transcode(encoded, header.encoding, width as usize, stop)?;
    Ok(DecodedImage::new(pixels, width, height))
}

/// Convert row-major `src` pixels in `encoding` to RGBA8.
fn transcode(
    src: &[u8],
    encoding: SeifEncoding,
    width: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, SeifError> {
    let stride = encoding.stride();
    let out_len = src.len() / stride * 4;

    let mut out = Vec::new();
    out.try_reserve_exact(out_len)
        .map_err(|_| SeifError::OutOfMemory(out_len))?;
    out.resize(out_len, 0);
    if out_len == 0 {
        return Ok(out);
    }

    let rows = src
        .chunks_exact(width * stride)
        .zip(out.chunks_exact_mut(width * 4));
    for (row_idx, (src_row, dst_row)) in rows.enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        match encoding {
            SeifEncoding::Rgb => rgb_to_rgba(src_row, dst_row),
            SeifEncoding::Rgba => dst_row.copy_from_slice(src_row),
            SeifEncoding::Argb => argb_to_rgba(src_row, dst_row),
        }
    }
    Ok(out)
}

#[cfg(feature = "simd")]
fn rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    // garb only rejects empty or misaligned rows, which the caller rules out.
    if garb::bytes::rgb_to_rgba(src, dst).is_err() {
        rgb_to_rgba_scalar(src, dst);
    }
}

#[cfg(not(feature = "simd"))]
fn rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    rgb_to_rgba_scalar(src, dst);
}

fn rgb_to_rgba_scalar(src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[0];
        d[1] = s[1];
        d[2] = s[2];
        d[3] = 255;
    }
}

fn argb_to_rgba(src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[1];
        d[1] = s[2];
        d[2] = s[3];
        d[3] = s[0];
    }
}
