//! SEIF encoder: writes a single-chunk file.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{CHUNK_HEADER_SIZE, HEADER_SIZE, MAGIC};
use crate::encode::EncodeRequest;
use crate::error::SeifError;
use crate::pixel::{PixelLayout, SeifEncoding};

/// Encode `Rgb8` or `Rgba8` pixels as a single-chunk SEIF image.
///
/// `Rgb8` input gets alpha 255; `Rgb` output drops alpha.
pub(crate) fn encode_seif(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    request: &EncodeRequest,
    stop: &dyn Stop,
) -> Result<Vec<u8>, SeifError> {
    let encoding = request.encoding;
    let chunk_size = width
        .checked_mul(height)
        .ok_or(SeifError::DimensionsTooLarge { width, height })?;

    let w = width as usize;
    let h = height as usize;
    let bpp = layout.bytes_per_pixel();
    let expected = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(bpp))
        .ok_or(SeifError::DimensionsTooLarge { width, height })?;
    if pixels.len() < expected {
        return Err(SeifError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }

    let payload_bytes = (chunk_size as usize)
        .checked_mul(encoding.stride())
        .ok_or(SeifError::DimensionsTooLarge { width, height })?;
    let total = payload_bytes
        .checked_add(HEADER_SIZE + CHUNK_HEADER_SIZE)
        .ok_or(SeifError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| SeifError::OutOfMemory(total))?;

    // File header
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&request.flags.to_le_bytes());
    out.extend_from_slice(&encoding.tag().to_le_bytes());
    out.extend_from_slice(&request.signature);
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&chunk_size.to_le_bytes());

    // Chunk header covering the whole image
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());

    stop.check()?;

    if expected == 0 {
        return Ok(out);
    }
    for (row_idx, row) in pixels[..expected].chunks_exact(w * bpp).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row.chunks_exact(bpp) {
            let (r, g, b) = (px[0], px[1], px[2]);
            let a = if bpp == 4 { px[3] } else { 255 };
            match encoding {
                SeifEncoding::Rgb => out.extend_from_slice(&[r, g, b]),
                SeifEncoding::Rgba => out.extend_from_slice(&[r, g, b, a]),
                SeifEncoding::Argb => out.extend_from_slice(&[a, r, g, b]),
            }
        }
    }

    debug_assert_eq!(out.len(), total);
    Ok(out)
}
