use crate::SeifError;
use alloc::format;

/// Caps applied to a SEIF image before any pixel is transcoded.
///
/// Every SEIF decode produces RGBA8, so the memory cap is measured against
/// `width * height * 4` regardless of the file's encoding. Unset fields do not
/// restrict anything.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum `width * height` of a chunk.
    pub max_pixels: Option<u64>,
    /// Maximum size of one decoded RGBA8 buffer, in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject a chunk whose declared dimensions exceed the caps.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), SeifError> {
        if let Some(max_w) = self.max_width
            && u64::from(width) > max_w
        {
            return Err(SeifError::LimitExceeded(format!(
                "chunk width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height
            && u64::from(height) > max_h
        {
            return Err(SeifError::LimitExceeded(format!(
                "chunk height {height} exceeds limit {max_h}"
            )));
        }
        if let Some(max_px) = self.max_pixels
            && pixel_count(width, height) > max_px
        {
            return Err(SeifError::LimitExceeded(format!(
                "{width}x{height} chunk exceeds pixel limit {max_px}"
            )));
        }
        Ok(())
    }

    /// Reject a chunk whose RGBA8 output would exceed `max_memory_bytes`.
    pub(crate) fn check_rgba_output(&self, width: u32, height: u32) -> Result<(), SeifError> {
        // Saturates: u32::MAX squared times 4 does not fit in u64.
        let bytes = pixel_count(width, height).saturating_mul(4);
        if let Some(max_mem) = self.max_memory_bytes
            && bytes > max_mem
        {
            return Err(SeifError::LimitExceeded(format!(
                "{width}x{height} RGBA output of {bytes} bytes exceeds memory limit {max_mem}"
            )));
        }
        Ok(())
    }
}

fn pixel_count(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height)
}
