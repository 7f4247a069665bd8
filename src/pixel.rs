/// In-memory pixel layout accepted by the encoder and produced by the decoder.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA. The decoder always produces this layout.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.bytes_per_pixel()
    }
}

/// Pixel channel order stored in a SEIF payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeifEncoding {
    /// R, G, B; alpha is implicitly opaque.
    Rgb,
    /// R, G, B, A.
    Rgba,
    /// A, R, G, B.
    Argb,
}

impl SeifEncoding {
    /// Parse the on-disk `encoding` tag.
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Self::Rgb),
            1 => Some(Self::Rgba),
            2 => Some(Self::Argb),
            _ => None,
        }
    }

    /// The on-disk `encoding` tag.
    pub fn tag(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::Rgba => 1,
            Self::Argb => 2,
        }
    }

    /// Bytes per pixel in the payload.
    pub fn stride(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba | Self::Argb => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Argb => "ARGB",
        }
    }
}
