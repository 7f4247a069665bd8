use alloc::vec::Vec;
use enough::Stop;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::SeifError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::seif::{self, SeifHeader};

/// One decoded chunk: tightly packed RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    pub(crate) fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Access the pixel data (`4 * width * height` bytes).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Always [`PixelLayout::Rgba8`], whatever the file's encoding.
    pub fn layout(&self) -> PixelLayout {
        PixelLayout::Rgba8
    }

    /// Reinterpret pixel data as typed RGBA pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGBA8] {
        self.pixels.as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGBA pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(
            self.as_pixels(),
            self.width as usize,
            self.height as usize,
        )
    }

    /// Copy into an [`imgref::ImgVec`] of RGBA pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}

/// Decode request over a borrowed SEIF buffer.
///
/// ```no_run
/// use zenseif::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // SEIF file contents
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let images = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// for image in &images {
///     println!("{}x{}, {} bytes", image.width, image.height, image.pixels().len());
/// }
/// # Ok::<(), zenseif::SeifError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before any pixel is transcoded.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse and validate the file header only.
    pub fn header(&self) -> Result<SeifHeader, SeifError> {
        SeifHeader::parse(self.data)
    }

    /// Decode every chunk to RGBA8, in file order.
    pub fn decode(self, stop: impl Stop) -> Result<Vec<DecodedImage>, SeifError> {
        let header = SeifHeader::parse(self.data)?;
        stop.check()?;
        seif::decode_chunks(self.data, &header, self.limits, &stop)
    }
}
