use super::*;

/// `hIST`: Image Histogram
///
/// Gives the approximate usage frequency of each color in the palette.
///
/// Can appear only when a `PLTE` chunk appears, which means indexed color, or
/// truecolor images that carry a suggested palette. If a viewer is unable to
/// provide all the colours listed in the palette, the histogram may help it
/// decide how to choose a subset of the colours for display.
///
/// * There shall be exactly one entry for each entry in the `PLTE` chunk.
/// * A zero entry specifies that the corresponding palette entry is not used at
///   all in the image.
///
/// The frequencies are viewed in place as big-endian values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct hIST<'b> {
  frequencies: &'b [U16BE],
}
impl<'b> hIST<'b> {
  pub fn decode(chunk: &'b RawPngChunk, color_type: ColorType) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::hIST)?;
    if !matches!(color_type, ColorType::Indexed | ColorType::Truecolor | ColorType::TruecolorAlpha)
    {
      return Err(chunk.unsupported(color_type));
    }
    match bytemuck::try_cast_slice::<u8, U16BE>(data) {
      Ok(frequencies) => Ok(Self { frequencies }),
      Err(_) => Err(chunk.malformed("length is not a multiple of 2")),
    }
  }

  #[inline]
  #[must_use]
  pub fn frequencies(&self) -> &'b [U16BE] {
    self.frequencies
  }
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.frequencies.len()
  }
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.frequencies.is_empty()
  }
  /// The frequency for a palette index.
  #[inline]
  #[must_use]
  pub fn get(&self, index: usize) -> Option<u16> {
    self.frequencies.get(index).map(|f| f.get())
  }
  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = u16> + 'b {
    self.frequencies.iter().map(|f| f.get())
  }
}
