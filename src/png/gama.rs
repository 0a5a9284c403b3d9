use super::*;

/// `gAMA`: Image gamma
///
/// Values are stored as an integer 100,000 times the floating point value.
///
/// **Example:** A gamma of 1/2.2 would be stored as the integer 45,455.
///
/// An `sRGB` chunk or `iCCP` chunk, when present and recognized, overrides the
/// `gAMA` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct gAMA {
  pub gamma: u32,
}
impl TryFrom<&RawPngChunk> for gAMA {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::gAMA)?;
    U32BE::from_prefix(data)
      .map(|gamma| Self { gamma: gamma.get() })
      .ok_or_else(|| chunk.malformed("needs 4 bytes"))
  }
}
impl gAMA {
  #[inline]
  #[must_use]
  pub fn gamma_f32(&self) -> f32 {
    self.gamma as f32 / CHRM_GAMA_SCALE
  }
}
