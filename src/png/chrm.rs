use super::*;

/// `cHRM`: Primary chromaticities and white point
///
/// Values are stored as an integer 100,000 times the floating point value.
///
/// **Example:** A value of 0.3127 would be stored as the integer 31270.
///
/// An `sRGB` chunk or `iCCP` chunk, when present and recognized, overrides the
/// `cHRM` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct cHRM {
  pub white_x: u32,
  pub white_y: u32,
  pub red_x: u32,
  pub red_y: u32,
  pub green_x: u32,
  pub green_y: u32,
  pub blue_x: u32,
  pub blue_y: u32,
}
impl TryFrom<&RawPngChunk> for cHRM {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::cHRM)?;
    let at = |offset| u32_be_at(data, offset).ok_or_else(|| chunk.malformed("needs 32 bytes"));
    Ok(Self {
      white_x: at(0)?,
      white_y: at(4)?,
      red_x: at(8)?,
      red_y: at(12)?,
      green_x: at(16)?,
      green_y: at(20)?,
      blue_x: at(24)?,
      blue_y: at(28)?,
    })
  }
}
impl cHRM {
  /// White point `[x, y]`.
  #[inline]
  #[must_use]
  pub fn white(&self) -> [f32; 2] {
    [scaled(self.white_x), scaled(self.white_y)]
  }
  #[inline]
  #[must_use]
  pub fn red(&self) -> [f32; 2] {
    [scaled(self.red_x), scaled(self.red_y)]
  }
  #[inline]
  #[must_use]
  pub fn green(&self) -> [f32; 2] {
    [scaled(self.green_x), scaled(self.green_y)]
  }
  #[inline]
  #[must_use]
  pub fn blue(&self) -> [f32; 2] {
    [scaled(self.blue_x), scaled(self.blue_y)]
  }
}

#[inline]
fn scaled(value: u32) -> f32 {
  value as f32 / CHRM_GAMA_SCALE
}
