use super::*;

/// `sBIT`: Significant bits
///
/// Gives the original number of significant bits per channel in the image.
///
/// * Each value here should be more than 0 and less than the full bit depth of
///   this PNG.
/// * Indexed color uses the `RGB` variant, and the values must be less than 8.
/// * The variant used matches the color type of the image, see
///   [`sBIT::decode`].
/// * If the color type doesn't have alpha but a `tRNS` chunk is present then
///   all alpha bits are assumed to be significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum sBIT {
  Y { y: u8 },
  YA { y: u8, a: u8 },
  RGB { r: u8, g: u8, b: u8 },
  RGBA { r: u8, g: u8, b: u8, a: u8 },
}
impl sBIT {
  pub fn decode(chunk: &RawPngChunk, color_type: ColorType) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::sBIT)?;
    match (color_type, data) {
      (ColorType::Grayscale, &[y]) => Ok(Self::Y { y }),
      (ColorType::GrayscaleAlpha, &[y, a]) => Ok(Self::YA { y, a }),
      (ColorType::Truecolor | ColorType::Indexed, &[r, g, b]) => Ok(Self::RGB { r, g, b }),
      (ColorType::TruecolorAlpha, &[r, g, b, a]) => Ok(Self::RGBA { r, g, b, a }),
      (ColorType::Unknown(_), _) => Err(chunk.unsupported(color_type)),
      _ => Err(chunk.malformed("byte count doesn't match the color type")),
    }
  }

  /// Number of channels given.
  #[inline]
  #[must_use]
  pub const fn len(self) -> usize {
    match self {
      Self::Y { .. } => 1,
      Self::YA { .. } => 2,
      Self::RGB { .. } => 3,
      Self::RGBA { .. } => 4,
    }
  }

  /// The values in channel order.
  #[inline]
  pub fn iter(self) -> impl Iterator<Item = u8> {
    let padded = match self {
      Self::Y { y } => [y, 0, 0, 0],
      Self::YA { y, a } => [y, a, 0, 0],
      Self::RGB { r, g, b } => [r, g, b, 0],
      Self::RGBA { r, g, b, a } => [r, g, b, a],
    };
    padded.into_iter().take(self.len())
  }
}
