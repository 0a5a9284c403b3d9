use super::*;

/// Rendering intent, as defined by the International Color Consortium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SrgbIntent {
  /// for images preferring good adaptation to the output device gamut at the
  /// expense of colorimetric accuracy, such as photographs.
  Perceptual = 0,
  /// for images requiring colour appearance matching (relative to the output
  /// device white point), such as logos.
  RelativeColorimetric = 1,
  /// for images preferring preservation of saturation at the expense of hue and
  /// lightness, such as charts and graphs.
  Saturation = 2,
  /// for images requiring preservation of absolute colorimetry, such as
  /// previews of images destined for a different output device (proofs).
  AbsoluteColorimetric = 3,
}
impl TryFrom<u8> for SrgbIntent {
  type Error = ();
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::Perceptual,
      1 => Self::RelativeColorimetric,
      2 => Self::Saturation,
      3 => Self::AbsoluteColorimetric,
      _ => return Err(()),
    })
  }
}

/// `sRGB`: Standard RGB colour space
///
/// If the `sRGB` chunk is present, the image samples conform to the
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) colour space.
///
/// If `sRGB` is present it overrides any `gAMA` and/or `cHRM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct sRGB {
  pub intent: SrgbIntent,
}
impl TryFrom<&RawPngChunk> for sRGB {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &RawPngChunk) -> PngResult<Self> {
    match chunk.data_of_type(ChunkType::sRGB)?.first() {
      None => Err(chunk.malformed("needs 1 byte")),
      Some(&b) => SrgbIntent::try_from(b)
        .map(|intent| Self { intent })
        .map_err(|_| chunk.malformed("unknown rendering intent")),
    }
  }
}
