use super::*;

/// `bKGD`: Background colour
///
/// Gives an intended background color for the image.
///
/// RGB and Greyscale colors are always given as `u16` values. The actual color
/// selected should stay within the bit depth range of the rest of the image,
/// with an implied alpha value of "fully opaque".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum bKGD {
  Y { y: u16 },
  RGB { r: u16, g: u16, b: u16 },
  Index { i: u8 },
}
impl bKGD {
  pub fn decode(chunk: &RawPngChunk, color_type: ColorType) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::bKGD)?;
    match (color_type, data) {
      (ColorType::Grayscale | ColorType::GrayscaleAlpha, &[y0, y1]) => {
        Ok(Self::Y { y: u16::from_be_bytes([y0, y1]) })
      }
      (ColorType::Truecolor | ColorType::TruecolorAlpha, &[r0, r1, g0, g1, b0, b1]) => {
        Ok(Self::RGB {
          r: u16::from_be_bytes([r0, r1]),
          g: u16::from_be_bytes([g0, g1]),
          b: u16::from_be_bytes([b0, b1]),
        })
      }
      (ColorType::Indexed, &[i]) => Ok(Self::Index { i }),
      (ColorType::Unknown(_), _) => Err(chunk.unsupported(color_type)),
      _ => Err(chunk.malformed("byte count doesn't match the color type")),
    }
  }
}
