use super::*;

/// `tRNS`: Transparency
///
/// Stores additional transparency data. The layout depends on the image's
/// color type, so use [`tRNS::decode`].
///
/// * `Y` and `RGB` each store a single color. All samples of that color in the
///   image are fully transparent (alpha 0), while the rest are fully opaque
///   (alpha maximum). The `tRNS` chunk always uses a `u16` to store the value,
///   even if the image's bit depth is less than 16.
/// * `Index` has an alpha value that goes along with the rest of the palette
///   data. The tranparency slice length should be less than or equal to the
///   palette slice length. If the transparency slice is shorter, all missing
///   entries should be assumed to have an alpha value of 255.
///
/// Color types that already have an alpha channel don't allow this chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum tRNS<'b> {
  Y { y: u16 },
  RGB { r: u16, g: u16, b: u16 },
  Index { alphas: &'b [u8] },
}
impl<'b> tRNS<'b> {
  pub fn decode(chunk: &'b RawPngChunk, color_type: ColorType) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::tRNS)?;
    match (color_type, data) {
      (ColorType::Grayscale, &[y0, y1]) => Ok(Self::Y { y: u16::from_be_bytes([y0, y1]) }),
      (ColorType::Truecolor, &[r0, r1, g0, g1, b0, b1]) => Ok(Self::RGB {
        r: u16::from_be_bytes([r0, r1]),
        g: u16::from_be_bytes([g0, g1]),
        b: u16::from_be_bytes([b0, b1]),
      }),
      (ColorType::Indexed, alphas) => Ok(Self::Index { alphas }),
      (ColorType::Grayscale, _) => Err(chunk.malformed("grayscale sample must be 2 bytes")),
      (ColorType::Truecolor, _) => Err(chunk.malformed("truecolor sample must be 6 bytes")),
      (other, _) => Err(chunk.unsupported(other)),
    }
  }

  /// The alpha of a palette entry. Entries past the end of the data are
  /// opaque. `None` if this isn't palette transparency.
  #[inline]
  #[must_use]
  pub fn alpha_for_index(&self, index: usize) -> Option<u8> {
    match self {
      Self::Index { alphas } => Some(alphas.get(index).copied().unwrap_or(u8::MAX)),
      _ => None,
    }
  }
}
