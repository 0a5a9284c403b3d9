//! `IHDR`: Image header.
//!
//! The header is a fixed 13 byte layout. The single field accessors here work
//! on any chunk and just check that the payload reaches far enough, giving
//! `None` when it doesn't. That way a stream whose first chunk is short (or
//! not even an `IHDR`) can still be poked at safely.

use super::*;

/// Width in pixels, from bytes 0..4.
#[inline]
#[must_use]
pub fn width(ihdr: &RawPngChunk) -> Option<u32> {
  u32_be_at(ihdr.data(), 0)
}

/// Height in pixels, from bytes 4..8.
#[inline]
#[must_use]
pub fn height(ihdr: &RawPngChunk) -> Option<u32> {
  u32_be_at(ihdr.data(), 4)
}

/// Bits per sample (or per palette index), from byte 8.
#[inline]
#[must_use]
pub fn bit_depth(ihdr: &RawPngChunk) -> Option<u8> {
  ihdr.data().get(8).copied()
}

/// From byte 9. Unrecognized values come out as [`ColorType::Unknown`].
#[inline]
#[must_use]
pub fn color_type(ihdr: &RawPngChunk) -> Option<ColorType> {
  ihdr.data().get(9).copied().map(ColorType::from)
}

/// From byte 10. Only 0 (zlib) is defined.
#[inline]
#[must_use]
pub fn compression_method(ihdr: &RawPngChunk) -> Option<u8> {
  ihdr.data().get(10).copied()
}

/// From byte 11. Only 0 (adaptive filtering) is defined.
#[inline]
#[must_use]
pub fn filter_method(ihdr: &RawPngChunk) -> Option<u8> {
  ihdr.data().get(11).copied()
}

/// From byte 12. 0 is no interlace, 1 is Adam7.
#[inline]
#[must_use]
pub fn interlace_method(ihdr: &RawPngChunk) -> Option<u8> {
  ihdr.data().get(12).copied()
}

/// The channel layout of the image's pixels.
///
/// Many ancillary chunks are laid out differently depending on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorType {
  /// 0: one gray sample per pixel.
  Grayscale,
  /// 2: red, green, and blue samples.
  Truecolor,
  /// 3: a palette index per pixel.
  Indexed,
  /// 4: gray and alpha samples.
  GrayscaleAlpha,
  /// 6: red, green, blue, and alpha samples.
  TruecolorAlpha,
  /// Any value the PNG spec doesn't define (1, 5, or 7 and above).
  Unknown(u8),
}
impl From<u8> for ColorType {
  #[inline]
  fn from(value: u8) -> Self {
    match value {
      0 => Self::Grayscale,
      2 => Self::Truecolor,
      3 => Self::Indexed,
      4 => Self::GrayscaleAlpha,
      6 => Self::TruecolorAlpha,
      other => Self::Unknown(other),
    }
  }
}
impl From<ColorType> for u8 {
  #[inline]
  fn from(value: ColorType) -> Self {
    match value {
      ColorType::Grayscale => 0,
      ColorType::Truecolor => 2,
      ColorType::Indexed => 3,
      ColorType::GrayscaleAlpha => 4,
      ColorType::TruecolorAlpha => 6,
      ColorType::Unknown(other) => other,
    }
  }
}
impl ColorType {
  /// Samples per pixel, or `None` for unknown color types.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> Option<u8> {
    match self {
      Self::Grayscale | Self::Indexed => Some(1),
      Self::GrayscaleAlpha => Some(2),
      Self::Truecolor => Some(3),
      Self::TruecolorAlpha => Some(4),
      Self::Unknown(_) => None,
    }
  }
  #[inline]
  #[must_use]
  pub const fn has_alpha(self) -> bool {
    matches!(self, Self::GrayscaleAlpha | Self::TruecolorAlpha)
  }
  /// Checks a bit depth against the combinations the PNG spec allows.
  #[inline]
  #[must_use]
  pub const fn allows_bit_depth(self, bit_depth: u8) -> bool {
    match self {
      Self::Grayscale => matches!(bit_depth, 1 | 2 | 4 | 8 | 16),
      Self::Indexed => matches!(bit_depth, 1 | 2 | 4 | 8),
      Self::Truecolor | Self::GrayscaleAlpha | Self::TruecolorAlpha => {
        matches!(bit_depth, 8 | 16)
      }
      Self::Unknown(_) => false,
    }
  }
}
impl core::fmt::Display for ColorType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Grayscale => f.write_str("0 (grayscale)"),
      Self::Truecolor => f.write_str("2 (truecolor)"),
      Self::Indexed => f.write_str("3 (indexed)"),
      Self::GrayscaleAlpha => f.write_str("4 (grayscale + alpha)"),
      Self::TruecolorAlpha => f.write_str("6 (truecolor + alpha)"),
      Self::Unknown(other) => write!(f, "{other} (unknown)"),
    }
  }
}

/// The whole image header, decoded at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IHDR {
  pub width: u32,
  pub height: u32,
  pub bit_depth: u8,
  pub color_type: ColorType,
  pub compression_method: u8,
  pub filter_method: u8,
  pub interlace_method: u8,
}
impl IHDR {
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method == 1
  }
  /// Bits used by one pixel, when the color type is known.
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(&self) -> Option<u32> {
    match self.color_type.channel_count() {
      Some(channels) => Some(channels as u32 * self.bit_depth as u32),
      None => None,
    }
  }
}
impl TryFrom<&RawPngChunk> for IHDR {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &RawPngChunk) -> PngResult<Self> {
    match *chunk.data_of_type(ChunkType::IHDR)? {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression, filter, interlace] => {
        Ok(Self {
          width: u32::from_be_bytes([w0, w1, w2, w3]),
          height: u32::from_be_bytes([h0, h1, h2, h3]),
          bit_depth,
          color_type: ColorType::from(color_type),
          compression_method: compression,
          filter_method: filter,
          interlace_method: interlace,
        })
      }
      _ => Err(chunk.malformed("header must be 13 bytes")),
    }
  }
}
