use super::*;

const INCHES_PER_METER: f32 = 39.3701;

/// Unit of the `pHYs` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysUnit {
  /// The values only give an aspect ratio.
  Unknown,
  Meter,
  /// A unit byte the PNG spec doesn't define.
  Other(u8),
}
impl From<u8> for PhysUnit {
  #[inline]
  fn from(value: u8) -> Self {
    match value {
      0 => Self::Unknown,
      1 => Self::Meter,
      other => Self::Other(other),
    }
  }
}

/// `pHYs`: Physical pixel dimensions
///
/// Specifies the intended pixel size or aspect ratio for display of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct pHYs {
  pub ppu_x: u32,
  pub ppu_y: u32,
  pub unit: PhysUnit,
}
impl TryFrom<&RawPngChunk> for pHYs {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::pHYs)?;
    match (u32_be_at(data, 0), u32_be_at(data, 4), data.get(8)) {
      (Some(ppu_x), Some(ppu_y), Some(&unit)) => {
        Ok(Self { ppu_x, ppu_y, unit: PhysUnit::from(unit) })
      }
      _ => Err(chunk.malformed("needs 9 bytes")),
    }
  }
}
impl pHYs {
  /// Dots per inch `[x, y]`, only when the unit is meters.
  #[inline]
  #[must_use]
  pub fn dpi(&self) -> Option<[f32; 2]> {
    match self.unit {
      PhysUnit::Meter => {
        Some([self.ppu_x as f32 / INCHES_PER_METER, self.ppu_y as f32 / INCHES_PER_METER])
      }
      _ => None,
    }
  }
}
