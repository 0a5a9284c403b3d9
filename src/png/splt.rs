use super::*;

/// One suggested palette color, widened to `u16` channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpltEntry {
  pub r: u16,
  pub g: u16,
  pub b: u16,
  pub a: u16,
  pub frequency: u16,
}

/// The entry table of an `sPLT`, viewed in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpltEntries<'b> {
  /// 6 bytes each: `r, g, b, a` (`u8`), then a big-endian `u16` frequency.
  Depth8(&'b [[u8; 6]]),
  /// 10 bytes each: `r, g, b, a, frequency`, all big-endian `u16`.
  Depth16(&'b [[u8; 10]]),
}
impl<'b> SpltEntries<'b> {
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    match self {
      Self::Depth8(entries) => entries.len(),
      Self::Depth16(entries) => entries.len(),
    }
  }
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
  #[must_use]
  pub fn get(&self, index: usize) -> Option<SpltEntry> {
    match self {
      Self::Depth8(entries) => entries.get(index).map(|&[r, g, b, a, f0, f1]| SpltEntry {
        r: r.into(),
        g: g.into(),
        b: b.into(),
        a: a.into(),
        frequency: u16::from_be_bytes([f0, f1]),
      }),
      Self::Depth16(entries) => {
        entries.get(index).map(|&[r0, r1, g0, g1, b0, b1, a0, a1, f0, f1]| SpltEntry {
          r: u16::from_be_bytes([r0, r1]),
          g: u16::from_be_bytes([g0, g1]),
          b: u16::from_be_bytes([b0, b1]),
          a: u16::from_be_bytes([a0, a1]),
          frequency: u16::from_be_bytes([f0, f1]),
        })
      }
    }
  }
  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = SpltEntry> + 'b {
    let this = *self;
    (0..this.len()).filter_map(move |i| this.get(i))
  }
}

/// `sPLT`: Suggested palette data.
///
/// A palette name (Latin-1, null terminated), the sample depth (8 or 16), and
/// then the entries to the end of the chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct sPLT<'b> {
  pub palette_name: &'b [u8],
  pub entries: SpltEntries<'b>,
}
impl<'b> TryFrom<&'b RawPngChunk> for sPLT<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &'b RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::sPLT)?;
    let (palette_name, rest) = split_nul_terminated(data)
      .ok_or_else(|| chunk.malformed("palette name is not null terminated"))?;
    let entries = match *rest {
      [8, ref table @ ..] => bytemuck::try_cast_slice(table).map(SpltEntries::Depth8),
      [16, ref table @ ..] => bytemuck::try_cast_slice(table).map(SpltEntries::Depth16),
      [] => return Err(chunk.malformed("missing sample depth")),
      _ => return Err(chunk.malformed("sample depth must be 8 or 16")),
    }
    .map_err(|_| chunk.malformed("entry table has a partial entry"))?;
    Ok(Self { palette_name, entries })
  }
}
impl sPLT<'_> {
  #[inline]
  #[must_use]
  pub fn palette_name_string(&self) -> String {
    latin1_to_string(self.palette_name)
  }
  #[inline]
  #[must_use]
  pub const fn sample_depth(&self) -> u8 {
    match self.entries {
      SpltEntries::Depth8(_) => 8,
      SpltEntries::Depth16(_) => 16,
    }
  }
}
