use super::*;

/// `PLTE`: Palette
///
/// Palette entries are always RGB, one byte per channel.
///
/// If you want to have a paletted image with transparency then the transparency
/// info goes in a separate `tRNS` chunk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PLTE<'b> {
  entries: &'b [[u8; 3]],
}
impl<'b> TryFrom<&'b RawPngChunk> for PLTE<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &'b RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::PLTE)?;
    match bytemuck::try_cast_slice::<u8, [u8; 3]>(data) {
      Ok(entries) => Ok(Self { entries }),
      Err(_) => Err(chunk.malformed("length is not a multiple of 3")),
    }
  }
}
impl Debug for PLTE<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // currently prints no more than 4 palette entries
    f.debug_tuple("PLTE")
      .field(&&self.entries[..self.entries.len().min(4)])
      .field(&self.entries.len())
      .finish()
  }
}
impl<'b> PLTE<'b> {
  /// Gets the entries as a slice, in file order.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &'b [[u8; 3]] {
    self.entries
  }
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
  #[inline]
  #[must_use]
  pub fn get(&self, index: usize) -> Option<[u8; 3]> {
    self.entries.get(index).copied()
  }
}
