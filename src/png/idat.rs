use super::*;

/// `IDAT`: Image data
///
/// A piece of the zlib compressed, filtered image data. All the `IDAT` chunks of
/// an image together form one zlib stream. This crate doesn't decompress it,
/// you only get the raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IDAT<'b> {
  pub data: &'b [u8],
}
impl<'b> TryFrom<&'b RawPngChunk> for IDAT<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &'b RawPngChunk) -> PngResult<Self> {
    chunk.data_of_type(ChunkType::IDAT).map(|data| Self { data })
  }
}
impl IDAT<'_> {
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.len()
  }
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }
}
