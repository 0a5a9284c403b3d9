use super::*;

/// `IEND`: Image trailer
///
/// Marks the end of the PNG. It carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IEND;
impl TryFrom<&RawPngChunk> for IEND {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &RawPngChunk) -> PngResult<Self> {
    match chunk.data_of_type(ChunkType::IEND)? {
      [] => Ok(IEND),
      _ => Err(chunk.malformed("trailer must be empty")),
    }
  }
}
impl IEND {
  /// If the chunk is a well formed (empty) `IEND`.
  #[inline]
  #[must_use]
  pub fn is_valid(chunk: &RawPngChunk) -> bool {
    Self::try_from(chunk).is_ok()
  }
}
