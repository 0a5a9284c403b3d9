use super::*;

/// `tEXt`: Textual data
///
/// A keyword, a null byte, and then the text to the end of the chunk. Both are
/// Latin-1. Normally the keyword length should be 1-79 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct tEXt<'b> {
  pub keyword: &'b [u8],
  pub text: &'b [u8],
}
impl<'b> TryFrom<&'b RawPngChunk> for tEXt<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &'b RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::tEXt)?;
    let (keyword, text) =
      split_nul_terminated(data).ok_or_else(|| chunk.malformed("keyword is not null terminated"))?;
    Ok(Self { keyword, text })
  }
}
impl tEXt<'_> {
  #[inline]
  #[must_use]
  pub fn keyword_string(&self) -> String {
    latin1_to_string(self.keyword)
  }
  #[inline]
  #[must_use]
  pub fn text_string(&self) -> String {
    latin1_to_string(self.text)
  }
}
