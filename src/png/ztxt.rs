use super::*;

/// `zTXt`: Compressed textual data
///
/// Chunk data is:
/// * keyword (should be 1-79 bytes)
/// * null byte
/// * compression method (only 0, zlib, is defined)
/// * compressed data stream, to the end of the chunk
///
/// The compressed bytes are only sliced out, not inflated. Use
/// [`decompress`](zTXt::decompress) if you want the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct zTXt<'b> {
  pub keyword: &'b [u8],
  pub compression_method: u8,
  pub compressed: &'b [u8],
}
impl<'b> TryFrom<&'b RawPngChunk> for zTXt<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &'b RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::zTXt)?;
    let (keyword, rest) =
      split_nul_terminated(data).ok_or_else(|| chunk.malformed("keyword is not null terminated"))?;
    match *rest {
      [compression_method, ref compressed @ ..] => {
        Ok(Self { keyword, compression_method, compressed })
      }
      [] => Err(chunk.malformed("missing compression method")),
    }
  }
}
impl zTXt<'_> {
  #[inline]
  #[must_use]
  pub fn keyword_string(&self) -> String {
    latin1_to_string(self.keyword)
  }

  /// Inflates the text, which is Latin-1 once decompressed.
  #[cfg(feature = "miniz_oxide")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
  pub fn decompress(&self, limit: usize) -> PngResult<String> {
    inflate(ChunkType::zTXt, self.compression_method, self.compressed, limit)
      .map(|bytes| latin1_to_string(&bytes))
  }
}
