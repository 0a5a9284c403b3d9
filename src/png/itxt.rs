use super::*;

/// `iTXt`: International textual data
///
/// Chunk data is:
/// * keyword (Latin-1), null byte
/// * compression flag (0 uncompressed, 1 compressed)
/// * compression method (only 0, zlib, is defined)
/// * language tag (ASCII, possibly empty), null byte
/// * translated keyword (UTF-8, possibly empty), null byte
/// * text (UTF-8, possibly compressed), to the end of the chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct iTXt<'b> {
  pub keyword: &'b [u8],
  pub text_is_compressed: bool,
  pub compression_method: u8,
  pub language_tag: &'b [u8],
  /// The keyword value, translated into the target language
  pub translated_keyword: &'b [u8],
  /// Possibly-compressed data, when in decompressed form it should be UTF-8
  /// text in the target language.
  pub text: &'b [u8],
}
impl<'b> TryFrom<&'b RawPngChunk> for iTXt<'b> {
  type Error = DecodeError;
  fn try_from(chunk: &'b RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::iTXt)?;
    let (keyword, rest) =
      split_nul_terminated(data).ok_or_else(|| chunk.malformed("keyword is not null terminated"))?;
    let ([flag, compression_method], rest) = try_split_off_byte_array::<2>(rest)
      .ok_or_else(|| chunk.malformed("missing compression flag and method"))?;
    let text_is_compressed = match flag {
      0 => false,
      1 => true,
      _ => return Err(chunk.malformed("compression flag must be 0 or 1")),
    };
    let (language_tag, rest) = split_nul_terminated(rest)
      .ok_or_else(|| chunk.malformed("language tag is not null terminated"))?;
    let (translated_keyword, text) = split_nul_terminated(rest)
      .ok_or_else(|| chunk.malformed("translated keyword is not null terminated"))?;
    Ok(Self {
      keyword,
      text_is_compressed,
      compression_method,
      language_tag,
      translated_keyword,
      text,
    })
  }
}
impl iTXt<'_> {
  #[inline]
  #[must_use]
  pub fn keyword_string(&self) -> String {
    latin1_to_string(self.keyword)
  }
  /// The language tag, if it's valid UTF-8 (it should be ASCII).
  #[inline]
  #[must_use]
  pub fn language_tag_str(&self) -> Option<&str> {
    core::str::from_utf8(self.language_tag).ok()
  }
  #[inline]
  #[must_use]
  pub fn translated_keyword_str(&self) -> Option<&str> {
    core::str::from_utf8(self.translated_keyword).ok()
  }
  /// The text, when it's uncompressed and valid UTF-8.
  #[inline]
  #[must_use]
  pub fn text_str(&self) -> Option<&str> {
    if self.text_is_compressed {
      None
    } else {
      core::str::from_utf8(self.text).ok()
    }
  }

  /// Gets the text as a `String`, inflating it first if it's compressed.
  #[cfg(feature = "miniz_oxide")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
  pub fn decompress_text(&self, limit: usize) -> PngResult<String> {
    let bytes = if self.text_is_compressed {
      inflate(ChunkType::iTXt, self.compression_method, self.text, limit)?
    } else {
      self.text.to_vec()
    };
    String::from_utf8(bytes).map_err(|_| DecodeError::Malformed {
      chunk_ty: ChunkType::iTXt,
      reason: "text is not UTF-8",
    })
  }
}
