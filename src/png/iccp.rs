use super::*;

/// `iCCP`: Embedded ICC profile
///
/// * The profile `name` may be any convenient name for referring to the
///   profile. It is case-sensitive, Latin-1.
/// * The `compressed_profile` is a zlib data stream, and decompression of this
///   datastream yields the embedded ICC profile.
///
/// If this chunk is present, then the `sRGB` chunk *should not* be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct iCCP<'b> {
  pub name: &'b [u8],
  pub compression_method: u8,
  pub compressed_profile: &'b [u8],
}
impl<'b> TryFrom<&'b RawPngChunk> for iCCP<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &'b RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::iCCP)?;
    let (name, rest) = split_nul_terminated(data)
      .ok_or_else(|| chunk.malformed("profile name is not null terminated"))?;
    match *rest {
      [compression_method, ref compressed_profile @ ..] => {
        Ok(Self { name, compression_method, compressed_profile })
      }
      [] => Err(chunk.malformed("missing compression method")),
    }
  }
}
impl iCCP<'_> {
  #[inline]
  #[must_use]
  pub fn name_string(&self) -> String {
    latin1_to_string(self.name)
  }

  /// Inflates the raw ICC profile bytes.
  #[cfg(feature = "miniz_oxide")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
  pub fn decompress_profile(&self, limit: usize) -> PngResult<Vec<u8>> {
    inflate(ChunkType::iCCP, self.compression_method, self.compressed_profile, limit)
  }
}
