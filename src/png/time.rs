use super::*;

/// `tIME`: Image last-modification time.
///
/// Last image modification time, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct tIME {
  /// 4-digit year.
  pub year: u16,
  /// 1-12
  pub month: u8,
  /// 1-31
  pub day: u8,
  /// 0-23
  pub hour: u8,
  /// 0-59
  pub minute: u8,
  /// 0-60 (use 60 for leap seconds)
  pub second: u8,
}
impl TryFrom<&RawPngChunk> for tIME {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &RawPngChunk) -> PngResult<Self> {
    let data = chunk.data_of_type(ChunkType::tIME)?;
    let (year, rest) =
      try_split_off_byte_array::<2>(data).ok_or_else(|| chunk.malformed("needs 7 bytes"))?;
    match *rest {
      [month, day, hour, minute, second, ..] => {
        Ok(Self { year: u16::from_be_bytes(year), month, day, hour, minute, second })
      }
      _ => Err(chunk.malformed("needs 7 bytes")),
    }
  }
}
impl tIME {
  /// Formats as `YYYY-MM-DDTHH:MM:SS+00:00`.
  ///
  /// The values are printed as-is, even if they're out of range.
  #[must_use]
  pub fn iso8601(&self) -> String {
    self.to_string()
  }
}
impl core::fmt::Display for tIME {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}+00:00",
      self.year, self.month, self.day, self.hour, self.minute, self.second
    )
  }
}
