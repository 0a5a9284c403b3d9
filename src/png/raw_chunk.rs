use super::*;

/// The four byte type code of a chunk.
///
/// Bit 5 (the ASCII lowercase bit) of each byte is a property flag. The
/// property queries just report the bits, nothing here enforces them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkType {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const tRNS: Self = Self(*b"tRNS");
  pub const cHRM: Self = Self(*b"cHRM");
  pub const gAMA: Self = Self(*b"gAMA");
  pub const iCCP: Self = Self(*b"iCCP");
  pub const sBIT: Self = Self(*b"sBIT");
  pub const sRGB: Self = Self(*b"sRGB");
  pub const tEXt: Self = Self(*b"tEXt");
  pub const zTXt: Self = Self(*b"zTXt");
  pub const iTXt: Self = Self(*b"iTXt");
  pub const bKGD: Self = Self(*b"bKGD");
  pub const hIST: Self = Self(*b"hIST");
  pub const pHYs: Self = Self(*b"pHYs");
  pub const sPLT: Self = Self(*b"sPLT");
  pub const tIME: Self = Self(*b"tIME");

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }
  /// Critical chunks must be understood to display the image at all.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }
  #[inline]
  #[must_use]
  pub const fn is_ancillary(self) -> bool {
    !self.is_critical()
  }
  /// Public chunks are defined by the PNG spec or registered with it.
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0[1] & 32) == 0
  }
  /// The third byte's bit is reserved, and must currently be clear.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_clear(self) -> bool {
    (self.0[2] & 32) == 0
  }
  /// Safe-to-copy chunks may be kept by an editor that doesn't know them.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 32) != 0
  }
}
impl From<[u8; 4]> for ChunkType {
  #[inline]
  fn from(bytes: [u8; 4]) -> Self {
    Self(bytes)
  }
}
impl core::fmt::Display for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.as_bytes().iter().copied().map(char::from) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
impl Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('"')
  }
}

/// An unparsed chunk read from a PNG stream.
///
/// The payload is owned. A chunk with a declared length of 0 never holds an
/// allocation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RawPngChunk {
  pub(crate) length: u32,
  pub(crate) chunk_ty: ChunkType,
  pub(crate) data: Vec<u8>,
  pub(crate) declared_crc: u32,
}
impl RawPngChunk {
  /// Builds a chunk by hand.
  ///
  /// Returns `None` if the data is too long for a chunk's `u32` length field.
  #[inline]
  pub fn new(chunk_ty: ChunkType, data: Vec<u8>, declared_crc: u32) -> Option<Self> {
    let length = u32::try_from(data.len()).ok()?;
    Some(Self { length, chunk_ty, data, declared_crc })
  }
  /// The declared payload length.
  #[inline]
  #[must_use]
  pub const fn length(&self) -> u32 {
    self.length
  }
  #[inline]
  #[must_use]
  pub const fn chunk_ty(&self) -> ChunkType {
    self.chunk_ty
  }
  /// The payload, or `None` when the declared length is 0.
  #[inline]
  #[must_use]
  pub fn payload(&self) -> Option<&[u8]> {
    if self.length == 0 {
      None
    } else {
      Some(&self.data)
    }
  }
  /// The payload as a (possibly empty) slice.
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }
  /// The CRC stored in the file. This is never checked against the data.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  #[inline]
  #[must_use]
  pub const fn is_critical(&self) -> bool {
    self.chunk_ty.is_critical()
  }

  /// Gets the payload, as long as this chunk is of the expected type.
  #[inline]
  pub fn data_of_type(&self, expected: ChunkType) -> PngResult<&[u8]> {
    if self.chunk_ty == expected {
      Ok(&self.data)
    } else {
      Err(DecodeError::WrongChunkType { expected, found: self.chunk_ty })
    }
  }
  #[inline]
  pub(crate) fn malformed(&self, reason: &'static str) -> DecodeError {
    DecodeError::Malformed { chunk_ty: self.chunk_ty, reason }
  }
  #[inline]
  pub(crate) fn unsupported(&self, color_type: ColorType) -> DecodeError {
    DecodeError::UnsupportedColorType { chunk_ty: self.chunk_ty, color_type }
  }
}
impl Debug for RawPngChunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawPngChunk")
      .field("chunk_ty", &self.chunk_ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.length))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
