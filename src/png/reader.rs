use super::*;

use std::{
  fs::File,
  io::{self, BufReader, Read, StdinLock},
  iter::FusedIterator,
  path::Path,
};

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
const PNG_SIGNATURE_U64: u64 = u64::from_be_bytes(PNG_SIGNATURE);

/// Checks if the slice starts with the PNG signature.
#[inline]
#[must_use]
pub fn is_png_signature(bytes: &[u8]) -> bool {
  match bytes.get(..8).and_then(|head| <[u8; 8]>::try_from(head).ok()) {
    Some(head) => u64::from_be_bytes(head) == PNG_SIGNATURE_U64,
    None => false,
  }
}

/// The part of a chunk that was being read when the stream ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramingStage {
  Length,
  Type,
  Data,
  Crc,
}
impl core::fmt::Display for FramingStage {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      Self::Length => "length",
      Self::Type => "type",
      Self::Data => "data",
      Self::Crc => "CRC",
    })
  }
}

/// An open PNG source, producing chunks one at a time in file order.
///
/// Opening the reader consumes the signature and the first chunk, which is
/// kept as the [`header`](Self::header) for as long as the reader lives. The
/// source is dropped exactly once, when the reader is
/// [`close`](Self::close)d or dropped.
pub struct PngReader<R> {
  name: Option<String>,
  source: R,
  header: RawPngChunk,
  bytes_read: u64,
  finished: bool,
}
impl<R> core::fmt::Debug for PngReader<R> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngReader")
      .field("name", &self.name)
      .field("header", &self.header)
      .field("bytes_read", &self.bytes_read)
      .field("finished", &self.finished)
      .finish_non_exhaustive()
  }
}

impl PngReader<BufReader<File>> {
  /// Opens a file. The reader's name is the file's base name.
  pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, OpenError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(OpenError::SourceUnavailable)?;
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
    Self::from_reader(name, BufReader::new(file))
  }
}

impl PngReader<StdinLock<'static>> {
  /// Reads from standard input. The reader has no name.
  pub fn stdin() -> Result<Self, OpenError> {
    Self::from_reader(None, io::stdin().lock())
  }
}

impl<R: Read> PngReader<R> {
  /// Checks the signature and reads the header chunk from any source.
  ///
  /// On failure the source is dropped before this returns.
  pub fn from_reader(name: Option<String>, mut source: R) -> Result<Self, OpenError> {
    let mut bytes_read = 0_u64;
    let mut signature = [0_u8; 8];
    let got = read_up_to(&mut source, &mut signature).map_err(OpenError::SourceUnavailable)?;
    bytes_read += got as u64;
    if got < signature.len() || !is_png_signature(&signature) {
      log::debug!("{}: no PNG signature ({got} bytes checked)", display_name(&name));
      return Err(OpenError::NotAPngFile);
    }
    let header = match read_raw_chunk(&mut source, &mut bytes_read) {
      Ok(Some(header)) => header,
      Ok(None) => return Err(OpenError::MissingHeader),
      Err(e) => return Err(OpenError::CorruptHeader(e)),
    };
    if header.chunk_ty != ChunkType::IHDR {
      log::warn!(
        "{}: first chunk is '{}', using it as the header anyway",
        display_name(&name),
        header.chunk_ty
      );
    }
    log::debug!("{}: opened, header is {} bytes", display_name(&name), header.length);
    Ok(Self { name, source, header, bytes_read, finished: false })
  }

  /// Reads the next chunk.
  ///
  /// * `Ok(Some(chunk))` when a full chunk was read.
  /// * `Ok(None)` when the stream ended cleanly on a chunk boundary.
  /// * `Err(_)` when a chunk was started but couldn't be completed.
  ///
  /// After the first `Ok(None)` or `Err(_)` every later call gives `Ok(None)`
  /// without touching the source again.
  pub fn next_chunk(&mut self) -> Result<Option<RawPngChunk>, ReadError> {
    if self.finished {
      return Ok(None);
    }
    match read_raw_chunk(&mut self.source, &mut self.bytes_read) {
      Ok(Some(chunk)) => {
        log::trace!("{}: {:?}", display_name(&self.name), chunk);
        Ok(Some(chunk))
      }
      Ok(None) => {
        self.finished = true;
        Ok(None)
      }
      Err(e) => {
        log::warn!("{}: {e}", display_name(&self.name));
        self.finished = true;
        Err(e)
      }
    }
  }

  /// Iterates the remaining chunks. The iterator stops after the first error.
  #[inline]
  pub fn chunks(&mut self) -> PngChunks<'_, R> {
    PngChunks { reader: self }
  }
}

impl<R> PngReader<R> {
  /// File base name, or `None` for standard input.
  #[inline]
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }
  /// The first chunk of the stream.
  #[inline]
  #[must_use]
  pub fn header(&self) -> &RawPngChunk {
    &self.header
  }
  /// Count of bytes consumed from the source so far.
  #[inline]
  #[must_use]
  pub fn bytes_read(&self) -> u64 {
    self.bytes_read
  }
  /// If the stream has ended (cleanly or not).
  #[inline]
  #[must_use]
  pub fn is_finished(&self) -> bool {
    self.finished
  }

  #[inline]
  #[must_use]
  pub fn width(&self) -> Option<u32> {
    ihdr::width(&self.header)
  }
  #[inline]
  #[must_use]
  pub fn height(&self) -> Option<u32> {
    ihdr::height(&self.header)
  }
  #[inline]
  #[must_use]
  pub fn bit_depth(&self) -> Option<u8> {
    ihdr::bit_depth(&self.header)
  }
  #[inline]
  #[must_use]
  pub fn color_type(&self) -> Option<ColorType> {
    ihdr::color_type(&self.header)
  }
  #[inline]
  #[must_use]
  pub fn compression_method(&self) -> Option<u8> {
    ihdr::compression_method(&self.header)
  }
  #[inline]
  #[must_use]
  pub fn filter_method(&self) -> Option<u8> {
    ihdr::filter_method(&self.header)
  }
  #[inline]
  #[must_use]
  pub fn interlace_method(&self) -> Option<u8> {
    ihdr::interlace_method(&self.header)
  }
  /// Decodes the whole header at once. Unlike the single field accessors this
  /// requires the header to actually be an `IHDR` chunk.
  #[inline]
  pub fn ihdr(&self) -> PngResult<IHDR> {
    IHDR::try_from(&self.header)
  }

  /// Releases the source and the header, giving the total bytes read.
  pub fn close(self) -> u64 {
    log::debug!("{}: closed after {} bytes", display_name(&self.name), self.bytes_read);
    self.bytes_read
  }
}

/// Iterator over the chunks of a [`PngReader`].
#[derive(Debug)]
pub struct PngChunks<'r, R> {
  reader: &'r mut PngReader<R>,
}
impl<R: Read> Iterator for PngChunks<'_, R> {
  type Item = Result<RawPngChunk, ReadError>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.reader.next_chunk().transpose()
  }
}
impl<R: Read> FusedIterator for PngChunks<'_, R> {}

fn display_name(name: &Option<String>) -> &str {
  name.as_deref().unwrap_or("<stdin>")
}

/// Fills as much of `buf` as the source allows, giving the count filled.
///
/// Only a count less than `buf.len()` signals the end of the source.
fn read_up_to<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
  let mut filled = 0;
  while filled < buf.len() {
    match source.read(&mut buf[filled..]) {
      Ok(0) => break,
      Ok(n) => filled += n,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
      Err(e) => return Err(e),
    }
  }
  Ok(filled)
}

fn read_raw_chunk<R: Read>(
  source: &mut R, bytes_read: &mut u64,
) -> Result<Option<RawPngChunk>, ReadError> {
  let mut length_bytes = [0_u8; 4];
  let got = read_up_to(source, &mut length_bytes)?;
  *bytes_read += got as u64;
  match got {
    0 => return Ok(None),
    4 => (),
    _ => {
      return Err(ReadError::Truncated {
        stage: FramingStage::Length,
        chunk_ty: None,
        expected: 4,
        got,
      })
    }
  }
  let length = u32::from_be_bytes(length_bytes);

  let mut ty_bytes = [0_u8; 4];
  let got = read_up_to(source, &mut ty_bytes)?;
  *bytes_read += got as u64;
  if got != 4 {
    return Err(ReadError::Truncated {
      stage: FramingStage::Type,
      chunk_ty: None,
      expected: 4,
      got,
    });
  }
  let chunk_ty = ChunkType(ty_bytes);

  // The buffer grows as bytes actually arrive, so a bogus huge length on a
  // short stream costs a short read instead of a huge allocation.
  let mut data = Vec::new();
  if length > 0 {
    let got = (&mut *source).take(u64::from(length)).read_to_end(&mut data)?;
    *bytes_read += got as u64;
    if got != length as usize {
      return Err(ReadError::Truncated {
        stage: FramingStage::Data,
        chunk_ty: Some(chunk_ty),
        expected: length as usize,
        got,
      });
    }
  }

  let mut crc_bytes = [0_u8; 4];
  let got = read_up_to(source, &mut crc_bytes)?;
  *bytes_read += got as u64;
  if got != 4 {
    return Err(ReadError::Truncated {
      stage: FramingStage::Crc,
      chunk_ty: Some(chunk_ty),
      expected: 4,
      got,
    });
  }

  Ok(Some(RawPngChunk { length, chunk_ty, data, declared_crc: u32::from_be_bytes(crc_bytes) }))
}
