use std::io;

use crate::png::{ChunkType, ColorType, FramingStage};

/// Result of decoding the fields of a single chunk.
pub type PngResult<T> = Result<T, DecodeError>;

/// Why a PNG source couldn't be opened.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
  /// The source couldn't be opened, or reading the signature failed with an
  /// I/O error.
  #[error("source unavailable: {0}")]
  SourceUnavailable(#[source] io::Error),

  /// The first 8 bytes are missing or aren't the PNG signature.
  ///
  /// This is a classification of the content, not an I/O failure.
  #[error("not a PNG file")]
  NotAPngFile,

  /// The signature was fine but the chunk after it couldn't be read.
  #[error("corrupt header chunk: {0}")]
  CorruptHeader(#[source] ReadError),

  /// The stream ended cleanly right after the signature.
  #[error("no header chunk after the PNG signature")]
  MissingHeader,
}

/// A chunk could not be framed. Always terminal for the stream.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
  /// A chunk started but the source ran out of bytes before it was complete.
  #[error(
    "unexpected end of stream in chunk {stage}{}: read {got} of {expected} bytes",
    in_chunk(.chunk_ty)
  )]
  Truncated { stage: FramingStage, chunk_ty: Option<ChunkType>, expected: usize, got: usize },

  /// The source reported an error other than running out of bytes.
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}

fn in_chunk(chunk_ty: &Option<ChunkType>) -> String {
  match chunk_ty {
    Some(ty) => format!(" of '{ty}'"),
    None => String::new(),
  }
}

/// A chunk's payload couldn't be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
  /// The decoder was given a chunk of some other type.
  #[error("expected a '{expected}' chunk, found '{found}'")]
  WrongChunkType { expected: ChunkType, found: ChunkType },

  /// The chunk's layout depends on the color type, and this color type has no
  /// defined layout for the chunk.
  #[error("'{chunk_ty}' has no layout for color type {color_type}")]
  UnsupportedColorType { chunk_ty: ChunkType, color_type: ColorType },

  /// The chunk's layout depends on the color type, but the header chunk didn't
  /// have one.
  #[error("'{chunk_ty}' needs the color type, but the header doesn't have one")]
  HeaderUnavailable { chunk_ty: ChunkType },

  /// The chunk is the right type but its data is not laid out correctly.
  #[error("malformed '{chunk_ty}' chunk: {reason}")]
  Malformed { chunk_ty: ChunkType, reason: &'static str },

  /// Inflating a compressed payload failed.
  #[cfg(feature = "miniz_oxide")]
  #[error("could not inflate '{chunk_ty}' data: {status}")]
  Decompress { chunk_ty: ChunkType, status: String },
}
