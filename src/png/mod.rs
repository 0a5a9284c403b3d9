#![forbid(unsafe_code)]
#![allow(non_camel_case_types)]

//! Holds all the tools for reading PNG chunk streams.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Reading Chunks
//!
//! The general format of a PNG is that the information is stored in "chunks".
//! Open a source with [`PngReader`] and it will check the signature and read
//! the header chunk for you. After that you pull chunks with
//! [`next_chunk`](PngReader::next_chunk) (or the [`chunks`](PngReader::chunks)
//! iterator) until the stream ends.
//!
//! ```no_run
//! use pngscan::png::*;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reader = PngReader::open("image.png")?;
//! println!("{:?} x {:?}", reader.width(), reader.height());
//! while let Some(chunk) = reader.next_chunk()? {
//!   println!("{}: {} bytes", chunk.chunk_ty(), chunk.length());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Decoding Chunks
//!
//! Each chunk type has a type in this module (named after the chunk type code)
//! that gives a view of the chunk's fields. Most are built with `TryFrom` on a
//! [`RawPngChunk`] reference. A few chunk types (`tRNS`, `sBIT`, `bKGD`,
//! `hIST`) are laid out differently depending on the image's color type, so
//! they have a `decode` function that takes the [`ColorType`] as well. If you
//! just want "whatever this chunk is", use [`PngChunk::decode`].
//!
//! ## Parsing Errors
//!
//! Quoting [section 13.2 of the PNG
//! spec](https://www.w3.org/TR/2003/REC-PNG-20031110/#13Decoders.Errors):
//!
//! > Errors that have little or no effect on the processing of the image may be
//! > ignored, while those that affect critical data shall be dealt with in a
//! > manner appropriate to the application.
//!
//! The reader is fairly lenient:
//!
//! * The first chunk is used as the header even if its type isn't `IHDR`. A
//!   warning is logged, and the header accessors just read whatever bytes are
//!   there.
//! * CRC values are read and kept with each chunk, but never checked.
//! * Chunk ordering and duplicate chunk rules are not checked.
//!
//! However, a chunk that can't be *framed* (the stream ends partway through
//! it) stops the reader. There's no way to find the next chunk boundary after
//! that, so the reader doesn't try.

use core::fmt::{Debug, Write};

use crate::*;

mod raw_chunk;
pub use raw_chunk::*;

mod reader;
pub use reader::*;

pub mod ihdr;
pub use ihdr::{ColorType, IHDR};

mod plte;
pub use plte::*;

mod idat;
pub use idat::*;

mod iend;
pub use iend::*;

mod trns;
pub use trns::*;

mod chrm;
pub use chrm::*;

mod gama;
pub use gama::*;

mod sbit;
pub use sbit::*;

mod srgb;
pub use srgb::*;

mod bkgd;
pub use bkgd::*;

mod hist;
pub use hist::*;

mod phys;
pub use phys::*;

mod time;
pub use time::*;

mod text;
pub use text::*;

mod ztxt;
pub use ztxt::*;

mod itxt;
pub use itxt::*;

mod iccp;
pub use iccp::*;

mod splt;
pub use splt::*;

mod png_chunk;
pub use png_chunk::*;

/// Scale of the fixed point values in `cHRM` and `gAMA`.
pub const CHRM_GAMA_SCALE: f32 = 100_000.0;

/// Upper limit on inflated output used by the `decompress` helpers.
#[cfg(feature = "miniz_oxide")]
pub const DEFAULT_INFLATE_LIMIT: usize = 8 * 1024 * 1024;

#[cfg(feature = "miniz_oxide")]
fn inflate(chunk_ty: ChunkType, method: u8, zlib_data: &[u8], limit: usize) -> PngResult<Vec<u8>> {
  if method != 0 {
    return Err(DecodeError::Malformed { chunk_ty, reason: "unknown compression method" });
  }
  miniz_oxide::inflate::decompress_to_vec_zlib_with_limit(zlib_data, limit)
    .map_err(|e| DecodeError::Decompress { chunk_ty, status: format!("{:?}", e.status) })
}
