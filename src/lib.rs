#![cfg_attr(docs_rs, feature(doc_cfg))]
//#![warn(missing_docs)]

//! A crate for reading PNG chunk streams.
//!
//! A PNG file is an 8 byte signature followed by a series of "chunks". Each
//! chunk is a length, a four byte type code, that many bytes of payload, and a
//! CRC. This crate pulls chunks out of any [`Read`](std::io::Read) source one
//! at a time (see [`PngReader`](png::PngReader)) and gives typed views of the
//! fields stored in each of the standard chunk types.
//!
//! Image pixel data is *not* decoded, and chunk CRCs are never checked.

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod int_endian;
pub use int_endian::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod error;
pub use error::*;

pub mod png;

pub mod report;
