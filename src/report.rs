//! Human-readable listings of a PNG's chunks.
//!
//! How much gets printed is controlled by a [`ReportConfig`] value that the
//! caller builds and passes in.

use std::io::{self, Read, Write};

use crate::png::*;
use crate::ReadError;

/// How deep to go into each file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanMode {
  /// Only the one line summary from the header.
  #[default]
  Summary,
  /// Also list every chunk's type and length.
  Scan,
  /// Also decode the fields of every chunk type that has a decoder.
  Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportConfig {
  pub mode: ScanMode,
  /// In deep mode, inflate compressed text and report profile sizes.
  pub decompress_text: bool,
  /// Most palette / histogram / suggested palette entries listed per chunk.
  pub max_entries: usize,
}
impl Default for ReportConfig {
  #[inline]
  fn default() -> Self {
    Self { mode: ScanMode::Summary, decompress_text: false, max_entries: 16 }
  }
}

/// What happened while writing a report.
#[derive(Debug, Default)]
pub struct ReportOutcome {
  /// Chunks read after the header.
  pub chunks: usize,
  /// Chunks that failed to decode in deep mode.
  pub decode_failures: usize,
  /// The error that stopped the chunk stream, if any.
  pub stream_error: Option<ReadError>,
}

/// Writes the report for one opened PNG.
///
/// Only I/O errors on `out` are returned as errors. Problems with the PNG data
/// are written into the report and counted in the [`ReportOutcome`].
pub fn write_report<W: Write, R: Read>(
  out: &mut W, reader: &mut PngReader<R>, config: &ReportConfig,
) -> io::Result<ReportOutcome> {
  let mut outcome = ReportOutcome::default();
  write_summary_line(out, reader)?;
  if config.mode == ScanMode::Summary {
    return Ok(outcome);
  }

  let color_type = reader.color_type();
  write_chunk_line(out, 0, reader.header())?;
  if config.mode == ScanMode::Deep {
    if let Err(e) = write_fields(out, reader.header(), color_type, config)? {
      writeln!(out, "      ! {e}")?;
      outcome.decode_failures += 1;
    }
  }
  for (n, chunk) in (1..).zip(reader.chunks()) {
    let chunk = match chunk {
      Ok(chunk) => chunk,
      Err(e) => {
        writeln!(out, "  error: {e}")?;
        outcome.stream_error = Some(e);
        break;
      }
    };
    outcome.chunks += 1;
    write_chunk_line(out, n, &chunk)?;
    if config.mode == ScanMode::Deep {
      if let Err(e) = write_fields(out, &chunk, color_type, config)? {
        writeln!(out, "      ! {e}")?;
        outcome.decode_failures += 1;
      }
    }
  }
  Ok(outcome)
}

fn write_summary_line<W: Write, R>(out: &mut W, reader: &PngReader<R>) -> io::Result<()> {
  let name = reader.name().unwrap_or("<stdin>");
  match (reader.width(), reader.height()) {
    (Some(w), Some(h)) => writeln!(out, "{name:<25} | {w} x {h} pixels"),
    _ => writeln!(out, "{name:<25} | unknown size"),
  }
}

fn write_chunk_line<W: Write>(out: &mut W, n: usize, chunk: &RawPngChunk) -> io::Result<()> {
  let kind = if chunk.is_critical() { "critical" } else { "ancillary" };
  writeln!(out, "  {n:>4}: {} {:>10} bytes ({kind})", chunk.chunk_ty(), chunk.length())
}

/// Either the report can't be written, or the chunk can't be decoded.
enum FieldError {
  Io(io::Error),
  Decode(crate::DecodeError),
}
impl From<io::Error> for FieldError {
  fn from(e: io::Error) -> Self {
    Self::Io(e)
  }
}
impl From<crate::DecodeError> for FieldError {
  fn from(e: crate::DecodeError) -> Self {
    Self::Decode(e)
  }
}

fn write_fields<W: Write>(
  out: &mut W, chunk: &RawPngChunk, color_type: Option<ColorType>, config: &ReportConfig,
) -> io::Result<Result<(), crate::DecodeError>> {
  match write_fields_inner(out, chunk, color_type, config) {
    Ok(()) => Ok(Ok(())),
    Err(FieldError::Decode(e)) => Ok(Err(e)),
    Err(FieldError::Io(e)) => Err(e),
  }
}

fn write_fields_inner<W: Write>(
  out: &mut W, chunk: &RawPngChunk, color_type: Option<ColorType>, config: &ReportConfig,
) -> Result<(), FieldError> {
  const PAD: &str = "        ";
  let max = config.max_entries;
  let decoded = PngChunk::decode(chunk, color_type)?;
  match decoded {
    PngChunk::IHDR(ihdr) => {
      writeln!(out, "{PAD}size: {} x {}", ihdr.width, ihdr.height)?;
      writeln!(out, "{PAD}bit depth: {}", ihdr.bit_depth)?;
      writeln!(out, "{PAD}color type: {}", ihdr.color_type)?;
      if ihdr.color_type.has_alpha() {
        writeln!(out, "{PAD}alpha channel: yes")?;
      }
      writeln!(out, "{PAD}compression method: {}", ihdr.compression_method)?;
      writeln!(out, "{PAD}filter method: {}", ihdr.filter_method)?;
      writeln!(out, "{PAD}interlace method: {}", ihdr.interlace_method)?;
    }
    PngChunk::PLTE(plte) => {
      writeln!(out, "{PAD}entries: {}", plte.len())?;
      for (i, [r, g, b]) in plte.entries().iter().take(max).enumerate() {
        writeln!(out, "{PAD}  {i:>3}: #{r:02x}{g:02x}{b:02x}")?;
      }
      write_elided(out, plte.len(), max)?;
    }
    PngChunk::IDAT(idat) => writeln!(out, "{PAD}compressed bytes: {}", idat.len())?,
    PngChunk::IEND => (),
    PngChunk::tRNS(trns) => match trns {
      tRNS::Y { y } => writeln!(out, "{PAD}transparent gray: {y}")?,
      tRNS::RGB { r, g, b } => writeln!(out, "{PAD}transparent color: {r}, {g}, {b}")?,
      tRNS::Index { alphas } => {
        writeln!(out, "{PAD}palette alphas: {}", alphas.len())?;
        for (i, a) in alphas.iter().take(max).enumerate() {
          writeln!(out, "{PAD}  {i:>3}: {a}")?;
        }
        write_elided(out, alphas.len(), max)?;
      }
    },
    PngChunk::cHRM(chrm) => {
      let points = [
        ("white", chrm.white()),
        ("red", chrm.red()),
        ("green", chrm.green()),
        ("blue", chrm.blue()),
      ];
      for (label, [x, y]) in points {
        writeln!(out, "{PAD}{label}: x = {x:.5}, y = {y:.5}")?;
      }
    }
    PngChunk::gAMA(gama) => {
      writeln!(out, "{PAD}gamma: {:.5} (raw {})", gama.gamma_f32(), gama.gamma)?
    }
    PngChunk::iCCP(iccp) => {
      writeln!(out, "{PAD}profile name: {}", iccp.name_string())?;
      writeln!(out, "{PAD}compression method: {}", iccp.compression_method)?;
      writeln!(out, "{PAD}compressed bytes: {}", iccp.compressed_profile.len())?;
    }
    PngChunk::sBIT(sbit) => {
      let bits: Vec<String> = sbit.iter().map(|b| b.to_string()).collect();
      writeln!(out, "{PAD}significant bits: {}", bits.join(", "))?;
    }
    PngChunk::sRGB(srgb) => writeln!(out, "{PAD}rendering intent: {:?}", srgb.intent)?,
    PngChunk::tEXt(text) => {
      writeln!(out, "{PAD}{}: {}", text.keyword_string(), text.text_string())?
    }
    PngChunk::zTXt(ztxt) => {
      writeln!(out, "{PAD}keyword: {}", ztxt.keyword_string())?;
      writeln!(out, "{PAD}compression method: {}", ztxt.compression_method)?;
      writeln!(out, "{PAD}compressed bytes: {}", ztxt.compressed.len())?;
    }
    PngChunk::iTXt(itxt) => {
      writeln!(out, "{PAD}keyword: {}", itxt.keyword_string())?;
      writeln!(out, "{PAD}language: {}", itxt.language_tag_str().unwrap_or("?"))?;
      writeln!(out, "{PAD}translated keyword: {}", itxt.translated_keyword_str().unwrap_or("?"))?;
      match itxt.text_str() {
        Some(text) => writeln!(out, "{PAD}text: {text}")?,
        None => writeln!(
          out,
          "{PAD}text: {} bytes (compressed: {})",
          itxt.text.len(),
          itxt.text_is_compressed
        )?,
      }
    }
    PngChunk::bKGD(bkgd) => match bkgd {
      bKGD::Y { y } => writeln!(out, "{PAD}background gray: {y}")?,
      bKGD::RGB { r, g, b } => writeln!(out, "{PAD}background color: {r}, {g}, {b}")?,
      bKGD::Index { i } => writeln!(out, "{PAD}background palette index: {i}")?,
    },
    PngChunk::hIST(hist) => {
      writeln!(out, "{PAD}entries: {}", hist.len())?;
      for (i, f) in hist.iter().take(max).enumerate() {
        writeln!(out, "{PAD}  {i:>3}: {f}")?;
      }
      write_elided(out, hist.len(), max)?;
    }
    PngChunk::pHYs(phys) => {
      let unit = match phys.unit {
        PhysUnit::Unknown => "unknown unit".to_string(),
        PhysUnit::Meter => "meter".to_string(),
        PhysUnit::Other(u) => format!("unit {u}"),
      };
      writeln!(out, "{PAD}pixels per unit: {} x {} ({unit})", phys.ppu_x, phys.ppu_y)?;
      if let Some([x, y]) = phys.dpi() {
        writeln!(out, "{PAD}dpi: {x:.1} x {y:.1}")?;
      }
    }
    PngChunk::sPLT(splt) => {
      writeln!(out, "{PAD}palette name: {}", splt.palette_name_string())?;
      writeln!(out, "{PAD}sample depth: {}", splt.sample_depth())?;
      writeln!(out, "{PAD}entries: {}", splt.entries.len())?;
      for (i, e) in splt.entries.iter().take(max).enumerate() {
        writeln!(
          out,
          "{PAD}  {i:>3}: {}, {}, {}, {} (frequency {})",
          e.r, e.g, e.b, e.a, e.frequency
        )?;
      }
      write_elided(out, splt.entries.len(), max)?;
    }
    PngChunk::tIME(time) => writeln!(out, "{PAD}modified: {time}")?,
    PngChunk::Unrecognized(_) => (),
  }
  if config.decompress_text {
    write_inflated(out, decoded)?;
  }
  Ok(())
}

#[cfg(feature = "miniz_oxide")]
fn write_inflated<W: Write>(out: &mut W, decoded: PngChunk<'_>) -> Result<(), FieldError> {
  const PAD: &str = "        ";
  match decoded {
    PngChunk::iCCP(iccp) => {
      let profile = iccp.decompress_profile(DEFAULT_INFLATE_LIMIT)?;
      writeln!(out, "{PAD}profile bytes: {}", profile.len())?;
    }
    PngChunk::zTXt(ztxt) => {
      writeln!(out, "{PAD}text: {}", ztxt.decompress(DEFAULT_INFLATE_LIMIT)?)?
    }
    PngChunk::iTXt(itxt) if itxt.text_is_compressed => {
      writeln!(out, "{PAD}inflated text: {}", itxt.decompress_text(DEFAULT_INFLATE_LIMIT)?)?
    }
    _ => (),
  }
  Ok(())
}

#[cfg(not(feature = "miniz_oxide"))]
fn write_inflated<W: Write>(_out: &mut W, _decoded: PngChunk<'_>) -> Result<(), FieldError> {
  log::debug!("built without miniz_oxide, compressed payloads are left as-is");
  Ok(())
}

fn write_elided<W: Write>(out: &mut W, total: usize, shown: usize) -> io::Result<()> {
  if total > shown {
    writeln!(out, "          ... {} more", total - shown)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn chunk_bytes(ty: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();
    v.extend_from_slice(&(data.len() as u32).to_be_bytes());
    v.extend_from_slice(ty);
    v.extend_from_slice(data);
    v.extend_from_slice(&[0; 4]);
    v
  }

  fn sample_png() -> Vec<u8> {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend(chunk_bytes(b"IHDR", &[0, 0, 0, 2, 0, 0, 0, 3, 8, 3, 0, 0, 0]));
    png.extend(chunk_bytes(b"PLTE", &[255, 0, 0, 0, 255, 0]));
    png.extend(chunk_bytes(b"tEXt", b"Title\0Hello"));
    png.extend(chunk_bytes(b"tIME", &[0x07, 0xC9, 3, 15, 12, 30, 0]));
    png.extend(chunk_bytes(b"IEND", &[]));
    png
  }

  #[test]
  fn test_summary_mode_reads_no_chunks() {
    let bytes = sample_png();
    let mut reader = PngReader::from_reader(Some("a.png".into()), bytes.as_slice()).unwrap();
    let mut out = Vec::new();
    let outcome = write_report(&mut out, &mut reader, &ReportConfig::default()).unwrap();
    assert_eq!(outcome.chunks, 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("2 x 3 pixels"), "{text}");
    assert!(!reader.is_finished());
  }

  #[test]
  fn test_deep_mode_lists_fields() {
    let bytes = sample_png();
    let mut reader = PngReader::from_reader(None, bytes.as_slice()).unwrap();
    let mut out = Vec::new();
    let config = ReportConfig { mode: ScanMode::Deep, ..ReportConfig::default() };
    let outcome = write_report(&mut out, &mut reader, &config).unwrap();
    assert_eq!(outcome.chunks, 4);
    assert_eq!(outcome.decode_failures, 0);
    assert!(outcome.stream_error.is_none());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("<stdin>"), "{text}");
    assert!(text.contains("color type: 3 (indexed)"), "{text}");
    assert!(!text.contains("alpha channel"), "{text}");
    assert!(text.contains("#ff0000"), "{text}");
    assert!(text.contains("Title: Hello"), "{text}");
    assert!(text.contains("1993-03-15T12:30:00+00:00"), "{text}");
  }

  #[test]
  fn test_truncated_stream_is_reported() {
    let mut bytes = sample_png();
    bytes.truncate(bytes.len() - 2);
    let mut reader = PngReader::from_reader(None, bytes.as_slice()).unwrap();
    let mut out = Vec::new();
    let config = ReportConfig { mode: ScanMode::Scan, ..ReportConfig::default() };
    let outcome = write_report(&mut out, &mut reader, &config).unwrap();
    assert_eq!(outcome.chunks, 3);
    assert!(matches!(outcome.stream_error, Some(ReadError::Truncated { .. })));
    assert!(String::from_utf8(out).unwrap().contains("error:"));
  }

  #[cfg(feature = "miniz_oxide")]
  #[test]
  fn test_deep_mode_inflates_text_on_request() {
    let mut ztxt = b"Comment\0\0".to_vec();
    ztxt.extend(miniz_oxide::deflate::compress_to_vec_zlib(b"squished", 6));
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend(chunk_bytes(b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0]));
    png.extend(chunk_bytes(b"zTXt", &ztxt));
    let config =
      ReportConfig { mode: ScanMode::Deep, decompress_text: true, ..ReportConfig::default() };
    let mut reader = PngReader::from_reader(None, png.as_slice()).unwrap();
    let mut out = Vec::new();
    let outcome = write_report(&mut out, &mut reader, &config).unwrap();
    assert_eq!(outcome.decode_failures, 0);
    assert!(String::from_utf8(out).unwrap().contains("text: squished"));
  }

  #[test]
  fn test_deep_mode_notes_alpha_channel() {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend(chunk_bytes(b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0]));
    let mut reader = PngReader::from_reader(None, png.as_slice()).unwrap();
    let mut out = Vec::new();
    let config = ReportConfig { mode: ScanMode::Deep, ..ReportConfig::default() };
    write_report(&mut out, &mut reader, &config).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("alpha channel: yes"));
  }

  #[test]
  fn test_decode_failures_are_counted() {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend(chunk_bytes(b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 3, 0, 0, 0]));
    png.extend(chunk_bytes(b"PLTE", &[1, 2, 3, 4]));
    let mut reader = PngReader::from_reader(None, png.as_slice()).unwrap();
    let mut out = Vec::new();
    let config = ReportConfig { mode: ScanMode::Deep, ..ReportConfig::default() };
    let outcome = write_report(&mut out, &mut reader, &config).unwrap();
    assert_eq!(outcome.decode_failures, 1);
    assert!(String::from_utf8(out).unwrap().contains("malformed 'PLTE' chunk"));
  }
}
