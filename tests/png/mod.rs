use std::io::{self, Cursor, Read};

use pngscan::{
  png::{is_png_signature, ChunkType, ColorType, FramingStage, PngChunk, PngReader, PNG_SIGNATURE},
  OpenError, ReadError,
};
use walkdir::WalkDir;

use super::{chunk_bytes, rand_bytes};

const IHDR_2X3_RGBA: [u8; 13] = [0, 0, 0, 2, 0, 0, 0, 3, 8, 6, 0, 0, 0];

fn png_with(chunks: &[Vec<u8>]) -> Vec<u8> {
  let mut out = PNG_SIGNATURE.to_vec();
  out.extend(chunk_bytes(b"IHDR", &IHDR_2X3_RGBA));
  for c in chunks {
    out.extend_from_slice(c);
  }
  out
}

fn open(bytes: Vec<u8>) -> Result<PngReader<Cursor<Vec<u8>>>, OpenError> {
  PngReader::from_reader(Some("test.png".into()), Cursor::new(bytes))
}

/// Gives its bytes, then fails every read after that.
struct FailingAfter {
  bytes: Cursor<Vec<u8>>,
}
impl Read for FailingAfter {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    match self.bytes.read(buf)? {
      0 => Err(io::Error::new(io::ErrorKind::Other, "device went away")),
      n => Ok(n),
    }
  }
}

#[test]
fn test_short_or_wrong_signature_is_not_png() {
  for len in 0..8 {
    let r = open(PNG_SIGNATURE[..len].to_vec());
    assert!(matches!(r, Err(OpenError::NotAPngFile)), "len {len}");
  }
  let mut bytes = png_with(&[]);
  bytes[0] = 0x88;
  assert!(matches!(open(bytes), Err(OpenError::NotAPngFile)));
}

#[test]
fn test_open_reads_header() {
  let reader = open(png_with(&[])).unwrap();
  assert_eq!(reader.name(), Some("test.png"));
  assert_eq!(reader.header().chunk_ty(), ChunkType::IHDR);
  assert_eq!(reader.header().length(), 13);
  assert_eq!(reader.width(), Some(2));
  assert_eq!(reader.height(), Some(3));
  assert_eq!(reader.bit_depth(), Some(8));
  assert_eq!(reader.color_type(), Some(ColorType::TruecolorAlpha));
  assert_eq!(reader.compression_method(), Some(0));
  assert_eq!(reader.filter_method(), Some(0));
  assert_eq!(reader.interlace_method(), Some(0));
  assert_eq!(reader.bytes_read(), 8 + 12 + 13);
  assert_eq!(reader.close(), 33);
}

#[test]
fn test_missing_and_corrupt_header() {
  assert!(matches!(open(PNG_SIGNATURE.to_vec()), Err(OpenError::MissingHeader)));

  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend_from_slice(&[0, 0, 0, 13, b'I', b'H']);
  match open(bytes) {
    Err(OpenError::CorruptHeader(ReadError::Truncated { stage, expected, got, .. })) => {
      assert_eq!(stage, FramingStage::Type);
      assert_eq!((expected, got), (4, 2));
    }
    other => panic!("unexpected: {other:?}"),
  }
}

#[test]
fn test_non_ihdr_first_chunk_is_still_the_header() {
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend(chunk_bytes(b"tEXt", b"a\0b"));
  let reader = open(bytes).unwrap();
  assert_eq!(reader.header().chunk_ty(), ChunkType::tEXt);
  assert_eq!(reader.width(), None);
  assert!(reader.ihdr().is_err());
}

#[test]
fn test_chunks_in_file_order_then_end() {
  let bytes = png_with(&[
    chunk_bytes(b"PLTE", &[1, 2, 3, 4, 5, 6]),
    chunk_bytes(b"tEXt", b"Title\0Hello"),
    chunk_bytes(b"IDAT", &[]),
    chunk_bytes(b"IEND", &[]),
  ]);
  let total = bytes.len() as u64;
  let mut reader = open(bytes).unwrap();

  let plte = reader.next_chunk().unwrap().unwrap();
  assert_eq!(plte.chunk_ty(), ChunkType::PLTE);
  assert_eq!(plte.length(), 6);
  assert_eq!(plte.declared_crc(), 0xDEAD_BEEF);
  assert_eq!(plte.data(), &[1, 2, 3, 4, 5, 6]);

  let text = reader.next_chunk().unwrap().unwrap();
  match PngChunk::decode(&text, reader.color_type()).unwrap() {
    PngChunk::tEXt(t) => assert_eq!((t.keyword, t.text), (&b"Title"[..], &b"Hello"[..])),
    other => panic!("unexpected: {other:?}"),
  }

  let idat = reader.next_chunk().unwrap().unwrap();
  assert_eq!(idat.length(), 0);
  assert_eq!(idat.payload(), None);

  let iend = reader.next_chunk().unwrap().unwrap();
  assert_eq!(iend.chunk_ty(), ChunkType::IEND);

  for _ in 0..3 {
    assert!(reader.next_chunk().unwrap().is_none());
  }
  assert!(reader.is_finished());
  assert_eq!(reader.bytes_read(), total);
}

#[test]
fn test_synthesized_chunk_reads_back() {
  let data = rand_bytes(300);
  let mut reader = open(png_with(&[chunk_bytes(b"zzZz", &data)])).unwrap();
  let c = reader.next_chunk().unwrap().unwrap();
  assert_eq!(c.chunk_ty(), ChunkType(*b"zzZz"));
  assert_eq!(c.length() as usize, data.len());
  assert_eq!(c.data(), &data[..]);
  assert!(!c.is_critical());
}

#[test]
fn test_truncation_at_each_stage() {
  let full = chunk_bytes(b"gAMA", &[0, 0, 0xB1, 0x8F]);
  let cases = [
    (2, FramingStage::Length, None, 4, 2),
    (6, FramingStage::Type, None, 4, 2),
    (10, FramingStage::Data, Some(ChunkType::gAMA), 4, 2),
    (14, FramingStage::Crc, Some(ChunkType::gAMA), 4, 2),
  ];
  for (cut, want_stage, want_ty, want_expected, want_got) in cases {
    let mut reader = open(png_with(&[full[..cut].to_vec()])).unwrap();
    match reader.next_chunk() {
      Err(ReadError::Truncated { stage, chunk_ty, expected, got }) => {
        assert_eq!(stage, want_stage);
        assert_eq!(chunk_ty, want_ty);
        assert_eq!((expected, got), (want_expected, want_got));
      }
      other => panic!("cut {cut}: unexpected {other:?}"),
    }
    // truncation ends the stream for good
    assert!(reader.next_chunk().unwrap().is_none());
    assert!(reader.is_finished());
  }
}

#[test]
fn test_huge_declared_length_is_truncated_not_allocated() {
  let mut c = Vec::new();
  c.extend_from_slice(&u32::MAX.to_be_bytes());
  c.extend_from_slice(b"IDAT");
  c.extend_from_slice(&[7; 10]);
  let mut reader = open(png_with(&[c])).unwrap();
  match reader.next_chunk() {
    Err(ReadError::Truncated { stage: FramingStage::Data, expected, got: 10, .. }) => {
      assert_eq!(expected, u32::MAX as usize);
    }
    other => panic!("unexpected: {other:?}"),
  }
}

#[test]
fn test_io_error_is_terminal() {
  let source = FailingAfter { bytes: Cursor::new(png_with(&[chunk_bytes(b"IEND", &[])])) };
  let mut reader = PngReader::from_reader(None, source).unwrap();
  assert_eq!(reader.name(), None);
  assert!(reader.next_chunk().unwrap().is_some());
  assert!(matches!(reader.next_chunk(), Err(ReadError::Io(_))));
  assert!(reader.next_chunk().unwrap().is_none());
}

#[test]
fn test_io_error_during_signature() {
  let source = FailingAfter { bytes: Cursor::new(vec![137, 80]) };
  assert!(matches!(PngReader::from_reader(None, source), Err(OpenError::SourceUnavailable(_))));
}

#[test]
fn test_chunks_iterator_stops_after_error() {
  let mut bytes = png_with(&[chunk_bytes(b"IDAT", &[1, 2, 3])]);
  bytes.extend_from_slice(&[0, 0]);
  let mut reader = open(bytes).unwrap();
  let items: Vec<_> = reader.chunks().collect();
  assert_eq!(items.len(), 2);
  assert!(items[0].is_ok());
  assert!(items[1].is_err());
  assert!(reader.chunks().next().is_none());
}

#[test]
fn test_color_dependent_decode_uses_header_color_type() {
  let mut header = IHDR_2X3_RGBA;
  header[9] = 3;
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend(chunk_bytes(b"IHDR", &header));
  bytes.extend(chunk_bytes(b"tRNS", &[0, 128, 255]));
  let mut reader = open(bytes).unwrap();
  let trns = reader.next_chunk().unwrap().unwrap();
  match PngChunk::decode(&trns, reader.color_type()).unwrap() {
    PngChunk::tRNS(t) => assert_eq!(t.alpha_for_index(1), Some(128)),
    other => panic!("unexpected: {other:?}"),
  }
}

#[test]
fn test_is_png_signature() {
  assert!(is_png_signature(&PNG_SIGNATURE));
  // only the first 8 bytes matter
  assert!(is_png_signature(&png_with(&[])));
  assert!(!is_png_signature(&PNG_SIGNATURE[..7]));
  assert!(!is_png_signature(&[]));
  for i in 0..8 {
    let mut sig = PNG_SIGNATURE;
    sig[i] ^= 1;
    assert!(!is_png_signature(&sig), "byte {i}");
    let mut bytes = png_with(&[]);
    bytes[i] ^= 1;
    assert!(matches!(open(bytes), Err(OpenError::NotAPngFile)), "byte {i}");
  }
}

#[test]
fn test_open_file_on_disk() {
  let dir = std::env::temp_dir().join(format!("pngscan_open_{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("pic.png");
  std::fs::write(&path, png_with(&[chunk_bytes(b"IEND", &[])])).unwrap();

  let mut reader = PngReader::open(&path).unwrap();
  assert_eq!(reader.name(), Some("pic.png"));
  assert_eq!(reader.width(), Some(2));
  let iend = reader.next_chunk().unwrap().unwrap();
  assert_eq!(iend.chunk_ty(), ChunkType::IEND);
  assert!(reader.next_chunk().unwrap().is_none());
  assert_eq!(reader.close(), 8 + 25 + 12);

  std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_open_missing_file() {
  assert!(matches!(
    PngReader::open("tests/no_such_file.png"),
    Err(OpenError::SourceUnavailable(_))
  ));
}

#[test]
fn test_PngReader_no_panics() {
  // every file in the test folder, even the non-png ones, shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if !entry.file_type().is_file() {
      continue;
    }
    let path = entry.path();
    println!("{}", path.display());
    match PngReader::open(path) {
      Ok(mut reader) => {
        for _ in reader.chunks() {}
      }
      Err(e) => {
        if path.extension().is_some_and(|ext| ext == "rs") {
          assert!(matches!(e, OpenError::NotAPngFile), "{e}");
        }
      }
    }
  }
  // even totally random data should never panic the reader!
  for _ in 0..10 {
    let v = rand_bytes(1024);
    if let Ok(mut reader) = open(v) {
      for _ in reader.chunks() {}
    }
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(rand_bytes(1024));
    if let Ok(mut reader) = open(v) {
      for c in reader.chunks().flatten() {
        let _ = PngChunk::decode(&c, None);
        let _ = PngChunk::decode(&c, Some(ColorType::Indexed));
      }
    }
  }
}
