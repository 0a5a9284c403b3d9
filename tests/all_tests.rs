#![allow(bad_style)]

mod png;

fn rand_bytes(count: usize) -> Vec<u8> {
  let mut buffer = vec![0; count];
  getrandom::getrandom(&mut buffer).unwrap();
  buffer
}

/// Frames a chunk the way it appears in a file. The CRC is never checked, so
/// any value works.
fn chunk_bytes(ty: &[u8; 4], data: &[u8]) -> Vec<u8> {
  let mut out = Vec::new();
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(ty);
  out.extend_from_slice(data);
  out.extend_from_slice(&0xDEAD_BEEF_u32.to_be_bytes());
  out
}
