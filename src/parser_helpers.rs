#![forbid(unsafe_code)]

//! Just has shorthands for the byte slicing that chunk decoding needs.

/// Reads a big-endian `u32` at `offset`, if the slice is long enough.
#[inline]
#[must_use]
pub fn u32_be_at(bytes: &[u8], offset: usize) -> Option<u32> {
  let end = offset.checked_add(4)?;
  bytes.get(offset..end)?.try_into().ok().map(u32::from_be_bytes)
}

pub fn try_split_off_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    let a: [u8; N] = head.try_into().ok()?;
    Some((a, tail))
  } else {
    None
  }
}

/// Splits off a null-terminated string.
///
/// Gives the bytes before the first null, and the bytes after it. The null
/// itself is in neither slice. `None` if there's no null at all.
#[inline]
pub fn split_nul_terminated(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
  let nul = bytes.iter().position(|&b| b == 0)?;
  Some((&bytes[..nul], &bytes[nul + 1..]))
}

/// PNG text (other than `iTXt`) is Latin-1, which maps byte-for-byte onto the
/// first 256 unicode code points.
#[must_use]
pub fn latin1_to_string(bytes: &[u8]) -> String {
  bytes.iter().map(|&b| char::from(b)).collect()
}

#[test]
fn test_split_nul_terminated() {
  assert_eq!(split_nul_terminated(b"Title\0Hello"), Some((&b"Title"[..], &b"Hello"[..])));
  assert_eq!(split_nul_terminated(b"\0"), Some((&b""[..], &b""[..])));
  assert_eq!(split_nul_terminated(b"no terminator"), None);
}

#[test]
fn test_be_at_bounds() {
  assert_eq!(u32_be_at(&[0, 0, 1, 0], 0), Some(256));
  assert_eq!(u32_be_at(&[0, 0, 1, 0], 1), None);
  assert_eq!(u32_be_at(&[1, 2, 3, 4, 5], usize::MAX), None);
  assert_eq!(try_split_off_byte_array::<2>(&[1, 2, 3]), Some(([1, 2], &[3][..])));
}
