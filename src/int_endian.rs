//! Big-endian integers that can be viewed directly inside of chunk payloads.
//!
//! PNG stores every multi-byte integer most significant byte first. These
//! types are just byte arrays, so they have an alignment of 1 and a slice of
//! payload bytes can be cast into a slice of them (with [`bytemuck`]) without
//! copying anything.

use bytemuck::{Pod, Zeroable};

macro_rules! be_int {
  ($(#[$meta:meta])* $name:ident, $int:ty, $n:literal) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
    #[repr(transparent)]
    pub struct $name([u8; $n]);
    impl $name {
      #[inline]
      #[must_use]
      pub const fn get(self) -> $int {
        <$int>::from_be_bytes(self.0)
      }
      #[inline]
      #[must_use]
      pub const fn new(value: $int) -> Self {
        Self(value.to_be_bytes())
      }
      /// Reads a value from the start of `bytes`, if there's enough bytes.
      #[inline]
      #[must_use]
      pub fn from_prefix(bytes: &[u8]) -> Option<Self> {
        match bytes.get(..$n) {
          Some(head) => head.try_into().ok().map(Self),
          None => None,
        }
      }
    }
    impl core::fmt::Debug for $name {
      #[inline]
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple(stringify!($name)).field(&self.get()).finish()
      }
    }
    impl core::fmt::Display for $name {
      #[inline]
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.get(), f)
      }
    }
    impl From<$int> for $name {
      #[inline]
      fn from(value: $int) -> Self {
        Self::new(value)
      }
    }
    impl From<$name> for $int {
      #[inline]
      fn from(value: $name) -> Self {
        value.get()
      }
    }
  };
}

be_int!(
  /// A `u16` stored as big-endian bytes.
  U16BE,
  u16,
  2
);
be_int!(
  /// A `u32` stored as big-endian bytes.
  U32BE,
  u32,
  4
);

#[test]
fn test_be_int_prefix() {
  assert_eq!(U16BE::from_prefix(&[0x07, 0xC9, 0xFF]).map(U16BE::get), Some(1993));
  assert_eq!(U32BE::from_prefix(&[0, 0, 1]), None);
  let values: &[U16BE] = bytemuck::cast_slice(&[0_u8, 1, 1, 0]);
  assert_eq!(values, &[U16BE::new(1), U16BE::new(256)]);
}
