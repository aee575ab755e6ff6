// src/transform/scalar.rs
//! Single-unit rotation

use crate::consts::{ALPHABET_LEN, LOWER_A, LOWER_Z, SHIFT, UPPER_A, UPPER_Z};

/// A unit the ROT13 transform can be applied to
///
/// Only the 52 ASCII letter codes are rotated; every other value, negative
/// sentinels included, comes back untouched. Applying `rot13` twice always
/// returns the original value.
pub trait Rot13: Copy {
    fn rot13(self) -> Self;
}

macro_rules! impl_rot13_for_int {
    ($($t:ty),* $(,)?) => {$(
        impl Rot13 for $t {
            #[inline]
            fn rot13(self) -> Self {
                const UA: $t = UPPER_A as $t;
                const UZ: $t = UPPER_Z as $t;
                const LA: $t = LOWER_A as $t;
                const LZ: $t = LOWER_Z as $t;
                const N: $t = ALPHABET_LEN as $t;
                const S: $t = SHIFT as $t;

                match self {
                    UA..=UZ => (self - UA + S) % N + UA,
                    LA..=LZ => (self - LA + S) % N + LA,
                    _ => self,
                }
            }
        }
    )*};
}

impl_rot13_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Rot13 for char {
    #[inline]
    fn rot13(self) -> Self {
        if self.is_ascii_alphabetic() {
            char::from((self as u8).rot13())
        } else {
            self
        }
    }
}

/// Rotate one codepoint; `END_OF_STREAM` and other out-of-range values pass through
#[inline]
pub fn rot13(value: i32) -> i32 {
    value.rot13()
}

#[inline]
pub fn rot13_char(ch: char) -> char {
    ch.rot13()
}

#[inline]
pub fn rot13_byte(byte: u8) -> u8 {
    byte.rot13()
}
