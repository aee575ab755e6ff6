// src/consts.rs
//! Shared constants — alphabet bounds and stream sentinels

/// Code of the first uppercase letter
pub const UPPER_A: i32 = b'A' as i32;

/// Code of the last uppercase letter
pub const UPPER_Z: i32 = b'Z' as i32;

/// Code of the first lowercase letter
pub const LOWER_A: i32 = b'a' as i32;

/// Code of the last lowercase letter
pub const LOWER_Z: i32 = b'z' as i32;

/// Letters in the alphabet
pub const ALPHABET_LEN: i32 = 26;

/// Half the alphabet — the rotation distance
pub const SHIFT: i32 = ALPHABET_LEN / 2;

/// Value returned by single-unit reads once the wrapped source is exhausted
pub const END_OF_STREAM: i32 = -1;

/// Config file consulted by [`crate::config::load`] when `ROT13_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "rot13.toml";
