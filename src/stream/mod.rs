// src/stream/mod.rs
//! Stream filters — decorators over any `Read` / `Write`
//!
//! Each byte that passes through is run through the ROT13 transform. The
//! filters hold no buffer of their own; every call goes straight to the
//! wrapped stream.

pub mod reader;
pub mod writer;

pub use reader::Rot13Reader;
pub use writer::Rot13Writer;

use crate::error::{Result, Rot13Error};

/// `offset..offset + len` must fit inside a buffer of `capacity` bytes
pub(crate) fn check_region(offset: usize, len: usize, capacity: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(Rot13Error::RegionOutOfBounds {
            offset,
            len,
            capacity,
        }),
    }
}
