// src/transform/bulk.rs
//! Slice and string rotation
//!
//! Every output element depends only on the input element at the same index,
//! so slices are walked back to front without changing the result.

use tracing::trace;

use super::scalar::Rot13;
use crate::error::{Result, Rot13Error};

/// Validate `start..end` against both slices before anything is written.
///
/// `start == end` is an empty range, valid up to and including the length.
fn check_range(start: usize, end: usize, src_len: usize, dst_len: usize) -> Result<()> {
    if start > end {
        return Err(Rot13Error::InvertedRange { start, end });
    }
    let len = src_len.min(dst_len);
    if start > len {
        return Err(Rot13Error::IndexOutOfBounds { index: start, len });
    }
    if end > len {
        return Err(Rot13Error::IndexOutOfBounds { index: end, len });
    }
    Ok(())
}

/// Rotate `src[start..end]` into `dst[start..end]`; other `dst` elements are untouched
pub fn rot13_range<T: Rot13>(src: &[T], dst: &mut [T], start: usize, end: usize) -> Result<()> {
    check_range(start, end, src.len(), dst.len())?;
    trace!(start, end, "rot13 range");

    for (out, unit) in dst[start..end].iter_mut().zip(&src[start..end]).rev() {
        *out = unit.rot13();
    }
    Ok(())
}

/// Rotate `buf[start..end]` where it lies
pub fn rot13_range_in_place<T: Rot13>(buf: &mut [T], start: usize, end: usize) -> Result<()> {
    check_range(start, end, buf.len(), buf.len())?;
    trace!(start, end, "rot13 range in place");

    for unit in buf[start..end].iter_mut().rev() {
        *unit = unit.rot13();
    }
    Ok(())
}

/// Rotate all of `src` into the front of `dst`
pub fn rot13_into<T: Rot13>(src: &[T], dst: &mut [T]) -> Result<()> {
    rot13_range(src, dst, 0, src.len())
}

/// Rotate `src` into a freshly allocated vector
pub fn rot13_vec<T: Rot13>(src: &[T]) -> Vec<T> {
    src.iter().map(|unit| unit.rot13()).collect()
}

/// Rotate a string; the input is left as it was
pub fn rot13_str(text: &str) -> String {
    text.chars().map(Rot13::rot13).collect()
}
