// src/error.rs
//! Public error type for the entire crate

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Rot13Error {
    #[error("index out of bounds: {index} (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("inverted range: start {start} is past end {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("buffer region out of bounds: offset {offset} + length {len} exceeds {capacity}")]
    RegionOutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Rot13Error {
    /// True for the range/region variants raised before any mutation
    pub fn is_bounds(&self) -> bool {
        matches!(
            self,
            Rot13Error::IndexOutOfBounds { .. }
                | Rot13Error::InvertedRange { .. }
                | Rot13Error::RegionOutOfBounds { .. }
        )
    }
}

/// Used by the `std::io` trait impls, which can only surface `io::Error`
impl From<Rot13Error> for io::Error {
    fn from(err: Rot13Error) -> Self {
        match err {
            Rot13Error::Io(inner) => inner,
            other if other.is_bounds() => io::Error::new(io::ErrorKind::InvalidInput, other),
            other => io::Error::other(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Rot13Error>;
