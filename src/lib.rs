// src/lib.rs
//! rot13-stream — the ROT13 substitution cipher, in memory and on the wire
//!
//! Features:
//! - Sentinel-safe scalar transform over every integer type and `char`
//! - Range, slice and string rotation with up-front bounds checks
//! - `Read` / `Write` decorators that rotate bytes as they pass
//! - TOML config for the read filter's late-error policy

pub mod config;
pub mod consts;
pub mod error;
pub mod stream;
pub mod transform;

// Re-export everything users need at the crate root
pub use config::{load as load_config, Config, StreamOptions};
pub use consts::END_OF_STREAM;
pub use error::Rot13Error;
pub use stream::{Rot13Reader, Rot13Writer};
pub use transform::{
    rot13, rot13_byte, rot13_char, rot13_into, rot13_range, rot13_range_in_place, rot13_str,
    rot13_vec, Rot13,
};
