// src/transform/mod.rs
//! The ROT13 transform — no I/O, no state
//!
//! `scalar` rotates a single unit; `bulk` applies it across slices and strings.

pub mod bulk;
pub mod scalar;

pub use bulk::*;
pub use scalar::*;
