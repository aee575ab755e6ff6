// src/config/mod.rs
//! Configuration system for rot13-stream
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, StreamOptions};

mod app;
mod defaults;
