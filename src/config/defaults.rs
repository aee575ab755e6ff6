// src/config/defaults.rs
use crate::config::app::{Config, StreamOptions};

/// Late read errors end a bulk read early instead of propagating
pub const DEFAULT_TRUNCATE_ON_ERROR: bool = true;

pub fn default_truncate_on_error() -> bool {
    DEFAULT_TRUNCATE_ON_ERROR
}

pub fn default_stream() -> StreamOptions {
    StreamOptions {
        truncate_on_error: DEFAULT_TRUNCATE_ON_ERROR,
    }
}

pub fn default_config() -> Config {
    Config {
        stream: default_stream(),
    }
}
