// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::DEFAULT_CONFIG_PATH;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_stream")]
    pub stream: StreamOptions,
}

/// Behaviour of the stream filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StreamOptions {
    /// An I/O error raised after the first unit of a bulk read ends that
    /// read with the bytes filled so far instead of propagating.
    #[serde(default = "default_truncate_on_error")]
    pub truncate_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Default for StreamOptions {
    fn default() -> Self {
        default_stream()
    }
}

impl StreamOptions {
    /// Every read error reaches the caller
    pub fn strict() -> Self {
        StreamOptions {
            truncate_on_error: false,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn with_strict_io(mut self, strict_io: bool) -> Self {
        if strict_io {
            self.stream.truncate_on_error = false;
        }
        self
    }
}

/// Config from `config_path`, or the defaults when it is missing or invalid
fn resolve(config_path: &Path, strict_io: bool) -> Config {
    let conf = if config_path.exists() {
        match Config::load_from(config_path) {
            Ok(conf) => {
                debug!(path = %config_path.display(), "loaded rot13 config");
                conf
            }
            Err(err) => {
                warn!(path = %config_path.display(), error = %err, "unusable config, using defaults");
                default_config()
            }
        }
    } else {
        debug!(path = %config_path.display(), "no config file, using defaults");
        default_config()
    };

    conf.with_strict_io(strict_io)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing or invalid
///
/// `ROT13_CONFIG` names the file; `ROT13_STRICT_IO` (any value) disables
/// truncate-on-error.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("ROT13_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let strict_io = std::env::var_os("ROT13_STRICT_IO").is_some();
        resolve(Path::new(&config_path), strict_io)
    })
}
