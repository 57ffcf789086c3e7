//! Configuration loading for the segmenter.
//!
//! All tunables are centralized here and loaded from `conf/versicle.toml`
//! if present. Any missing or invalid entries fall back to defaults that
//! reproduce the stock segmentation behavior, so the tool still runs with
//! no config file at all.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Segmenter tunables; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SegmenterConfig {
    /// Longest line (in characters) the heading classifier will accept.
    #[serde(default = "default_heading_max_chars")]
    pub heading_max_chars: usize,
    /// Strip a trailing parenthesized version abbreviation such as `(ESV)`.
    #[serde(default = "default_strip_copyright_suffix")]
    pub strip_copyright_suffix: bool,
    /// Rewrite a bare leading verse number into bracketed marker form.
    #[serde(default = "default_promote_bare_leading_number")]
    pub promote_bare_leading_number: bool,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        SegmenterConfig {
            heading_max_chars: default_heading_max_chars(),
            strip_copyright_suffix: default_strip_copyright_suffix(),
            promote_bare_leading_number: default_promote_bare_leading_number(),
            log_level: default_log_level(),
        }
    }
}

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> SegmenterConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded config");
            data
        }
        Err(err) => {
            debug!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return SegmenterConfig::default();
        }
    };

    match toml::from_str::<SegmenterConfig>(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            SegmenterConfig::default()
        }
    }
}

fn default_heading_max_chars() -> usize {
    120
}

fn default_strip_copyright_suffix() -> bool {
    true
}

fn default_promote_bare_leading_number() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
