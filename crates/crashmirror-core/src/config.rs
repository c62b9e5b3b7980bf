//! Configuration types for crashmirror.
//!
//! [`Config::load`] reads `~/.config/crashmirror/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] layers an
//! explicit file instead. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::Severity;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[console]
methods = ["error", "log", "warn", "info"]

[sink]
kind       = "file"
path       = ""
timestamps = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/crashmirror/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub sink: SinkConfig,
}

/// `[console]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Console methods the process console exposes. Methods left out here are
    /// not mirrored.
    #[serde(default = "default_methods")]
    pub methods: Vec<Severity>,
}

fn default_methods() -> Vec<Severity> { Severity::ALL.to_vec() }

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { methods: default_methods() }
    }
}

/// Which crash sink receives tagged lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Append to a log file.
    File,
    /// Write to standard error.
    Stderr,
    /// Emit `tracing` events.
    Tracing,
}

/// `[sink]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SinkConfig {
    #[serde(default = "default_sink_kind")]
    pub kind: SinkKind,
    /// Empty means the default state location, see [`SinkConfig::resolved_path`].
    #[serde(default)]
    pub path: String,
    #[serde(default = "default_timestamps")]
    pub timestamps: bool,
}

fn default_sink_kind() -> SinkKind { SinkKind::File }
fn default_timestamps() -> bool { true }

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: default_sink_kind(),
            path: String::new(),
            timestamps: default_timestamps(),
        }
    }
}

impl SinkConfig {
    /// The file a `file` sink appends to.
    pub fn resolved_path(&self) -> PathBuf {
        if self.path.trim().is_empty() {
            default_sink_path()
        } else {
            PathBuf::from(&self.path)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/crashmirror/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file on top of the built-in defaults. The file
    /// must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
        .join("crashmirror")
        .join("config.toml")
}

fn default_sink_path() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local").join("state"))
        .join("crashmirror")
        .join("crash.log")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
