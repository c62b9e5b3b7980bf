//! crashmirror-core — shared pieces of the crashmirror pipeline.
//!
//! This crate owns the severity tags, the value normalizer and the
//! configuration types. It has no I/O beyond loading configuration.
//!
//! # Pipeline
//!
//! ```text
//! caller ──► normalize ──► tagged_line ──► crash sink
//!                 │
//!                 └──────────────────────► original console
//! ```

pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;

pub use error::NormalizeError;
pub use normalizer::{normalize, normalize_serialize, parse_value, tagged_line};
pub use types::{Severity, UnknownSeverity};
