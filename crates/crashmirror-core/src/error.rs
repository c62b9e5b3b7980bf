//! Error types for crashmirror-core.

use thiserror::Error;

/// A value could not be turned into JSON before normalization.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("value could not be rendered as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}
