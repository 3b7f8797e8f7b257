//! Codec error types.

use thiserror::Error;

/// Payload encoding/decoding error.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload carried a key the model does not declare and the codec
    /// is configured to reject those.
    #[error("{model}: unknown field {field:?}")]
    UnknownField { model: &'static str, field: String },
}
