//! Payload codec configuration.

use serde::Deserialize;

/// What to do with wire keys a model does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFields {
    /// Keep them in the model's additional fields.
    #[default]
    Preserve,
    /// Drop them after decoding.
    Discard,
    /// Fail decoding.
    Reject,
}

/// Codec settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodecConfig {
    /// Handling of undeclared wire keys (default: preserve).
    #[serde(default)]
    pub unknown_fields: UnknownFields,
    /// Pretty-print encoded JSON.
    #[serde(default)]
    pub pretty: bool,
}
