//! JSON marshalling of payload models.
//!
//! Declared fields map to their camelCase wire names and absent ones are
//! omitted. Additional fields are flattened onto the wire object; on decode
//! every undeclared key is collected back into them, so payloads survive a
//! round trip even when the remote schema grows.

mod error;

pub use error::CodecError;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{CodecConfig, Config, UnknownFields};
use crate::model::ExtensibleModel;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Encodes and decodes payload models as JSON.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Creates a codec with the given settings.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Creates a codec from the `codec` section of the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.codec_config())
    }

    /// Decodes a model from JSON text.
    pub fn decode<M>(&self, input: &str) -> Result<M>
    where
        M: ExtensibleModel + DeserializeOwned,
    {
        let model = serde_json::from_str(input)?;
        self.apply_unknown_fields_policy(model)
    }

    /// Decodes a model from an already parsed JSON value.
    ///
    /// Goes through the value's text so unknown numbers beyond 64 bits keep
    /// their exact digits.
    pub fn decode_value<M>(&self, value: Value) -> Result<M>
    where
        M: ExtensibleModel + DeserializeOwned,
    {
        self.decode(&value.to_string())
    }

    /// Encodes a model as JSON, pretty-printed if configured.
    pub fn encode<M>(&self, model: &M) -> Result<String>
    where
        M: ExtensibleModel + Serialize,
    {
        if self.config.pretty {
            return self.encode_pretty(model);
        }
        warn_shadowed(model);
        Ok(serde_json::to_string(model)?)
    }

    /// Encodes a model as pretty-printed JSON.
    pub fn encode_pretty<M>(&self, model: &M) -> Result<String>
    where
        M: ExtensibleModel + Serialize,
    {
        warn_shadowed(model);
        Ok(serde_json::to_string_pretty(model)?)
    }

    /// Encodes a model as a JSON value.
    pub fn to_value<M>(&self, model: &M) -> Result<Value>
    where
        M: ExtensibleModel + Serialize,
    {
        warn_shadowed(model);
        Ok(serde_json::to_value(model)?)
    }

    fn apply_unknown_fields_policy<M: ExtensibleModel>(&self, mut model: M) -> Result<M> {
        let unknown = model.additional_fields().len();
        debug!(
            model = M::TYPE_NAME,
            declared = model.declared_count(),
            unknown_fields = unknown,
            "Decoded payload"
        );

        if unknown == 0 {
            return Ok(model);
        }

        match self.config.unknown_fields {
            UnknownFields::Preserve => {}
            UnknownFields::Discard => {
                warn!(
                    model = M::TYPE_NAME,
                    unknown_fields = unknown,
                    "Discarding unknown fields"
                );
                model.additional_fields_mut().clear();
            }
            UnknownFields::Reject => {
                if let Some(field) = model.additional_fields().keys().next() {
                    return Err(CodecError::UnknownField {
                        model: M::TYPE_NAME,
                        field: field.clone(),
                    });
                }
            }
        }

        Ok(model)
    }
}

/// Logs additional keys left off the wire because a declared value of the
/// same name is present. Only the top level is checked.
fn warn_shadowed<M: ExtensibleModel>(model: &M) {
    for field in model.shadowed_additional_fields() {
        warn!(model = M::TYPE_NAME, field = %field, "Additional field shadowed by declared value");
    }
}
