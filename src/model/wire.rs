//! Collection of undeclared wire keys into [`AdditionalFields`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use super::AdditionalFields;

/// Deserializes every remaining wire key into a string map.
///
/// Used as the `deserialize_with` of the flattened `additional_fields`
/// member, so it only sees keys no declared field claimed.
pub(crate) fn collect_additional_fields<'de, D>(deserializer: D) -> Result<AdditionalFields, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| (key, value_to_string(value)))
        .collect())
}

/// Strings are kept verbatim; anything else becomes its compact JSON text.
/// Numbers keep their original digits (`10.10` stays `10.10`).
fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
