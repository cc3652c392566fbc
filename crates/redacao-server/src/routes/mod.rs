pub mod dashboard;
pub mod drafts;
pub mod essays;
pub mod health;
pub mod scoring;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read an optional body field, keeping it only when it is a JSON string.
///
/// A field of the wrong type is treated as absent instead of rejecting the
/// whole body.
pub(crate) fn string_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
