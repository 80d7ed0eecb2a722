//! Serde helpers for tolerant decoding of API payloads

use serde::{Deserialize, Deserializer};

/// Decode `null` or a missing value as an empty string.
///
/// The API serialises unset text columns as `null`; the UI treats them as "".
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode `null` as `false`.
pub fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}
