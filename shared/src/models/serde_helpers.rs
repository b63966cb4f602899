//! Serde helpers for form-encoded identifiers

use serde::de::{self, Deserialize, Deserializer};

/// Deserialize an identifier that may be sent as the literal string `"null"`.
///
/// Form clients send `tableID=null` to mean "no table"; an empty or missing
/// value means the same. Anything else must parse as an integer.
pub fn nullable_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| de::Error::custom(format!("invalid identifier '{trimmed}'")))
}
