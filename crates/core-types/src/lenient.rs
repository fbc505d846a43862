//! Forgiving decoders for hand-edited journal data.
//!
//! Numeric fields in the journal may be missing, `null`, or written as
//! strings by the importers. None of those are fatal: they decode to `0.0`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Decodes a number, a numeric string, or anything else as `0.0`.
/// Non-finite values are also collapsed to `0.0`.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    let value = match raw {
        Some(RawNumber::Number(n)) => n,
        Some(RawNumber::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(RawNumber::Other(_)) | None => 0.0,
    };
    Ok(if value.is_finite() { value } else { 0.0 })
}

/// Decodes an optional string, treating `null` and non-string values as absent.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawText {
        Text(String),
        Other(IgnoredAny),
    }

    let raw = Option::<RawText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawText::Text(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}
