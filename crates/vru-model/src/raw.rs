//! Raw numeric input text.
//!
//! Numeric inputs are stored exactly as typed so that validation and dirty
//! comparison see what the user sees. Presets may still write them as TOML
//! or JSON numbers.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Text(String),
    Integer(i64),
    Float(f64),
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawInput::deserialize(deserializer)? {
        RawInput::Text(text) => text,
        RawInput::Integer(value) => value.to_string(),
        RawInput::Float(value) => value.to_string(),
    })
}

/// Parse a finite decimal, trimming surrounding whitespace.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
