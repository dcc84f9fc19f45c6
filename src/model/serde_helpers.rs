// src/model/serde_helpers.rs
//
// Tolerant field decoders for API member records. A value of the wrong JSON
// type decodes to `None` instead of failing the whole record. Each helper is
// meant for `#[serde(default, deserialize_with = "...")]`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

/// JSON number → `Some`; null, strings, NaN and anything else → `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<f64>::deserialize(deserializer)? {
        Lenient::Value(v) if !v.is_nan() => Some(v),
        _ => None,
    })
}

/// Non-negative JSON integer → `Some`; everything else → `None`.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<u32>::deserialize(deserializer)? {
        Lenient::Value(v) => Some(v),
        Lenient::Other(_) => None,
    })
}

/// String or number → trimmed text; empty strings and other types → `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<TextOrNumber>::deserialize(deserializer)? {
        Lenient::Value(TextOrNumber::Text(s)) => {
            let t = s.trim();
            (!t.is_empty()).then(|| s!(t))
        }
        Lenient::Value(TextOrNumber::Int(i)) => Some(i.to_string()),
        Lenient::Value(TextOrNumber::Float(f)) => Some(f.to_string()),
        Lenient::Other(_) => None,
    })
}

/// String → itself; null or other types → empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<String>::deserialize(deserializer)? {
        Lenient::Value(s) => s,
        Lenient::Other(_) => s!(),
    })
}

pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<bool>::deserialize(deserializer)? {
        Lenient::Value(b) => Some(b),
        Lenient::Other(_) => None,
    })
}
