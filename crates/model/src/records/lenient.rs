//! Field deserializers that never fail on a wrong or missing value.
//!
//! The vendor payload is loosely typed: counts arrive as numbers or numeric
//! strings, lists may be `null`, nested objects may be absent. Each helper
//! decodes what it can and falls back to the field's empty value otherwise.
//! Use together with `#[serde(default)]` on the containing struct so absent
//! keys take the same fallback.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value as Json;

/// Strings pass through, numbers and booleans are stringified, anything else
/// is `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Json>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Json::String(s)) => Some(s),
        Some(Json::Number(n)) => Some(n.to_string()),
        Some(Json::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Integer count; fractional values truncate, unusable values are `0`.
pub fn count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Json>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Json::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|v| v as i64))
            .unwrap_or(0),
        Some(Json::String(s)) => parse_number(&s).map(|v| v as i64).unwrap_or(0),
        _ => 0,
    })
}

/// Floating point quantity; unusable values are `0.0`.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Json>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Json::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Json::String(s)) => parse_number(&s).unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Array of objects. A non-array decodes as empty; elements that are not
/// objects are dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Option::<Json>::deserialize(deserializer)? {
        Some(Json::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter(Json::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Nested object, or `T::default()` when absent or not an object.
pub fn nested<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Option::<Json>::deserialize(deserializer)? {
        Some(obj @ Json::Object(_)) => serde_json::from_value(obj).unwrap_or_default(),
        _ => T::default(),
    })
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
