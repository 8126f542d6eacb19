use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, anything else counts as absent.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

/// Accepts an array of strings or numbers; other entries are dropped and a
/// non-array value becomes an empty list.
pub fn deserialize_lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(values) = Value::deserialize(deserializer)? else {
        return Ok(vec![]);
    };

    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            Value::String(value) => Some(value),
            Value::Number(value) => Some(value.to_string()),
            _ => None,
        })
        .collect())
}
