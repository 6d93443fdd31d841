//! Lenient deserializers for ids posted by browser clients.
//!
//! Select boxes and object keys arrive as strings (`"3"`), API clients send
//! numbers (`3`). Both are accepted.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_i32<E: serde::de::Error>(value: Value) -> Result<Option<i32>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            let v = n
                .as_i64()
                .ok_or_else(|| E::custom("expected an integer"))?;
            i32::try_from(v)
                .map(Some)
                .map_err(|_| E::custom("integer out of range"))
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| E::custom("string must be a valid integer"))
        }
        _ => Err(E::custom("expected an integer or numeric string")),
    }
}

/// `Option<i32>` from a number, a numeric string, `null` or an empty string.
pub fn optional_i32_flexible<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => value_to_i32(value),
    }
}

/// `Vec<i32>` whose elements may be numbers or numeric strings. `null` is an empty list.
pub fn i32_list_flexible<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|v| {
            value_to_i32::<D::Error>(v)?
                .ok_or_else(|| <D::Error as serde::de::Error>::custom("null id in list"))
        })
        .collect()
}
