//! Envelopes and lenient decoders shared by every upstream resource.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `{success, response}` reply returned by the mutating bot endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "message_text")]
    pub response: String,
}

/// Error body returned by the dashboard host when an upstream is unreachable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Render any JSON value as the text a user should see.
///
/// Strings pass through, `null` becomes empty and everything else is shown as
/// compact JSON.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decode a message field that upstreams sometimes send as a non-string.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn message_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_text(&value))
}

/// Decode an identifier that may arrive as a JSON number or string.
///
/// # Errors
///
/// Fails when the value is neither a number nor a string.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Decode a flag that may arrive as `null`; only a literal `true` is set.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)? == Value::Bool(true))
}

/// Decode a whole-hour count sent as an integer, a float or numeric text.
/// Anything else decodes as `None`.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn lenient_hours<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_hours)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().and_then(whole_hours))
        }
        _ => None,
    };
    Ok(number)
}

#[allow(clippy::cast_possible_truncation)]
fn whole_hours(hours: f64) -> Option<i64> {
    (hours.is_finite() && hours.abs() < 1e15).then(|| hours.round() as i64)
}

/// Join independently settled fetches, keeping every success in argument
/// order and collecting every failure.
///
/// One failing source never discards the others.
pub fn settle_all<T, E>(outcomes: impl IntoIterator<Item = Result<Vec<T>, E>>) -> (Vec<T>, Vec<E>) {
    let mut items = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(batch) => items.extend(batch),
            Err(e) => failures.push(e),
        }
    }
    (items, failures)
}
