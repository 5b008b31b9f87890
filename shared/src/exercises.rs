//! Tolerant codec for the workout `exercises` field
//!
//! Upstream workout rows carry `exercises` in two shapes: a live JSON array,
//! or the same array pre-serialized into a JSON string. Every consumer goes
//! through this one codec instead of guarding at each call site. Output is
//! always the array form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The exercise list of a workout, normalized to array form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Exercises(pub Vec<Value>);

impl Exercises {
    /// Normalize any of the shapes the upstream emits.
    ///
    /// Accepts an array, a JSON-string-encoded array, or null/empty string.
    /// Anything else collapses to an empty list rather than failing the
    /// whole payload.
    pub fn parse(value: Value) -> Self {
        match value {
            Value::Array(items) => Self(items),
            Value::String(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Self::default();
                }
                match serde_json::from_str::<Value>(raw) {
                    Ok(Value::Array(items)) => Self(items),
                    _ => Self::default(),
                }
            }
            _ => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Value>> for Exercises {
    fn from(items: Vec<Value>) -> Self {
        Self(items)
    }
}

impl<'de> Deserialize<'de> for Exercises {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::parse(value))
    }
}
