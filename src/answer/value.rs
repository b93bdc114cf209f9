use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field id as referenced by rules and the answer map.
pub type FieldId = String;

/// The set of answers captured so far, keyed by field id.
pub type AnswerMap = AHashMap<FieldId, Value>;

/// A captured answer value.
///
/// The variants cover everything a field widget can produce: free text,
/// a number, a boolean toggle, a multi-selection, or nothing at all.
/// `Empty` represents an explicit null; a field the respondent never
/// touched is simply absent from the [`AnswerMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
    Empty,
}

impl Value {
    /// Emptiness as the branching operators and validation see it:
    /// an explicit null, an empty string, or an empty list.
    /// Note that `Number(0.0)` and `Bool(false)` are *not* empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Number(_) | Value::Bool(_) => false,
        }
    }

    /// Numeric form for ordered comparisons. Numbers pass through, text
    /// is parsed; everything else has no numeric form and makes the
    /// comparison false at the call site.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(_) | Value::List(_) | Value::Empty => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => write!(f, "{}", items.iter().join(", ")),
            Value::Empty => Ok(()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Empty,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            // Nested objects have no widget that produces them.
            serde_json::Value::Object(_) => Value::Empty,
        }
    }
}
