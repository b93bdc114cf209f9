use crate::answer::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

/// A scripted answer set, matching the expected JSON format for replaying
/// a run without a respondent.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SampleAnswers {
    pub answers: HashMap<String, serde_json::Value>,
}

impl SampleAnswers {
    /// Load sample answers from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// The scripted value for a field, converted to a runtime value.
    pub fn value_for(&self, field_id: &str) -> Option<Value> {
        self.answers.get(field_id).cloned().map(Value::from)
    }
}
