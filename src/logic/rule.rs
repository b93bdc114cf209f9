use crate::answer::{FieldId, Value};
use serde::{Deserialize, Serialize};

/// The condition half of a logic rule: how the source field's answer is
/// tested against the comparison value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
    IsEmpty,
    IsNotEmpty,
}

impl ConditionOperator {
    /// Tests an answer against a comparison value.
    ///
    /// `answer` is `None` when the source field was never answered, which
    /// counts as empty. Equality is strict (no cross-type coercion),
    /// `contains` is a case-insensitive substring test on the canonical
    /// string forms, and the ordered comparisons coerce both sides to
    /// numbers, failing closed when either side has no numeric form.
    pub fn test(&self, answer: Option<&Value>, comparison: &Value) -> bool {
        match self {
            ConditionOperator::Equals => answer.is_some_and(|v| v == comparison),
            ConditionOperator::NotEquals => answer.is_none_or(|v| v != comparison),
            ConditionOperator::Contains => answer.is_some_and(|v| {
                v.to_string()
                    .to_lowercase()
                    .contains(&comparison.to_string().to_lowercase())
            }),
            ConditionOperator::GreaterThan => Self::numeric_pair(answer, comparison)
                .is_some_and(|(a, b)| a > b),
            ConditionOperator::LessThan => Self::numeric_pair(answer, comparison)
                .is_some_and(|(a, b)| a < b),
            ConditionOperator::IsEmpty => answer.is_none_or(Value::is_empty),
            ConditionOperator::IsNotEmpty => !answer.is_none_or(Value::is_empty),
        }
    }

    fn numeric_pair(answer: Option<&Value>, comparison: &Value) -> Option<(f64, f64)> {
        let a = answer?.as_number()?;
        let b = comparison.as_number()?;
        Some((a, b))
    }
}

impl std::str::FromStr for ConditionOperator {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "equals" => Ok(ConditionOperator::Equals),
            "not_equals" => Ok(ConditionOperator::NotEquals),
            "contains" => Ok(ConditionOperator::Contains),
            "greater_than" => Ok(ConditionOperator::GreaterThan),
            "less_than" => Ok(ConditionOperator::LessThan),
            "is_empty" => Ok(ConditionOperator::IsEmpty),
            "is_not_empty" => Ok(ConditionOperator::IsNotEmpty),
            other => Err(format!("unknown operator '{}'", other)),
        }
    }
}

/// The effect half of a logic rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleAction {
    /// Jump forward to the named field. Backward and same-position
    /// targets are ignored at apply time.
    SkipTo { target: FieldId },
    /// Remove the named field from the visible set for the rest of the run.
    HideBlock { target: FieldId },
    /// Terminate the run and submit immediately.
    EndForm,
}

/// A conditional relationship between one source field's answer and an
/// effect on the run. Rules are evaluated only when the respondent has
/// just answered the source field; rules for fields not yet reached are
/// inert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogicRule {
    pub source_field_id: FieldId,
    pub operator: ConditionOperator,
    pub comparison_value: Value,
    pub action: RuleAction,
}
