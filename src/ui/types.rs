use crate::answer::Value;
use crate::error::FormConversionError;
use crate::form::{FieldDefinition, FieldType, FormDefinition, IntoForm};
use crate::logic::{ConditionOperator, LogicRule, RuleAction};
use serde::Deserialize;

/// One field as exported by the form builder
#[derive(Debug, Deserialize, Clone)]
pub struct UiField {
    pub id: String,
    #[serde(alias = "fieldType")]
    pub field_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    #[serde(alias = "helpText")]
    pub help_text: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

/// One branching rule as exported by the form builder
#[derive(Debug, Deserialize, Clone)]
pub struct UiRule {
    #[serde(alias = "sourceFieldId")]
    pub source_field_id: String,
    pub operator: String,
    #[serde(default)]
    #[serde(alias = "comparisonValue")]
    pub comparison_value: serde_json::Value,
    pub action: String,
    #[serde(default)]
    #[serde(alias = "targetFieldId")]
    pub target_field_id: Option<String>,
}

/// Complete form export structure
#[derive(Debug, Deserialize)]
pub struct UiForm {
    pub fields: Vec<UiField>,
    #[serde(default)]
    #[serde(alias = "logicRules")]
    pub logic_rules: Vec<UiRule>,
}

impl IntoForm for UiForm {
    fn into_form(self) -> Result<FormDefinition, FormConversionError> {
        let fields = self
            .fields
            .into_iter()
            .map(convert_field)
            .collect::<Result<_, _>>()?;
        let rules = self
            .logic_rules
            .into_iter()
            .map(convert_rule)
            .collect::<Result<_, _>>()?;
        Ok(FormDefinition { fields, rules })
    }
}

fn convert_field(raw: UiField) -> Result<FieldDefinition, FormConversionError> {
    let field_type: FieldType = raw.field_type.parse().map_err(|e: String| {
        FormConversionError::ValidationError(format!("field '{}': {}", raw.id, e))
    })?;
    Ok(FieldDefinition {
        id: raw.id,
        field_type,
        label: raw.label,
        help_text: raw.help_text,
        required: raw.required,
        options: raw.options.unwrap_or_default(),
    })
}

fn convert_rule(raw: UiRule) -> Result<LogicRule, FormConversionError> {
    let operator: ConditionOperator = raw.operator.parse().map_err(|e: String| {
        FormConversionError::ValidationError(format!("rule on '{}': {}", raw.source_field_id, e))
    })?;
    let action = match raw.action.as_str() {
        "skip_to" => RuleAction::SkipTo {
            target: require_target(&raw)?,
        },
        "hide_block" => RuleAction::HideBlock {
            target: require_target(&raw)?,
        },
        "end_form" => RuleAction::EndForm,
        other => {
            return Err(FormConversionError::ValidationError(format!(
                "rule on '{}': unknown action '{}'",
                raw.source_field_id, other
            )));
        }
    };
    Ok(LogicRule {
        source_field_id: raw.source_field_id,
        operator,
        comparison_value: Value::from(raw.comparison_value),
        action,
    })
}

fn require_target(raw: &UiRule) -> Result<String, FormConversionError> {
    raw.target_field_id.clone().ok_or_else(|| {
        FormConversionError::ValidationError(format!(
            "rule on '{}': action '{}' requires a target field id",
            raw.source_field_id, raw.action
        ))
    })
}
