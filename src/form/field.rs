use crate::answer::FieldId;
use serde::{Deserialize, Serialize};

/// The closed set of field widgets the runner knows how to traverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    ShortText,
    LongText,
    Email,
    Phone,
    Number,
    Date,
    Dropdown,
    MultiSelect,
    YesNo,
    Checkbox,
    Rating,
    Statement,
}

impl FieldType {
    /// Statements are display-only and never carry an answer.
    pub fn carries_answer(&self) -> bool {
        !matches!(self, FieldType::Statement)
    }

    /// Whether the field offers a fixed option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Dropdown | FieldType::MultiSelect)
    }

    /// Multi-line text controls keep the Enter key for editing; every
    /// other widget lets Enter advance to the next field.
    pub fn is_multi_line(&self) -> bool {
        matches!(self, FieldType::LongText)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::ShortText => "short_text",
            FieldType::LongText => "long_text",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Dropdown => "dropdown",
            FieldType::MultiSelect => "multi_select",
            FieldType::YesNo => "yes_no",
            FieldType::Checkbox => "checkbox",
            FieldType::Rating => "rating",
            FieldType::Statement => "statement",
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "short_text" => Ok(FieldType::ShortText),
            "long_text" => Ok(FieldType::LongText),
            "email" => Ok(FieldType::Email),
            "phone" => Ok(FieldType::Phone),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "dropdown" => Ok(FieldType::Dropdown),
            "multi_select" => Ok(FieldType::MultiSelect),
            "yes_no" => Ok(FieldType::YesNo),
            "checkbox" => Ok(FieldType::Checkbox),
            "rating" => Ok(FieldType::Rating),
            "statement" => Ok(FieldType::Statement),
            other => Err(format!("unknown field type '{}'", other)),
        }
    }
}

/// One question/input unit of the field catalog.
///
/// Constructed once from external configuration before a run starts and
/// never mutated during the run. `options` is populated only for choice
/// fields (dropdown, multi_select).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub field_type: FieldType,
    pub label: String,
    pub help_text: Option<String>,
    pub required: bool,
    pub options: Vec<String>,
}
