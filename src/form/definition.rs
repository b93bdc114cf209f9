use super::field::FieldDefinition;
use crate::logic::LogicRule;
use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a form, ready for plan compilation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDefinition {
    /// The field catalog, in presentation order.
    pub fields: Vec<FieldDefinition>,
    /// Branching rules, in declaration order.
    pub rules: Vec<LogicRule>,
}
