use crate::answer::FieldId;
use crate::error::DefinitionError;
use crate::form::{FieldDefinition, FormDefinition};
use crate::logic::LogicRule;
use ahash::AHashMap;
use itertools::Itertools;

/// A validated, indexed form ready to drive runs.
///
/// Compilation is the one place catalog-level contradictions are caught:
/// duplicate field ids and choice fields without options are rejected,
/// and the `required` flag on statements is normalized away. Rules are
/// kept in declaration order; rules referencing unknown targets stay in
/// the plan and degrade to no-ops when they fire.
#[derive(Debug, Clone)]
pub struct FormPlan {
    fields: Vec<FieldDefinition>,
    index_of: AHashMap<FieldId, usize>,
    rules: Vec<LogicRule>,
}

impl FormPlan {
    pub fn compile(definition: FormDefinition) -> Result<Self, DefinitionError> {
        let FormDefinition { mut fields, rules } = definition;

        if let Some(duplicate) = fields.iter().map(|f| f.id.as_str()).duplicates().next() {
            return Err(DefinitionError::DuplicateFieldId {
                field_id: duplicate.to_string(),
            });
        }

        for field in &fields {
            if field.field_type.is_choice() && field.options.is_empty() {
                return Err(DefinitionError::MissingOptions {
                    field_id: field.id.clone(),
                });
            }
        }

        // Statements never require an answer, whatever the authoring tool said.
        for field in &mut fields {
            if !field.field_type.carries_answer() {
                field.required = false;
            }
        }

        let index_of = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.id.clone(), index))
            .collect();

        Ok(Self {
            fields,
            index_of,
            rules,
        })
    }

    /// The field catalog in presentation order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// The full rule list in declaration order.
    pub fn rules(&self) -> &[LogicRule] {
        &self.rules
    }

    /// Catalog position of a field id, if the id exists at all.
    pub fn position(&self, field_id: &str) -> Option<usize> {
        self.index_of.get(field_id).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
