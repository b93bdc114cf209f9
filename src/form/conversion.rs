use super::definition::FormDefinition;
use crate::error::FormConversionError;

/// A trait for custom data models that can be converted into a Tsugi `FormDefinition`.
///
/// This is the primary extension point for making Tsugi format-agnostic. By
/// implementing this trait on your own configuration structs, you provide a
/// translation layer that lets the engine run forms authored in any builder
/// or storage format.
///
/// # Example
///
/// ```rust,no_run
/// use tsugi::prelude::*;
/// use tsugi::error::FormConversionError;
/// use std::result::Result;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyQuestion { key: String, prompt: String, mandatory: bool }
/// struct MySurvey { questions: Vec<MyQuestion> }
///
/// // 2. Implement `IntoForm` for your top-level struct.
/// impl IntoForm for MySurvey {
///     fn into_form(self) -> Result<FormDefinition, FormConversionError> {
///         let fields = self
///             .questions
///             .into_iter()
///             .map(|q| FieldDefinition {
///                 id: q.key,
///                 field_type: FieldType::ShortText,
///                 label: q.prompt,
///                 help_text: None,
///                 required: q.mandatory,
///                 options: vec![],
///             })
///             .collect();
///
///         Ok(FormDefinition {
///             fields,
///             rules: vec![], // Convert your branching rules here as well
///         })
///     }
/// }
/// ```
pub trait IntoForm {
    /// Consumes the object and converts it into a Tsugi-compatible form definition.
    fn into_form(self) -> Result<FormDefinition, FormConversionError>;
}
