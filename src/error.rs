use thiserror::Error;

/// Errors that can occur when compiling a `FormDefinition` into a `FormPlan`.
#[derive(Error, Debug, Clone)]
pub enum DefinitionError {
    #[error("Field id '{field_id}' is defined more than once in the catalog")]
    DuplicateFieldId { field_id: String },

    #[error("Choice field '{field_id}' has no options to choose from")]
    MissingOptions { field_id: String },
}

/// Errors that can occur when converting a custom user format into a Tsugi `FormDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FormConversionError {
    #[error("Invalid form data: {0}")]
    ValidationError(String),
}

/// A per-field validation failure, surfaced inline next to the field.
///
/// Recoverable by design: it blocks only that field's advance and is
/// cleared the moment the field's value changes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// A rejected submission, reported by the external submission sink.
///
/// The run is rolled back to its pre-submit position with all answers
/// intact, so resubmitting sends the same snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("The submission endpoint rejected the answer set: {0}")]
    Rejected(String),
}

/// Errors that can occur when saving or loading a stored form definition.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("{0}")]
    Generic(String),
}
