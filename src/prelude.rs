//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! tsugi crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use tsugi::prelude::*;
//! use tsugi::form::IntoForm;
//!
//! # fn run_example() -> Result<()> {
//! // Load a builder export and compile it into a runnable plan
//! let form_json = std::fs::read_to_string("path/to/form.json")?;
//! let raw: UiForm = serde_json::from_str(&form_json)?;
//! let plan = FormPlan::compile(raw.into_form()?)?;
//!
//! // Replay a scripted answer set against the plan
//! let script = SampleAnswers::from_file("path/to/answers.json")?;
//! # let _ = (plan, script);
//! # Ok(())
//! # }
//! ```

// Plan compilation and the runner
pub use crate::plan::FormPlan;
pub use crate::runner::{
    FieldView, RunPhase, RunView, Runner, StepOutcome, SubmissionSink, validate_field,
};

// Answer values and field/form definitions
pub use crate::answer::{AnswerMap, FieldId, Value};
pub use crate::form::{FieldDefinition, FieldType, FormDefinition, IntoForm};

// Branching logic
pub use crate::logic::{ConditionOperator, LogicOutcome, LogicRule, RuleAction, evaluate};

// Data structures
pub use crate::data::SampleAnswers;
pub use crate::ui::{UiField, UiForm, UiRule};

// Error types
pub use crate::error::{
    ArtifactError, DefinitionError, FormConversionError, SubmissionError, ValidationFailure,
};

// Trace formatting
pub use crate::trace::{RunTrace, TraceEvent, TraceFormatter};

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
