//! # Tsugi - Adaptive Form Runner Engine
//!
//! **Tsugi** walks a respondent through an ordered set of form fields one at
//! a time, evaluates declarative branching rules after every answer, and
//! produces a final answer set. The engine is a small interpreter over a
//! flat rule list with real state-machine semantics: a current position, a
//! monotonically shrinking visibility set, forward skip targets, early
//! termination, and required-field validation.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a form definition. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your form format (e.g. a builder's JSON
//!     export) into your own Rust structs — or use the bundled [`ui::UiForm`]
//!     types for the standard export shape.
//! 2.  **Convert to Tsugi's Model**: Implement the `IntoForm` trait for your
//!     structs to provide a translation layer into Tsugi's `FormDefinition`.
//! 3.  **Compile**: Use `FormPlan::compile` to validate and index the
//!     definition. Catalog contradictions are caught here, before any
//!     respondent sees the form.
//! 4.  **Run**: Create a `Runner` with the plan and a `SubmissionSink`, and
//!     drive it with `set_value`/`advance`/`go_back`/`submit` from whatever
//!     surface you render — a web UI, a terminal, or a test harness.
//!
//! ## Quick Start
//!
//! The following example demonstrates the end-to-end process.
//!
//! ```rust,no_run
//! use tsugi::prelude::*;
//!
//! // A sink that keeps the submitted answers in memory.
//! struct MemorySink {
//!     received: Option<AnswerMap>,
//! }
//!
//! impl SubmissionSink for MemorySink {
//!     fn submit(&mut self, answers: &AnswerMap) -> std::result::Result<(), SubmissionError> {
//!         self.received = Some(answers.clone());
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let definition = FormDefinition {
//!         fields: vec![
//!             FieldDefinition {
//!                 id: "name".to_string(),
//!                 field_type: FieldType::ShortText,
//!                 label: "Your name".to_string(),
//!                 help_text: None,
//!                 required: true,
//!                 options: vec![],
//!             },
//!             FieldDefinition {
//!                 id: "satisfied".to_string(),
//!                 field_type: FieldType::YesNo,
//!                 label: "Happy with the service?".to_string(),
//!                 help_text: None,
//!                 required: false,
//!                 options: vec![],
//!             },
//!         ],
//!         rules: vec![LogicRule {
//!             source_field_id: "satisfied".to_string(),
//!             operator: ConditionOperator::Equals,
//!             comparison_value: Value::Bool(true),
//!             action: RuleAction::EndForm,
//!         }],
//!     };
//!
//!     let plan = FormPlan::compile(definition)?;
//!     let mut runner = Runner::new(plan, Box::new(MemorySink { received: None }));
//!
//!     runner.start();
//!     runner.set_value("name", Value::Text("Ada".to_string()));
//!     runner.advance();
//!     runner.set_value("satisfied", Value::Bool(true));
//!     runner.advance(); // fires the end_form rule and submits
//!
//!     assert_eq!(runner.phase(), RunPhase::Submitted);
//!     println!("Transcript:\n{}", TraceFormatter::format_trace(runner.trace()));
//!
//!     Ok(())
//! }
//! ```

pub mod answer;
pub mod data;
pub mod error;
pub mod form;
pub mod logic;
pub mod plan;
pub mod prelude;
pub mod runner;
pub mod trace;
pub mod ui;
