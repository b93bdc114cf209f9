//! Common test utilities for building form definitions and driving runs.
use std::cell::RefCell;
use std::rc::Rc;
use tsugi::prelude::*;

/// Everything the test sink saw: every attempted payload, the accepted
/// ones, and a one-shot rejection switch.
#[derive(Default)]
#[allow(dead_code)]
pub struct SinkLog {
    pub attempts: Vec<AnswerMap>,
    pub accepted: Vec<AnswerMap>,
    pub reject_next: bool,
}

/// A submission sink that records payloads and can reject on demand.
#[allow(dead_code)]
pub struct RecordingSink {
    pub log: Rc<RefCell<SinkLog>>,
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, answers: &AnswerMap) -> std::result::Result<(), SubmissionError> {
        let mut log = self.log.borrow_mut();
        log.attempts.push(answers.clone());
        if log.reject_next {
            log.reject_next = false;
            return Err(SubmissionError::Rejected("backend unavailable".to_string()));
        }
        log.accepted.push(answers.clone());
        Ok(())
    }
}

/// Compiles a definition and wires a runner to a recording sink.
#[allow(dead_code)]
pub fn recording_runner(definition: FormDefinition) -> (Runner, Rc<RefCell<SinkLog>>) {
    let plan = FormPlan::compile(definition).expect("fixture definition compiles");
    let log = Rc::new(RefCell::new(SinkLog::default()));
    let runner = Runner::new(plan, Box::new(RecordingSink { log: Rc::clone(&log) }));
    (runner, log)
}

#[allow(dead_code)]
pub fn field(id: &str, field_type: FieldType) -> FieldDefinition {
    FieldDefinition {
        id: id.to_string(),
        field_type,
        label: format!("Label for {}", id),
        help_text: None,
        required: false,
        options: vec![],
    }
}

#[allow(dead_code)]
pub fn required_field(id: &str, field_type: FieldType) -> FieldDefinition {
    FieldDefinition {
        required: true,
        ..field(id, field_type)
    }
}

#[allow(dead_code)]
pub fn choice_field(id: &str, field_type: FieldType, options: &[&str]) -> FieldDefinition {
    FieldDefinition {
        options: options.iter().map(|s| s.to_string()).collect(),
        ..field(id, field_type)
    }
}

#[allow(dead_code)]
pub fn rule(
    source: &str,
    operator: ConditionOperator,
    comparison: Value,
    action: RuleAction,
) -> LogicRule {
    LogicRule {
        source_field_id: source.to_string(),
        operator,
        comparison_value: comparison,
        action,
    }
}

/// Three plain text fields `a -> b -> c`, no rules.
#[allow(dead_code)]
pub fn create_linear_form() -> FormDefinition {
    FormDefinition {
        fields: vec![
            field("a", FieldType::ShortText),
            field("b", FieldType::ShortText),
            field("c", FieldType::ShortText),
        ],
        rules: vec![],
    }
}

/// The branching fixture: `a` (required text), `b` (dropdown x/y), `b2`
/// (text), `c` (statement), with `b == "x"` skipping straight to `c`.
#[allow(dead_code)]
pub fn create_branching_form() -> FormDefinition {
    FormDefinition {
        fields: vec![
            required_field("a", FieldType::ShortText),
            choice_field("b", FieldType::Dropdown, &["x", "y"]),
            field("b2", FieldType::ShortText),
            field("c", FieldType::Statement),
        ],
        rules: vec![rule(
            "b",
            ConditionOperator::Equals,
            Value::Text("x".to_string()),
            RuleAction::SkipTo {
                target: "c".to_string(),
            },
        )],
    }
}

/// The id of the field the runner is currently on; panics elsewhere.
#[allow(dead_code)]
pub fn current_field_id(runner: &Runner) -> String {
    match runner.view() {
        RunView::OnField(view) => view.field.id.clone(),
        other => panic!("expected to be on a field, found {:?}", other),
    }
}

/// Answers the current field and advances, asserting the step moved.
#[allow(dead_code)]
pub fn answer_and_advance(runner: &mut Runner, field_id: &str, value: Value) -> StepOutcome {
    assert_eq!(current_field_id(runner), field_id);
    runner.set_value(field_id, value);
    runner.advance()
}
