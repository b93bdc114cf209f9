use crate::answer::{AnswerMap, FieldId, Value};
use crate::error::{SubmissionError, ValidationFailure};
use crate::form::FieldDefinition;
use crate::logic::{self, LogicOutcome};
use crate::plan::FormPlan;
use crate::trace::{RunTrace, TraceEvent};
use ahash::{AHashMap, AHashSet};

pub mod sink;
pub mod validate;

pub use sink::SubmissionSink;
pub use validate::validate_field;

/// The lifecycle phase of a run. `OnField` carries the catalog index of
/// the field the respondent is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Intro,
    OnField(usize),
    Submitting,
    Submitted,
}

/// What a navigation operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The machine is terminal or mid-submission; the input was dropped.
    Ignored,
    /// The position changed (possibly back to the intro).
    Moved,
    /// Validation refused the step; an error is surfaced on a field.
    Blocked,
    /// The answer set was handed to the sink and accepted.
    Submitted,
    /// The sink rejected the answer set; position and answers are intact.
    SubmitFailed,
}

/// What the presentation layer renders for the current phase.
#[derive(Debug)]
pub enum RunView<'a> {
    Intro,
    OnField(FieldView<'a>),
    Submitting,
    Submitted,
}

/// Everything a host needs to render one field: its definition, the
/// value captured so far, any surfaced error, and whether a submit
/// affordance should replace the next-field one.
#[derive(Debug)]
pub struct FieldView<'a> {
    pub field: &'a FieldDefinition,
    pub value: Option<&'a Value>,
    pub error: Option<ValidationFailure>,
    pub is_last_visible: bool,
}

impl FieldView<'_> {
    /// The Enter key advances everywhere except inside multi-line text
    /// controls, which keep it for editing.
    pub fn advances_on_enter(&self) -> bool {
        !self.field.field_type.is_multi_line()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|failure| failure.to_string())
    }
}

/// Drives one respondent's traversal of a compiled form.
///
/// The runner exclusively owns the mutable run state: current phase, the
/// visibility set, the captured answers, and per-field errors. The plan
/// and the rule evaluator are read-only inputs to every transition. All
/// operations run synchronously to completion; while the submission sink
/// is being called the machine is in `Submitting` and drops any
/// navigation input instead of queueing it.
pub struct Runner {
    plan: FormPlan,
    sink: Box<dyn SubmissionSink>,
    phase: RunPhase,
    visible: AHashSet<usize>,
    answers: AnswerMap,
    errors: AHashMap<FieldId, ValidationFailure>,
    submission_error: Option<SubmissionError>,
    trace: RunTrace,
}

impl Runner {
    pub fn new(plan: FormPlan, sink: Box<dyn SubmissionSink>) -> Self {
        let visible = (0..plan.len()).collect();
        Self {
            plan,
            sink,
            phase: RunPhase::Intro,
            visible,
            answers: AnswerMap::default(),
            errors: AHashMap::new(),
            submission_error: None,
            trace: RunTrace::default(),
        }
    }

    /// Leaves the intro and enters the first visible field. A catalog
    /// with no visible fields degrades to submitting an empty answer set.
    pub fn start(&mut self) -> StepOutcome {
        match self.phase {
            RunPhase::Intro => self.enter_first_field(),
            _ => StepOutcome::Ignored,
        }
    }

    /// Records a value for a field and clears any error surfaced on it.
    /// Does not move the position. Unknown field ids and statements are
    /// a no-op; input during `Submitting`/`Submitted` is dropped.
    pub fn set_value(&mut self, field_id: &str, value: Value) {
        if matches!(self.phase, RunPhase::Submitting | RunPhase::Submitted) {
            return;
        }
        let Some(index) = self.plan.position(field_id) else {
            return;
        };
        if !self.plan.fields()[index].field_type.carries_answer() {
            return;
        }
        self.answers.insert(field_id.to_string(), value);
        self.errors.remove(field_id);
    }

    /// Validates the current field, evaluates its rules, and moves on:
    /// a fired `end_form` submits immediately, a fired forward `skip_to`
    /// jumps, and otherwise the run advances to the next visible field —
    /// submitting when none remains.
    pub fn advance(&mut self) -> StepOutcome {
        let current = match self.phase {
            RunPhase::Submitting | RunPhase::Submitted => return StepOutcome::Ignored,
            RunPhase::Intro => return self.enter_first_field(),
            RunPhase::OnField(index) => index,
        };

        let current_id = self.plan.fields()[current].id.clone();
        let answer = self.answers.get(&current_id).cloned();

        if let Some(failure) = validate_field(&self.plan.fields()[current], answer.as_ref()) {
            self.errors.insert(current_id.clone(), failure);
            self.trace.push(TraceEvent::Blocked {
                field_id: current_id,
                failure,
            });
            return StepOutcome::Blocked;
        }

        self.trace.push(TraceEvent::Answered {
            field_id: current_id.clone(),
            value: answer.clone(),
        });

        let outcome = logic::evaluate(&current_id, answer.as_ref(), self.plan.rules());
        self.apply_hides(&outcome);

        if outcome.end_form {
            // An explicit designer decision to terminate: remaining
            // fields are not revalidated.
            self.trace.push(TraceEvent::EndedEarly {
                field_id: current_id,
            });
            return self.finish(false);
        }

        if let Some(target_id) = &outcome.skip_to {
            // Forward jumps only; backward or same-position targets fall
            // through to linear advance. Unknown targets are a no-op.
            if let Some(target) = self.plan.position(target_id) {
                if target > current && self.visible.contains(&target) {
                    self.trace.push(TraceEvent::Jumped {
                        from: current_id,
                        to: target_id.clone(),
                    });
                    self.phase = RunPhase::OnField(target);
                    return StepOutcome::Moved;
                }
            }
        }

        match self.next_visible_after(current) {
            Some(next) => {
                self.trace.push(TraceEvent::Moved {
                    field_id: self.field_id(next),
                });
                self.phase = RunPhase::OnField(next);
                StepOutcome::Moved
            }
            None => self.finish(true),
        }
    }

    /// Moves to the immediately preceding visible field, or to the intro
    /// from the first one. No validation, no rule evaluation, and no
    /// un-hiding: hides are permanent for the run.
    pub fn go_back(&mut self) -> StepOutcome {
        let current = match self.phase {
            RunPhase::OnField(index) => index,
            _ => return StepOutcome::Ignored,
        };
        match self.prev_visible_before(current) {
            Some(prev) => {
                self.phase = RunPhase::OnField(prev);
                self.trace.push(TraceEvent::WentBack {
                    field_id: Some(self.field_id(prev)),
                });
                StepOutcome::Moved
            }
            None => {
                self.phase = RunPhase::Intro;
                self.trace.push(TraceEvent::WentBack { field_id: None });
                StepOutcome::Moved
            }
        }
    }

    /// Runs the full validation pass over every currently visible field
    /// and hands the answers to the sink. Any failure jumps the position
    /// to the first offending field and aborts the submit.
    pub fn submit(&mut self) -> StepOutcome {
        match self.phase {
            RunPhase::Submitting | RunPhase::Submitted => StepOutcome::Ignored,
            _ => self.finish(true),
        }
    }

    /// The snapshot a submission carries: currently-visible fields that
    /// have a recorded answer. Hidden fields are omitted, not sent as null.
    pub fn payload(&self) -> AnswerMap {
        self.plan
            .fields()
            .iter()
            .enumerate()
            .filter(|(index, _)| self.visible.contains(index))
            .filter_map(|(_, field)| {
                self.answers
                    .get(&field.id)
                    .map(|value| (field.id.clone(), value.clone()))
            })
            .collect()
    }

    pub fn view(&self) -> RunView<'_> {
        match self.phase {
            RunPhase::Intro => RunView::Intro,
            RunPhase::Submitting => RunView::Submitting,
            RunPhase::Submitted => RunView::Submitted,
            RunPhase::OnField(index) => {
                let field = &self.plan.fields()[index];
                RunView::OnField(FieldView {
                    field,
                    value: self.answers.get(&field.id),
                    error: self.errors.get(&field.id).copied(),
                    is_last_visible: self.next_visible_after(index).is_none(),
                })
            }
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// The rejection from the last failed submit, until a retry resolves it.
    pub fn submission_error(&self) -> Option<&SubmissionError> {
        self.submission_error.as_ref()
    }

    pub fn trace(&self) -> &RunTrace {
        &self.trace
    }

    /// One-based position among visible fields plus the visible total,
    /// for "question N of M" affordances. `None` outside `OnField`.
    pub fn progress(&self) -> Option<(usize, usize)> {
        let RunPhase::OnField(index) = self.phase else {
            return None;
        };
        let before = self.visible.iter().filter(|&&v| v < index).count();
        // The current field may have been hidden by its own rule while a
        // rejected submission put the run back on it; count it anyway.
        let total = self.visible.len() + usize::from(!self.visible.contains(&index));
        Some((before + 1, total))
    }

    fn enter_first_field(&mut self) -> StepOutcome {
        match self.first_visible() {
            Some(index) => {
                self.trace.push(TraceEvent::Started {
                    field_id: Some(self.field_id(index)),
                });
                self.phase = RunPhase::OnField(index);
                StepOutcome::Moved
            }
            None => {
                self.trace.push(TraceEvent::Started { field_id: None });
                self.finish(true)
            }
        }
    }

    fn apply_hides(&mut self, outcome: &LogicOutcome) {
        for hidden_id in &outcome.newly_hidden {
            // Unknown targets fall through: a malformed rule degrades to
            // a no-op instead of faulting the run.
            if let Some(index) = self.plan.position(hidden_id) {
                if self.visible.remove(&index) {
                    self.trace.push(TraceEvent::Hidden {
                        field_id: hidden_id.clone(),
                    });
                }
            }
        }
    }

    fn finish(&mut self, validate_all: bool) -> StepOutcome {
        if validate_all {
            let mut first_invalid: Option<(usize, ValidationFailure)> = None;
            for (index, field) in self.plan.fields().iter().enumerate() {
                if !self.visible.contains(&index) {
                    continue;
                }
                if let Some(failure) = validate_field(field, self.answers.get(&field.id)) {
                    self.errors.insert(field.id.clone(), failure);
                    if first_invalid.is_none() {
                        first_invalid = Some((index, failure));
                    }
                }
            }
            if let Some((index, failure)) = first_invalid {
                self.trace.push(TraceEvent::Blocked {
                    field_id: self.field_id(index),
                    failure,
                });
                self.phase = RunPhase::OnField(index);
                return StepOutcome::Blocked;
            }
        }

        let payload = self.payload();
        let resume = std::mem::replace(&mut self.phase, RunPhase::Submitting);
        match self.sink.submit(&payload) {
            Ok(()) => {
                self.submission_error = None;
                self.phase = RunPhase::Submitted;
                self.trace.push(TraceEvent::Submitted {
                    answer_count: payload.len(),
                });
                StepOutcome::Submitted
            }
            Err(error) => {
                self.trace.push(TraceEvent::SubmitRejected {
                    message: error.to_string(),
                });
                self.submission_error = Some(error);
                self.phase = resume;
                StepOutcome::SubmitFailed
            }
        }
    }

    fn field_id(&self, index: usize) -> FieldId {
        self.plan.fields()[index].id.clone()
    }

    fn first_visible(&self) -> Option<usize> {
        (0..self.plan.len()).find(|index| self.visible.contains(index))
    }

    fn next_visible_after(&self, index: usize) -> Option<usize> {
        (index + 1..self.plan.len()).find(|candidate| self.visible.contains(candidate))
    }

    fn prev_visible_before(&self, index: usize) -> Option<usize> {
        (0..index).rev().find(|candidate| self.visible.contains(candidate))
    }
}
