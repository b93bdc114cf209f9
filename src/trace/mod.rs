pub mod formatter;

pub use formatter::*;

use crate::answer::{FieldId, Value};
use crate::error::ValidationFailure;

/// A record of one observable step of a run.
#[derive(Debug, Clone)]
pub enum TraceEvent {
    /// The run left the intro. `None` means the catalog had no visible
    /// fields and the run submitted an empty answer set.
    Started { field_id: Option<FieldId> },
    /// A field's answer was committed by advancing past it.
    Answered {
        field_id: FieldId,
        value: Option<Value>,
    },
    /// Advancing was refused because the current field failed validation.
    Blocked {
        field_id: FieldId,
        failure: ValidationFailure,
    },
    /// A fired `hide_block` rule removed a field from the visible set.
    Hidden { field_id: FieldId },
    /// A fired `skip_to` rule jumped the run forward.
    Jumped { from: FieldId, to: FieldId },
    /// Ordinary linear movement to the next visible field.
    Moved { field_id: FieldId },
    /// `go_back` returned to an earlier field, or to the intro (`None`).
    WentBack { field_id: Option<FieldId> },
    /// A fired `end_form` rule terminated the run from this field.
    EndedEarly { field_id: FieldId },
    /// The submission sink rejected the answer set.
    SubmitRejected { message: String },
    /// The run reached its terminal state.
    Submitted { answer_count: usize },
}

/// The step-by-step transcript of a run, in event order.
#[derive(Debug, Clone, Default)]
pub struct RunTrace {
    events: Vec<TraceEvent>,
}

impl RunTrace {
    pub(crate) fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
