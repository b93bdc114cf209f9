use super::{RunTrace, TraceEvent};
use std::fmt::Write;

/// Formats run traces into human-readable transcripts
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a run trace into a numbered, line-per-event transcript.
    pub fn format_trace(trace: &RunTrace) -> String {
        let mut out = String::new();
        for (index, event) in trace.events().iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", index + 1, Self::format_event(event));
        }
        out
    }

    fn format_event(event: &TraceEvent) -> String {
        match event {
            TraceEvent::Started { field_id: Some(id) } => {
                format!("run started at field '{}'", id)
            }
            TraceEvent::Started { field_id: None } => {
                "run started with no visible fields".to_string()
            }
            TraceEvent::Answered {
                field_id,
                value: Some(value),
            } => format!("'{}' answered: {}", field_id, value),
            TraceEvent::Answered {
                field_id,
                value: None,
            } => format!("'{}' passed without an answer", field_id),
            TraceEvent::Blocked { field_id, failure } => {
                format!("'{}' blocked: {}", field_id, failure)
            }
            TraceEvent::Hidden { field_id } => format!("'{}' hidden by rule", field_id),
            TraceEvent::Jumped { from, to } => {
                format!("jumped from '{}' to '{}'", from, to)
            }
            TraceEvent::Moved { field_id } => format!("moved to '{}'", field_id),
            TraceEvent::WentBack { field_id: Some(id) } => {
                format!("went back to '{}'", id)
            }
            TraceEvent::WentBack { field_id: None } => "went back to the intro".to_string(),
            TraceEvent::EndedEarly { field_id } => {
                format!("'{}' ended the form early", field_id)
            }
            TraceEvent::SubmitRejected { message } => {
                format!("submission rejected: {}", message)
            }
            TraceEvent::Submitted { answer_count } => {
                format!("submitted {} answer(s)", answer_count)
            }
        }
    }
}
