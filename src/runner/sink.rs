use crate::answer::AnswerMap;
use crate::error::SubmissionError;

/// The output boundary of a run: receives the final answer set exactly
/// once per successful terminal transition.
///
/// The map carries only currently-visible fields' answers; fields hidden
/// by rules are omitted, not sent as null. A sink that rejects the call
/// rolls the run back to its pre-submit position with answers intact, so
/// the host can retry with the identical snapshot.
///
/// Hosts with an asynchronous transport perform their call inside this
/// method; the runner holds the `Submitting` phase for the duration and
/// ignores navigation input until the call resolves.
pub trait SubmissionSink {
    fn submit(&mut self, answers: &AnswerMap) -> Result<(), SubmissionError>;
}
