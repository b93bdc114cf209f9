use super::rule::{LogicRule, RuleAction};
use crate::answer::{FieldId, Value};
use ahash::AHashSet;

/// The structured decision produced by evaluating the rule set after one
/// field was answered. The runner applies the effects; evaluation itself
/// mutates nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogicOutcome {
    /// Fields hidden by fired `hide_block` rules. Hiding is monotonic:
    /// the runner removes these from the visible set and never re-adds them.
    pub newly_hidden: AHashSet<FieldId>,
    /// Jump target from the last matching `skip_to` rule, if any fired.
    pub skip_to: Option<FieldId>,
    /// Whether a fired `end_form` rule terminates the run.
    pub end_form: bool,
}

impl LogicOutcome {
    pub fn is_neutral(&self) -> bool {
        self.newly_hidden.is_empty() && self.skip_to.is_none() && !self.end_form
    }
}

/// Evaluates every rule attached to the field that was just answered.
///
/// Rules whose `source_field_id` differs from `fired_field_id` are
/// skipped. Matching rules are tested in declaration order; when several
/// `skip_to` rules fire, the last one declared wins. A fired `end_form`
/// sets the flag without cutting evaluation short — later `hide_block`
/// rules still contribute, which is harmless on a terminating run.
pub fn evaluate(
    fired_field_id: &str,
    fired_value: Option<&Value>,
    rules: &[LogicRule],
) -> LogicOutcome {
    let mut outcome = LogicOutcome::default();

    for rule in rules.iter().filter(|r| r.source_field_id == fired_field_id) {
        if !rule.operator.test(fired_value, &rule.comparison_value) {
            continue;
        }
        match &rule.action {
            RuleAction::HideBlock { target } => {
                outcome.newly_hidden.insert(target.clone());
            }
            RuleAction::SkipTo { target } => {
                outcome.skip_to = Some(target.clone());
            }
            RuleAction::EndForm => {
                outcome.end_form = true;
            }
        }
    }

    outcome
}
