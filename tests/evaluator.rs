//! Tests for the pure logic evaluator.
mod common;
use common::*;
use tsugi::prelude::*;

fn skip(target: &str) -> RuleAction {
    RuleAction::SkipTo {
        target: target.to_string(),
    }
}

fn hide(target: &str) -> RuleAction {
    RuleAction::HideBlock {
        target: target.to_string(),
    }
}

#[test]
fn test_rules_for_other_fields_are_inert() {
    let rules = vec![rule(
        "other",
        ConditionOperator::IsNotEmpty,
        Value::Empty,
        RuleAction::EndForm,
    )];

    let outcome = evaluate("fired", Some(&Value::Text("x".to_string())), &rules);
    assert!(outcome.is_neutral());
}

#[test]
fn test_equality_is_strict() {
    let rules = vec![rule(
        "q",
        ConditionOperator::Equals,
        Value::Number(5.0),
        RuleAction::EndForm,
    )];

    // "5" (text) does not equal 5 (number): no coercion on equality.
    let outcome = evaluate("q", Some(&Value::Text("5".to_string())), &rules);
    assert!(!outcome.end_form);

    let outcome = evaluate("q", Some(&Value::Number(5.0)), &rules);
    assert!(outcome.end_form);
}

#[test]
fn test_not_equals_fires_for_unanswered_source() {
    let rules = vec![rule(
        "q",
        ConditionOperator::NotEquals,
        Value::Text("x".to_string()),
        RuleAction::EndForm,
    )];

    let outcome = evaluate("q", None, &rules);
    assert!(outcome.end_form);
}

#[test]
fn test_contains_is_case_insensitive_substring() {
    let rules = vec![rule(
        "q",
        ConditionOperator::Contains,
        Value::Text("BLUE".to_string()),
        RuleAction::EndForm,
    )];

    let outcome = evaluate("q", Some(&Value::Text("light blue".to_string())), &rules);
    assert!(outcome.end_form);

    // Lists are tested through their joined string form.
    let answer = Value::List(vec!["blue".to_string(), "green".to_string()]);
    let outcome = evaluate("q", Some(&answer), &rules);
    assert!(outcome.end_form);

    let outcome = evaluate("q", Some(&Value::Text("red".to_string())), &rules);
    assert!(!outcome.end_form);
}

#[test]
fn test_ordered_comparisons_coerce_numbers() {
    let rules = vec![rule(
        "q",
        ConditionOperator::GreaterThan,
        Value::Text("10".to_string()),
        RuleAction::EndForm,
    )];

    let outcome = evaluate("q", Some(&Value::Number(11.0)), &rules);
    assert!(outcome.end_form);

    let outcome = evaluate("q", Some(&Value::Text("11".to_string())), &rules);
    assert!(outcome.end_form);

    // Non-numeric input fails the comparison instead of erroring.
    let outcome = evaluate("q", Some(&Value::Text("many".to_string())), &rules);
    assert!(!outcome.end_form);

    let less = vec![rule(
        "q",
        ConditionOperator::LessThan,
        Value::Number(10.0),
        RuleAction::EndForm,
    )];
    let outcome = evaluate("q", Some(&Value::Bool(true)), &less);
    assert!(!outcome.end_form);
}

#[test]
fn test_hide_block_collects_every_fired_target() {
    let answer = Value::Text("yes".to_string());
    let rules = vec![
        rule("q", ConditionOperator::Equals, answer.clone(), hide("x")),
        rule("q", ConditionOperator::Equals, answer.clone(), hide("y")),
        rule(
            "q",
            ConditionOperator::Equals,
            Value::Text("no".to_string()),
            hide("z"),
        ),
    ];

    let outcome = evaluate("q", Some(&answer), &rules);
    assert_eq!(outcome.newly_hidden.len(), 2);
    assert!(outcome.newly_hidden.contains("x"));
    assert!(outcome.newly_hidden.contains("y"));
    assert!(!outcome.newly_hidden.contains("z"));
}

#[test]
fn test_last_declared_skip_wins() {
    let answer = Value::Text("go".to_string());
    let rules = vec![
        rule("q", ConditionOperator::Equals, answer.clone(), skip("first")),
        rule("q", ConditionOperator::Equals, answer.clone(), skip("second")),
    ];

    let outcome = evaluate("q", Some(&answer), &rules);
    assert_eq!(outcome.skip_to.as_deref(), Some("second"));
}

#[test]
fn test_end_form_does_not_short_circuit_hides() {
    let answer = Value::Text("done".to_string());
    let rules = vec![
        rule(
            "q",
            ConditionOperator::Equals,
            answer.clone(),
            RuleAction::EndForm,
        ),
        rule("q", ConditionOperator::Equals, answer.clone(), hide("late")),
    ];

    let outcome = evaluate("q", Some(&answer), &rules);
    assert!(outcome.end_form);
    assert!(outcome.newly_hidden.contains("late"));
}
