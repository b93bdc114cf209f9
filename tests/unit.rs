//! Unit tests for values, operators, and error display.
mod common;
use tsugi::prelude::*;

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Value::Number(42.0)), "42");
    assert_eq!(format!("{}", Value::Number(2.5)), "2.5");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::Text("hi".to_string())), "hi");
    assert_eq!(
        format!(
            "{}",
            Value::List(vec!["red".to_string(), "blue".to_string()])
        ),
        "red, blue"
    );
    assert_eq!(format!("{}", Value::Empty), "");
}

#[test]
fn test_emptiness_rule() {
    assert!(Value::Empty.is_empty());
    assert!(Value::Text(String::new()).is_empty());
    assert!(Value::List(vec![]).is_empty());

    assert!(!Value::Text("x".to_string()).is_empty());
    assert!(!Value::List(vec!["x".to_string()]).is_empty());
    // Zero and false are answers, not absences.
    assert!(!Value::Number(0.0).is_empty());
    assert!(!Value::Bool(false).is_empty());
}

#[test]
fn test_is_empty_and_is_not_empty_are_complements() {
    let classes: Vec<Option<Value>> = vec![
        None,
        Some(Value::Empty),
        Some(Value::Text(String::new())),
        Some(Value::List(vec![])),
        Some(Value::Text("hello".to_string())),
        Some(Value::List(vec!["a".to_string()])),
        Some(Value::Number(0.0)),
        Some(Value::Bool(false)),
    ];

    for candidate in &classes {
        let empty = ConditionOperator::IsEmpty.test(candidate.as_ref(), &Value::Empty);
        let not_empty = ConditionOperator::IsNotEmpty.test(candidate.as_ref(), &Value::Empty);
        assert_ne!(
            empty, not_empty,
            "is_empty and is_not_empty must disagree for {:?}",
            candidate
        );
    }
}

#[test]
fn test_numeric_coercion() {
    assert_eq!(Value::Number(7.0).as_number(), Some(7.0));
    assert_eq!(Value::Text(" 42 ".to_string()).as_number(), Some(42.0));
    assert_eq!(Value::Text("abc".to_string()).as_number(), None);
    assert_eq!(Value::Bool(true).as_number(), None);
    assert_eq!(Value::List(vec!["1".to_string()]).as_number(), None);
    assert_eq!(Value::Empty.as_number(), None);
}

#[test]
fn test_value_from_json() {
    assert_eq!(Value::from(serde_json::json!(null)), Value::Empty);
    assert_eq!(Value::from(serde_json::json!(true)), Value::Bool(true));
    assert_eq!(Value::from(serde_json::json!(3.5)), Value::Number(3.5));
    assert_eq!(
        Value::from(serde_json::json!("text")),
        Value::Text("text".to_string())
    );
    assert_eq!(
        Value::from(serde_json::json!(["a", "b"])),
        Value::List(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn test_field_type_tokens_round_trip() {
    let tokens = [
        "short_text",
        "long_text",
        "email",
        "phone",
        "number",
        "date",
        "dropdown",
        "multi_select",
        "yes_no",
        "checkbox",
        "rating",
        "statement",
    ];
    for token in tokens {
        let parsed: FieldType = token.parse().expect("known token parses");
        assert_eq!(parsed.as_str(), token);
    }
    assert!("poll".parse::<FieldType>().is_err());
}

#[test]
fn test_enter_key_convention() {
    assert!(FieldType::LongText.is_multi_line());
    assert!(!FieldType::ShortText.is_multi_line());
    assert!(!FieldType::Dropdown.is_multi_line());
}

#[test]
fn test_error_display() {
    let err = DefinitionError::DuplicateFieldId {
        field_id: "email".to_string(),
    };
    assert!(err.to_string().contains("email"));

    let conversion = FormConversionError::ValidationError("bad operator".to_string());
    assert!(conversion.to_string().contains("bad operator"));

    // The two validation failures must be distinguishable to the respondent.
    assert_ne!(
        ValidationFailure::Required.to_string(),
        ValidationFailure::InvalidEmail.to_string()
    );
}
