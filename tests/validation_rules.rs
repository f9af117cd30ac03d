//! Validation Rule Tests
//!
//! Tests for the per-field and whole-form rules:
//! - Required check (trimmed emptiness; checked options for checkboxes)
//! - Type checks only on filled values
//! - Only the first message per field is surfaced
//! - Validation is deterministic and never mutates the schema

use formsmith::schema::{FieldDraft, FieldType, FormSchema};
use formsmith::validation::{
    collect_values, join_selected, validate_field, validate_field_live, FormValidator, ValueMap,
};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn single(draft: FieldDraft) -> FormSchema {
    let mut schema = FormSchema::new();
    schema.add_field(draft).unwrap();
    schema
}

fn values(pairs: &[(&str, &str)]) -> ValueMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Required Tests
// =============================================================================

/// Empty or blank required text yields the field's message.
#[test]
fn test_required_text_blank() {
    let schema = single(FieldDraft::new("Name", FieldType::Text).required());
    let field = &schema.fields()[0];

    for blank in ["", "   "] {
        assert_eq!(
            validate_field_live(field, Some(blank)).as_deref(),
            Some("This field is required")
        );
    }
    assert_eq!(
        validate_field_live(field, None).as_deref(),
        Some("This field is required")
    );
    assert_eq!(validate_field_live(field, Some("x")), None);
}

/// A custom message replaces the default one.
#[test]
fn test_required_custom_message() {
    let schema = single(
        FieldDraft::new("Name", FieldType::Text)
            .required()
            .with_error_message("Tell us your name"),
    );
    assert_eq!(
        validate_field_live(&schema.fields()[0], Some("")).as_deref(),
        Some("Tell us your name")
    );
}

/// Required checkbox needs at least one checked option.
#[test]
fn test_required_checkbox() {
    let schema = single(
        FieldDraft::new("Colors", FieldType::Checkbox)
            .required()
            .with_options(["Red", "Green", "Blue"]),
    );
    let field = &schema.fields()[0];

    let none = join_selected::<&str>(field, &[]);
    assert_eq!(
        validate_field_live(field, Some(&none)).as_deref(),
        Some("Please select at least one option")
    );

    let joined = join_selected(field, &["Blue", "Red"]);
    assert_eq!(joined, "Red, Blue");
    assert_eq!(validate_field_live(field, Some(&joined)), None);
}

/// Optional empty values skip every check.
#[test]
fn test_optional_empty_skips_type_checks() {
    let schema = single(FieldDraft::new("Age", FieldType::Number));
    assert!(validate_field(&schema.fields()[0], Some("")).is_empty());
    assert!(validate_field(&schema.fields()[0], None).is_empty());
}

// =============================================================================
// Type Check Tests
// =============================================================================

/// Email shape is local@domain.tld without whitespace.
#[test]
fn test_email_format() {
    let schema = single(FieldDraft::new("Email", FieldType::Email));
    let field = &schema.fields()[0];

    assert_eq!(validate_field_live(field, Some("a@b.com")), None);
    for bad in ["a@b", "a b@c.com"] {
        assert_eq!(
            validate_field_live(field, Some(bad)).as_deref(),
            Some("Please enter a valid email address")
        );
    }
}

/// Numbers must parse as numeric text.
#[test]
fn test_number_format() {
    let schema = single(FieldDraft::new("Age", FieldType::Number));
    let field = &schema.fields()[0];

    assert_eq!(validate_field_live(field, Some("42")), None);
    assert_eq!(validate_field_live(field, Some("-1.5e3")), None);
    assert_eq!(
        validate_field_live(field, Some("abc")).as_deref(),
        Some("Please enter a valid number")
    );
}

/// Length bounds use fixed messages, not the field's message.
#[test]
fn test_text_length_bounds() {
    let schema = single(
        FieldDraft::new("Code", FieldType::Text)
            .with_min_length(3)
            .with_max_length(5)
            .with_error_message("Bad code"),
    );
    let field = &schema.fields()[0];

    assert_eq!(
        validate_field_live(field, Some("ab")).as_deref(),
        Some("Minimum 3 characters required")
    );
    assert_eq!(
        validate_field_live(field, Some("abcdef")).as_deref(),
        Some("Maximum 5 characters allowed")
    );
    assert_eq!(validate_field_live(field, Some("abcd")), None);
}

/// Length is counted in chars, so an astral char counts once.
#[test]
fn test_text_length_counts_astral_char_once() {
    let schema = single(FieldDraft::new("Icon", FieldType::Text).with_min_length(2));
    let field = &schema.fields()[0];

    assert_eq!(
        validate_field_live(field, Some("\u{1F600}")).as_deref(),
        Some("Minimum 2 characters required")
    );
    assert_eq!(validate_field_live(field, Some("\u{1F600}\u{1F600}")), None);
}

/// Inverted bounds report both messages; the min message surfaces first.
#[test]
fn test_inverted_bounds_first_message_wins() {
    let schema = single(
        FieldDraft::new("Code", FieldType::Text)
            .with_min_length(5)
            .with_max_length(2),
    );
    let field = &schema.fields()[0];

    let all = validate_field(field, Some("abc"));
    assert_eq!(
        all,
        vec![
            "Minimum 5 characters required".to_string(),
            "Maximum 2 characters allowed".to_string()
        ]
    );
    assert_eq!(
        validate_field_live(field, Some("abc")).as_deref(),
        Some("Minimum 5 characters required")
    );
}

// =============================================================================
// Form Validation Tests
// =============================================================================

/// Only failing fields appear in the error map.
#[test]
fn test_form_reports_only_failures() {
    let mut schema = FormSchema::new();
    schema.add_field(FieldDraft::new("F1", FieldType::Email)).unwrap();
    schema.add_field(FieldDraft::new("F2", FieldType::Number)).unwrap();

    let result =
        FormValidator::new(&schema).validate_form(&values(&[("F1", "a@b.com"), ("F2", "x")]));

    assert!(!result.is_valid);
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.error_for("F1"), None);
    assert_eq!(result.error_for("F2"), Some("Please enter a valid number"));
}

/// An empty schema accepts any value map.
#[test]
fn test_empty_schema_is_valid() {
    let schema = FormSchema::new();
    let validator = FormValidator::new(&schema);
    assert!(validator.is_form_valid(&values(&[("anything", "")])));
}

/// Same input, same result; the schema is untouched.
#[test]
fn test_validation_is_deterministic() {
    let mut schema = FormSchema::new();
    schema.add_field(FieldDraft::new("Name", FieldType::Text).required()).unwrap();
    let before = schema.clone();
    let validator = FormValidator::new(&schema);

    let input = values(&[("Name", " ")]);
    let first = validator.validate_form(&input);
    for _ in 0..100 {
        assert_eq!(validator.validate_form(&input), first);
    }
    assert_eq!(schema, before);
}

/// JSON input with a checkbox array validates like a joined value.
#[test]
fn test_collected_checkbox_values() {
    let mut schema = FormSchema::new();
    schema
        .add_field(
            FieldDraft::new("Colors", FieldType::Checkbox)
                .required()
                .with_options(["Red", "Green", "Blue"]),
        )
        .unwrap();

    let input = json!({ "Colors": ["Green", "Purple"], "Extra": "ignored" });
    let collected = collect_values(&schema, input.as_object().unwrap());

    assert_eq!(collected.get("Colors").map(String::as_str), Some("Green"));
    assert!(!collected.contains_key("Extra"));
    assert!(FormValidator::new(&schema).is_form_valid(&collected));

    let empty = collect_values(&schema, json!({ "Colors": [] }).as_object().unwrap());
    assert!(!FormValidator::new(&schema).is_form_valid(&empty));
}

/// Live checks by name match the form-level result.
#[test]
fn test_validate_value_by_name() {
    let schema = single(FieldDraft::new("Email", FieldType::Email).required());
    let validator = FormValidator::new(&schema);

    assert_eq!(
        validator.validate_value("Email", Some("nope")).as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(validator.validate_value("Missing", Some("nope")), None);
}
