//! Field and form validation
//!
//! Per field, two stages:
//! 1. Required: a checkbox needs at least one checked option; any other type
//!    needs a value that is non-empty after trimming. Failure records the
//!    field's error message.
//! 2. Type format, only for values non-empty after trimming:
//!    - email: `local@domain.tld` shape, field's error message on failure
//!    - number: numeric text, field's error message on failure
//!    - text: "Minimum N characters required" / "Maximum N characters allowed"
//!    - select, radio, checkbox: nothing beyond stage 1
//!
//! `validate_field` returns every message triggered; form-level and live
//! results surface only the first one. Validation never mutates the schema
//! and keeps no state between calls.

use serde::Serialize;
use std::collections::BTreeMap;

use super::rules::{is_valid_email, is_valid_number, text_length};
use super::values::{selected_options, ValueMap};
use crate::schema::{Field, FieldKind, FormSchema};

/// Returns every message `value` triggers for `field`, in check order.
///
/// `None` means the field had no value at all.
pub fn validate_field(field: &Field, value: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();
    let filled = value.filter(|v| !v.trim().is_empty());

    if field.required() {
        let satisfied = match field.kind() {
            FieldKind::Checkbox { .. } => {
                value.map_or(false, |v| selected_options(v).next().is_some())
            }
            _ => filled.is_some(),
        };
        if !satisfied {
            errors.push(field.error_message().to_string());
        }
    }

    let Some(value) = filled else {
        return errors;
    };

    match field.kind() {
        FieldKind::Email => {
            if !is_valid_email(value) {
                errors.push(field.error_message().to_string());
            }
        }
        FieldKind::Number => {
            if !is_valid_number(value) {
                errors.push(field.error_message().to_string());
            }
        }
        FieldKind::Text {
            min_length,
            max_length,
        } => {
            let length = text_length(value);
            if let Some(min) = min_length {
                if length < *min as usize {
                    errors.push(format!("Minimum {} characters required", min));
                }
            }
            if let Some(max) = max_length {
                if length > *max as usize {
                    errors.push(format!("Maximum {} characters allowed", max));
                }
            }
        }
        FieldKind::Select { .. } | FieldKind::Radio { .. } | FieldKind::Checkbox { .. } => {}
    }

    errors
}

/// Live check for one field as its value changes: the first message, if any.
pub fn validate_field_live(field: &Field, value: Option<&str>) -> Option<String> {
    validate_field(field, value).into_iter().next()
}

/// Outcome of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub is_valid: bool,
    /// Field name → first message, for failing fields only
    pub errors: BTreeMap<String, String>,
}

impl FormValidation {
    /// Number of failing fields
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Message for one field, if it failed
    pub fn error_for(&self, field_name: &str) -> Option<&str> {
        self.errors.get(field_name).map(String::as_str)
    }
}

/// Validates value maps against a schema snapshot.
pub struct FormValidator<'a> {
    schema: &'a FormSchema,
}

impl<'a> FormValidator<'a> {
    /// Creates a validator over the given schema.
    pub fn new(schema: &'a FormSchema) -> Self {
        Self { schema }
    }

    /// Validates every field in schema order.
    ///
    /// Each failing field contributes its first message; the form is valid
    /// only when no field fails.
    pub fn validate_form(&self, values: &ValueMap) -> FormValidation {
        let mut errors = BTreeMap::new();

        for field in self.schema.fields() {
            let value = values.get(field.name()).map(String::as_str);
            if let Some(first) = validate_field_live(field, value) {
                errors.insert(field.name().to_string(), first);
            }
        }

        FormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Whether `values` passes `validate_form`
    pub fn is_form_valid(&self, values: &ValueMap) -> bool {
        self.validate_form(values).is_valid
    }

    /// Live check of one field looked up by name.
    ///
    /// Returns `None` both for a passing value and for a name the schema
    /// does not contain.
    pub fn validate_value(&self, field_name: &str, value: Option<&str>) -> Option<String> {
        let field = self.schema.field_by_name(field_name)?;
        validate_field_live(field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDraft, FieldType};

    fn single(draft: FieldDraft) -> FormSchema {
        let mut schema = FormSchema::new();
        schema.add_field(draft).unwrap();
        schema
    }

    fn field(schema: &FormSchema) -> &Field {
        &schema.fields()[0]
    }

    #[test]
    fn test_required_text_empty_and_blank() {
        let schema = single(FieldDraft::new("Name", FieldType::Text).required());
        let f = field(&schema);
        assert_eq!(validate_field(f, Some("")), vec!["This field is required"]);
        assert_eq!(validate_field(f, Some("   ")), vec!["This field is required"]);
        assert_eq!(validate_field(f, None), vec!["This field is required"]);
        assert!(validate_field(f, Some("x")).is_empty());
    }

    #[test]
    fn test_optional_empty_skips_type_checks() {
        let schema = single(FieldDraft::new("Email", FieldType::Email));
        assert!(validate_field(field(&schema), Some("")).is_empty());
        assert!(validate_field(field(&schema), None).is_empty());
    }

    #[test]
    fn test_email_format() {
        let schema = single(FieldDraft::new("Email", FieldType::Email));
        let f = field(&schema);
        assert!(validate_field(f, Some("a@b.com")).is_empty());
        assert_eq!(
            validate_field(f, Some("a@b")),
            vec!["Please enter a valid email address"]
        );
        assert_eq!(
            validate_field(f, Some("a b@c.com")),
            vec!["Please enter a valid email address"]
        );
    }

    #[test]
    fn test_number_format() {
        let schema = single(
            FieldDraft::new("Age", FieldType::Number).with_error_message("Numbers only"),
        );
        let f = field(&schema);
        assert!(validate_field(f, Some("42")).is_empty());
        assert_eq!(validate_field(f, Some("abc")), vec!["Numbers only"]);
    }

    #[test]
    fn test_required_and_format_both_reported() {
        let schema = single(FieldDraft::new("Age", FieldType::Number).required());
        let f = field(&schema);
        assert_eq!(
            validate_field(f, Some("abc")),
            vec!["Please enter a valid number"]
        );
    }

    #[test]
    fn test_text_length_messages_ignore_custom_message() {
        let schema = single(
            FieldDraft::new("Code", FieldType::Text)
                .with_min_length(3)
                .with_error_message("Bad code"),
        );
        assert_eq!(
            validate_field(field(&schema), Some("ab")),
            vec!["Minimum 3 characters required"]
        );

        let schema = single(FieldDraft::new("Code", FieldType::Text).with_max_length(5));
        assert_eq!(
            validate_field(field(&schema), Some("abcdef")),
            vec!["Maximum 5 characters allowed"]
        );
        assert!(validate_field(field(&schema), Some("abcde")).is_empty());
    }

    #[test]
    fn test_inverted_bounds_report_minimum_first() {
        let schema = single(
            FieldDraft::new("Code", FieldType::Text)
                .with_min_length(6)
                .with_max_length(2),
        );
        let f = field(&schema);
        assert_eq!(
            validate_field(f, Some("abcd")),
            vec!["Minimum 6 characters required", "Maximum 2 characters allowed"]
        );
        assert_eq!(
            validate_field_live(f, Some("abcd")).as_deref(),
            Some("Minimum 6 characters required")
        );
    }

    #[test]
    fn test_checkbox_required() {
        let schema = single(
            FieldDraft::new("Colors", FieldType::Checkbox)
                .with_options(["Red", "Green"])
                .required(),
        );
        let f = field(&schema);
        assert_eq!(
            validate_field(f, Some("")),
            vec!["Please select at least one option"]
        );
        assert_eq!(
            validate_field(f, None),
            vec!["Please select at least one option"]
        );
        assert!(validate_field(f, Some("Red, Green")).is_empty());
    }

    #[test]
    fn test_select_has_no_format_check() {
        let schema = single(FieldDraft::new("Size", FieldType::Select).with_options(["S", "M"]));
        assert!(validate_field(field(&schema), Some("anything")).is_empty());
    }

    #[test]
    fn test_validate_form_reports_failing_fields_only() {
        let mut schema = FormSchema::new();
        schema.add_field(FieldDraft::new("F1", FieldType::Email)).unwrap();
        schema.add_field(FieldDraft::new("F2", FieldType::Number)).unwrap();

        let mut values = ValueMap::new();
        values.insert("F1".into(), "a@b.com".into());
        values.insert("F2".into(), "abc".into());

        let result = FormValidator::new(&schema).validate_form(&values);
        assert!(!result.is_valid);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.error_for("F2"), Some("Please enter a valid number"));
        assert_eq!(result.error_for("F1"), None);
    }

    #[test]
    fn test_validate_form_empty_schema_is_valid() {
        let schema = FormSchema::new();
        let validator = FormValidator::new(&schema);
        assert!(validator.is_form_valid(&ValueMap::new()));
    }

    #[test]
    fn test_validate_value_by_name() {
        let schema = single(FieldDraft::new("Email", FieldType::Email).required());
        let validator = FormValidator::new(&schema);
        assert_eq!(
            validator.validate_value("Email", Some("nope")).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(validator.validate_value("Email", Some("a@b.co")), None);
        assert_eq!(validator.validate_value("Missing", Some("x")), None);
    }

    #[test]
    fn test_form_validation_serializes_camel_case() {
        let result = FormValidation {
            is_valid: true,
            errors: BTreeMap::new(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], true);
        assert!(json["errors"].as_object().unwrap().is_empty());
    }
}
