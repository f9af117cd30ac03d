//! Submitted value maps
//!
//! A value map keys each value by field name. Checkbox fields carry their
//! checked options joined with `", "` in the field's option order; an empty
//! joined value means nothing was checked.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::schema::{Field, FieldType, FormSchema};

/// Field name → submitted value
pub type ValueMap = BTreeMap<String, String>;

/// Separator between checked options in a joined checkbox value
pub const SELECTION_SEPARATOR: &str = ", ";

/// Joins the checked options of a field in the field's option order.
///
/// Entries of `checked` that are not options of the field are ignored.
pub fn join_selected<S: AsRef<str>>(field: &Field, checked: &[S]) -> String {
    field
        .options()
        .iter()
        .filter(|opt| checked.iter().any(|c| c.as_ref() == opt.as_str()))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(SELECTION_SEPARATOR)
}

/// Splits a joined checkbox value back into its checked options.
pub fn selected_options(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|opt| !opt.is_empty())
}

/// Builds a value map for `schema` from a JSON object.
///
/// Only fields of the schema are picked up. A missing or null entry leaves
/// the field absent. For checkbox fields an array is treated as the list of
/// checked options and joined; a string is taken as already joined.
pub fn collect_values(schema: &FormSchema, input: &Map<String, Value>) -> ValueMap {
    let mut values = ValueMap::new();

    for field in schema.fields() {
        let value = match input.get(field.name()) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) => s.clone(),
            Some(Value::Array(items)) => {
                let items: Vec<String> = items.iter().filter_map(scalar_text).collect();
                if field.field_type() == FieldType::Checkbox {
                    join_selected(field, &items)
                } else {
                    items.join(SELECTION_SEPARATOR)
                }
            }
            Some(other) => match scalar_text(other) {
                Some(s) => s,
                None => continue,
            },
        };
        values.insert(field.name().to_string(), value);
    }

    values
}

/// Completes a value map for storage: every schema field gets an entry, with
/// absent values stored as empty strings.
pub fn submission_data(schema: &FormSchema, values: &ValueMap) -> ValueMap {
    schema
        .fields()
        .iter()
        .map(|f| {
            let value = values.get(f.name()).cloned().unwrap_or_default();
            (f.name().to_string(), value)
        })
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDraft;
    use serde_json::json;

    fn schema() -> FormSchema {
        let mut schema = FormSchema::new();
        schema.add_field(FieldDraft::new("Name", FieldType::Text)).unwrap();
        schema.add_field(FieldDraft::new("Age", FieldType::Number)).unwrap();
        schema
            .add_field(
                FieldDraft::new("Colors", FieldType::Checkbox).with_options(["Red", "Green", "Blue"]),
            )
            .unwrap();
        schema
    }

    #[test]
    fn test_join_follows_option_order() {
        let schema = schema();
        let colors = &schema.fields()[2];
        assert_eq!(join_selected(colors, &["Blue", "Red"]), "Red, Blue");
        assert_eq!(join_selected(colors, &["Purple"]), "");
        assert_eq!(join_selected::<&str>(colors, &[]), "");
    }

    #[test]
    fn test_selected_options_roundtrip() {
        let picked: Vec<_> = selected_options("Red, Blue").collect();
        assert_eq!(picked, vec!["Red", "Blue"]);
        assert_eq!(selected_options("").count(), 0);
        assert_eq!(selected_options(" , ").count(), 0);
    }

    #[test]
    fn test_collect_values() {
        let input = json!({
            "Name": "Ada",
            "Age": 36,
            "Colors": ["Green", "Red"],
            "Unknown": "ignored"
        });
        let values = collect_values(&schema(), input.as_object().unwrap());
        assert_eq!(values.get("Name").unwrap(), "Ada");
        assert_eq!(values.get("Age").unwrap(), "36");
        assert_eq!(values.get("Colors").unwrap(), "Red, Green");
        assert!(!values.contains_key("Unknown"));
    }

    #[test]
    fn test_collect_skips_missing_and_null() {
        let input = json!({ "Name": null });
        let values = collect_values(&schema(), input.as_object().unwrap());
        assert!(values.is_empty());
    }

    #[test]
    fn test_submission_data_fills_blanks() {
        let mut values = ValueMap::new();
        values.insert("Name".into(), "Ada".into());
        let data = submission_data(&schema(), &values);
        assert_eq!(data.len(), 3);
        assert_eq!(data.get("Age").unwrap(), "");
        assert_eq!(data.get("Colors").unwrap(), "");
    }
}
