//! Checks a caller runs before adding or changing a field
//!
//! `FormSchema` accepts any definition. A builder front end is expected to
//! reject the following before calling into it:
//! - an empty (or all-whitespace) name
//! - a choice type (select, radio, checkbox) without options
//! - a name already used by another field, since names key submitted values
//! - a text field whose minimum length exceeds its maximum length

use thiserror::Error;

use super::form::FormSchema;
use super::types::{FieldDraft, FieldId, FieldType, FieldUpdate};

/// Reasons a field definition is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("Please enter a field name")]
    EmptyName,

    #[error("Please enter options for this field type ({0})")]
    MissingOptions(FieldType),

    #[error("A field named '{0}' already exists")]
    DuplicateName(String),

    #[error("Minimum length {min} is greater than maximum length {max}")]
    InvertedLengthBounds { min: u32, max: u32 },
}

/// Splits comma-separated option text, trimming entries and dropping empty ones.
pub fn parse_options(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(String::from)
        .collect()
}

/// Checks a draft before `FormSchema::add_field`.
pub fn check_draft(schema: &FormSchema, draft: &FieldDraft) -> Result<(), DefinitionError> {
    check_definition(
        schema,
        None,
        &draft.name,
        draft.field_type,
        &draft.options,
        draft.min_length,
        draft.max_length,
    )
}

/// Checks an update before `FormSchema::update_field`.
///
/// The update is checked as merged into the current field. An unknown id
/// passes, since the update itself will be a no-op.
pub fn check_update(
    schema: &FormSchema,
    id: FieldId,
    update: &FieldUpdate,
) -> Result<(), DefinitionError> {
    let Some(field) = schema.get_field(id) else {
        return Ok(());
    };

    let name = update.name.as_deref().unwrap_or(field.name());
    let field_type = update.field_type.unwrap_or(field.field_type());
    let options = update.options.as_deref().unwrap_or(field.options());
    let min_length = update.min_length.unwrap_or(field.min_length());
    let max_length = update.max_length.unwrap_or(field.max_length());

    check_definition(
        schema,
        Some(id),
        name,
        field_type,
        options,
        min_length,
        max_length,
    )
}

fn check_definition(
    schema: &FormSchema,
    editing: Option<FieldId>,
    name: &str,
    field_type: FieldType,
    options: &[String],
    min_length: Option<u32>,
    max_length: Option<u32>,
) -> Result<(), DefinitionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DefinitionError::EmptyName);
    }

    if field_type.requires_options() && options.iter().all(|o| o.trim().is_empty()) {
        return Err(DefinitionError::MissingOptions(field_type));
    }

    let taken = schema
        .fields()
        .iter()
        .any(|f| Some(f.id()) != editing && f.name().trim() == name);
    if taken {
        return Err(DefinitionError::DuplicateName(name.to_string()));
    }

    if field_type == FieldType::Text {
        // 0 means unset, matching FieldKind::from_parts
        if let (Some(min), Some(max)) = (
            min_length.filter(|n| *n > 0),
            max_length.filter(|n| *n > 0),
        ) {
            if min > max {
                return Err(DefinitionError::InvertedLengthBounds { min, max });
            }
        }
    }

    Ok(())
}
