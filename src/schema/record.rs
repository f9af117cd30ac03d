//! Plain-record form of a schema, used for persistence and interchange
//!
//! Record keys: id, name, type, options, required, minLength, maxLength,
//! errorMessage, value. `value` is always written empty and ignored on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use super::types::{default_error_message_for, Field, FieldId, FieldKind, FieldType};

/// One field as a plain record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    pub id: FieldId,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<u32>,
    #[serde(default)]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default)]
    pub value: String,
}

impl From<&Field> for FieldRecord {
    fn from(field: &Field) -> Self {
        Self {
            id: field.id,
            name: field.name.clone(),
            field_type: field.field_type().type_name().to_string(),
            options: field.options().to_vec(),
            required: field.required,
            min_length: field.min_length(),
            max_length: field.max_length(),
            error_message: Some(field.error_message.clone()),
            value: String::new(),
        }
    }
}

impl TryFrom<FieldRecord> for Field {
    type Error = SchemaError;

    fn try_from(record: FieldRecord) -> SchemaResult<Self> {
        let field_type: FieldType = record
            .field_type
            .parse()
            .map_err(|_| SchemaError::unknown_field_type(record.id, &record.field_type))?;

        let error_message = record
            .error_message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default_error_message_for(&record.field_type).to_string());

        Ok(Field {
            id: record.id,
            name: record.name,
            kind: FieldKind::from_parts(
                field_type,
                record.options,
                record.min_length,
                record.max_length,
            ),
            required: record.required,
            error_message,
        })
    }
}

/// Whole-schema document: ordered field records plus export time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
    /// Counter at save time; may exceed every id in `fields`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<FieldId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FormDocument {
    /// Parse a document from JSON text
    pub fn from_json_str(s: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Render the document as pretty JSON text
    pub fn to_json_string(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
