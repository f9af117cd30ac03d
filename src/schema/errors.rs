//! Schema error types
//!
//! Error codes:
//! - FORM_UNKNOWN_FIELD_TYPE: a stored record names a type outside the closed set
//! - FORM_MALFORMED_DOCUMENT: a stored document cannot be decoded at all
//! - FORM_ID_OVERFLOW: no id is left to assign after the largest one in use
//!
//! Operations on a missing field id are not errors; see `FormSchema`.

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Record carries an unrecognised `type`
    FormUnknownFieldType,
    /// Document is not a valid schema document
    FormMalformedDocument,
    /// The id counter cannot move past the largest id
    FormIdOverflow,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::FormUnknownFieldType => "FORM_UNKNOWN_FIELD_TYPE",
            SchemaErrorCode::FormMalformedDocument => "FORM_MALFORMED_DOCUMENT",
            SchemaErrorCode::FormIdOverflow => "FORM_ID_OVERFLOW",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with context
#[derive(Debug)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    /// Id of the offending record, if known
    field_id: Option<u64>,
}

impl SchemaError {
    /// Create an unknown field type error
    pub fn unknown_field_type(field_id: u64, type_name: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::FormUnknownFieldType,
            message: format!(
                "Field {} has unknown type '{}'",
                field_id,
                type_name.into()
            ),
            field_id: Some(field_id),
        }
    }

    /// Create a malformed document error
    pub fn malformed_document(reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::FormMalformedDocument,
            message: format!("Malformed form document: {}", reason.into()),
            field_id: None,
        }
    }

    /// Create an id overflow error for a field whose id has no successor
    pub fn id_overflow(field_id: u64) -> Self {
        Self {
            code: SchemaErrorCode::FormIdOverflow,
            message: format!("No field id left after {}", field_id),
            field_id: Some(field_id),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending field id if applicable
    pub fn field_id(&self) -> Option<u64> {
        self.field_id
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        Self::malformed_document(e.to_string())
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
