//! CLI-specific error types
//!
//! Every failure of a command ends the process with a non-zero status after
//! an error response is written.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::schema::{DefinitionError, FieldId, SchemaError};
use crate::storage::StorageError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout/output file)
    IoError,
    /// Request body is not what the command expects
    InvalidInput,
    /// Stored data could not be read or written
    StorageError,
    /// Field definition refused
    InvalidDefinition,
    /// No field with the given id or name
    FieldNotFound,
    /// Export could not be produced
    ExportError,
    /// Schema refused the change
    SchemaError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CLI_CONFIG_ERROR",
            Self::IoError => "CLI_IO_ERROR",
            Self::InvalidInput => "CLI_INVALID_INPUT",
            Self::StorageError => "CLI_STORAGE_ERROR",
            Self::InvalidDefinition => "CLI_INVALID_DEFINITION",
            Self::FieldNotFound => "CLI_FIELD_NOT_FOUND",
            Self::ExportError => "CLI_EXPORT_ERROR",
            Self::SchemaError => "CLI_SCHEMA_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Malformed request
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Unknown field id
    pub fn field_not_found(id: FieldId) -> Self {
        Self::new(
            CliErrorCode::FieldNotFound,
            format!("No field with id {}", id),
        )
    }

    /// Unknown field name
    pub fn field_name_not_found(name: &str) -> Self {
        Self::new(
            CliErrorCode::FieldNotFound,
            format!("No field named '{}'", name),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        Self::new(CliErrorCode::StorageError, e.to_string())
    }
}

impl From<DefinitionError> for CliError {
    fn from(e: DefinitionError) -> Self {
        Self::new(CliErrorCode::InvalidDefinition, e.to_string())
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::new(CliErrorCode::SchemaError, e.to_string())
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        Self::new(CliErrorCode::ExportError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
