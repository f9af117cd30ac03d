//! Submission export
//!
//! - CSV: `Timestamp` column followed by one column per field in schema order
//! - JSON: the stored submission list, pretty printed

mod csv;

pub use self::csv::{escape_csv, export_csv, format_timestamp};

use thiserror::Error;

use crate::storage::Submission;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No submissions to export")]
    NoSubmissions,

    #[error("Failed to encode submissions: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Conventional download file name
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "form-submissions.csv",
            ExportFormat::Json => "form-submissions.json",
        }
    }
}

/// Renders submissions as a 2-space indented JSON array.
pub fn export_json(submissions: &[Submission]) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(submissions)?)
}
