//! CSV rendering of submissions

use chrono::{DateTime, Utc};

use super::{ExportError, ExportResult};
use crate::schema::FormSchema;
use crate::storage::Submission;

/// Timestamp layout used in the first CSV column
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Quotes a value containing a comma, quote or line break, doubling inner
/// quotes. Other values are returned unchanged.
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders submissions as CSV with one column per schema field.
///
/// Fields missing from a submission give empty cells; values for names no
/// longer in the schema are left out. Rows are separated by `\n`.
pub fn export_csv(schema: &FormSchema, submissions: &[Submission]) -> ExportResult<String> {
    if submissions.is_empty() {
        return Err(ExportError::NoSubmissions);
    }

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name()).collect();

    let header = std::iter::once("Timestamp".to_string())
        .chain(names.iter().map(|n| escape_csv(n)))
        .collect::<Vec<_>>()
        .join(",");

    let mut rows = Vec::with_capacity(submissions.len() + 1);
    rows.push(header);

    for submission in submissions {
        let row = std::iter::once(escape_csv(&format_timestamp(&submission.timestamp)))
            .chain(names.iter().map(|n| escape_csv(submission.value(n))))
            .collect::<Vec<_>>()
            .join(",");
        rows.push(row);
    }

    Ok(rows.join("\n"))
}
