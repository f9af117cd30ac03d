//! Observable events
//!
//! Every log line names one of these events.

use std::fmt;

use super::logger::Severity;

/// Observable events in formsmith
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration & store
    /// Configuration loaded
    ConfigLoaded,
    /// Data directory opened
    StoreOpened,
    /// Stored data failed its checksum or could not be decoded (FATAL)
    StoreCorruption,

    // Schema persistence
    SchemaSaved,
    SchemaLoaded,
    SchemaCleared,

    // Schema mutations
    FieldAdded,
    FieldUpdated,
    FieldRemoved,
    FieldMoved,
    FieldsCleared,
    /// A definition was refused before reaching the schema
    FieldRejected,

    // Validation & submissions
    FormValidated,
    SubmissionRejected,
    SubmissionSaved,
    SubmissionsCleared,

    // Export
    ExportCompleted,

    /// A command ended with an error
    CommandFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::StoreCorruption => "STORE_CORRUPTION",

            Event::SchemaSaved => "SCHEMA_SAVED",
            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::SchemaCleared => "SCHEMA_CLEARED",

            Event::FieldAdded => "FIELD_ADDED",
            Event::FieldUpdated => "FIELD_UPDATED",
            Event::FieldRemoved => "FIELD_REMOVED",
            Event::FieldMoved => "FIELD_MOVED",
            Event::FieldsCleared => "FIELDS_CLEARED",
            Event::FieldRejected => "FIELD_REJECTED",

            Event::FormValidated => "FORM_VALIDATED",
            Event::SubmissionRejected => "SUBMISSION_REJECTED",
            Event::SubmissionSaved => "SUBMISSION_SAVED",
            Event::SubmissionsCleared => "SUBMISSIONS_CLEARED",

            Event::ExportCompleted => "EXPORT_COMPLETED",

            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::StoreCorruption)
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreCorruption => Severity::Fatal,
            Event::CommandFailed => Severity::Error,
            Event::FieldRejected | Event::SubmissionRejected => Severity::Warn,
            Event::ConfigLoaded | Event::StoreOpened | Event::FormValidated => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
