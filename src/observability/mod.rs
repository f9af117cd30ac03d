//! Observability for formsmith
//!
//! Structured JSON-lines logging of typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only: logging never changes an outcome
//! 2. Synchronous, no background threads
//! 3. Deterministic line layout
//!
//! # Usage
//!
//! ```ignore
//! use formsmith::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::FieldAdded, &[("field_id", "3"), ("name", "Email")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields at the event's severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Only verifies no panic
        log_event_with_fields(Event::StoreOpened, &[]);
        log_event_with_fields(Event::FieldRejected, &[("reason", "Field name is required")]);
    }
}
