//! Validation engine
//!
//! Checks submitted values against a form schema. Failures are data, not
//! errors: a `FormValidation` maps each failing field name to the message to
//! display.
//!
//! # Principles
//!
//! 1. Pure: a function of (schema snapshot, value map)
//! 2. Same rules for whole-form and live single-field checks
//! 3. Values are passed in; nothing is read from a rendering layer

mod rules;
mod validator;
mod values;

pub use rules::{is_valid_email, is_valid_number, text_length};
pub use validator::{validate_field, validate_field_live, FormValidation, FormValidator};
pub use values::{
    collect_values, join_selected, selected_options, submission_data, ValueMap,
    SELECTION_SEPARATOR,
};
