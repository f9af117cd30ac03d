//! Form schema subsystem
//!
//! A schema is the ordered list of fields that make up a form.
//!
//! # Design Principles
//!
//! - Field ids are assigned by the schema alone and never reused
//! - Field order changes only through explicit moves
//! - Field types form a closed set; each type carries only its own attributes
//! - Schema operations do not validate definitions (see `definition`)

pub mod definition;
mod errors;
mod form;
mod record;
mod types;

pub use definition::{check_draft, check_update, parse_options, DefinitionError};
pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use form::FormSchema;
pub use record::{FieldRecord, FormDocument};
pub use types::{
    default_error_message_for, Field, FieldDraft, FieldId, FieldKind, FieldType, FieldUpdate,
    FALLBACK_ERROR_MESSAGE,
};
