//! Form storage subsystem
//!
//! Keeps the form schema and the collected submissions on disk between runs.
//!
//! # Design Principles
//!
//! - Whole-file replacement via write-to-temp and rename
//! - Checksum-verified on every read
//! - Corrupted data halts the operation instead of being repaired silently
//! - A file that was never written reads as "nothing stored"

mod errors;
mod frame;
mod store;
mod submission;

pub use errors::{Severity, StorageError, StorageErrorCode, StorageResult};
pub use frame::compute_checksum;
pub use store::FormStore;
pub use submission::Submission;
