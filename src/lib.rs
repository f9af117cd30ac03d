//! formsmith - build, fill and validate data-entry forms
//!
//! A form is an ordered schema of typed fields. Values submitted against the
//! schema are validated, stored as submissions and exported as CSV or JSON.

pub mod cli;
pub mod config;
pub mod export;
pub mod observability;
pub mod schema;
pub mod storage;
pub mod validation;
