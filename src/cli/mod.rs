//! CLI module for formsmith
//!
//! Provides command-line interface for:
//! - init: Write a configuration file and create the data directory
//! - field: Build and edit the form schema
//! - validate / check: Validate values without storing them
//! - submit: Validate and store a submission
//! - submissions / export: Inspect, clear and export stored submissions

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_request, read_request, write_error, write_response};
