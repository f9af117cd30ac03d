//! CLI argument definitions using clap
//!
//! Commands:
//! - formsmith init
//! - formsmith field add|update|remove|move|list|clear
//! - formsmith validate | check | submit
//! - formsmith submissions list|clear
//! - formsmith export --format csv|json

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::export::ExportFormat;
use crate::schema::FieldType;

/// formsmith - build, fill and validate data-entry forms
#[derive(Parser, Debug)]
#[command(name = "formsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a configuration file and create the data directory
    Init {
        /// Directory for the schema and submission files
        #[arg(long, default_value = "./formsmith-data")]
        data_dir: String,
    },

    /// Edit the form's fields
    Field {
        #[command(subcommand)]
        action: FieldAction,
    },

    /// Validate a value map read from stdin
    Validate,

    /// Check one field's value as it would be checked while typing
    Check {
        /// Field name
        #[arg(long)]
        field: String,

        /// Value to check; omit for "no value"
        #[arg(long)]
        value: Option<String>,
    },

    /// Validate a value map from stdin and store it if valid
    Submit,

    /// Inspect or clear stored submissions
    Submissions {
        #[command(subcommand)]
        action: SubmissionsAction,
    },

    /// Export stored submissions
    Export {
        #[arg(long, value_enum)]
        format: FormatArg,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FieldAction {
    /// Append a new field
    Add(AddFieldArgs),

    /// Change attributes of an existing field
    Update(UpdateFieldArgs),

    /// Delete a field
    Remove {
        #[arg(long)]
        id: u64,
    },

    /// Swap a field with its neighbour
    Move {
        #[arg(long)]
        id: u64,

        #[arg(long, value_enum)]
        direction: Direction,
    },

    /// Print all fields in form order
    List,

    /// Delete every field and reset ids
    Clear,
}

#[derive(Args, Debug)]
pub struct AddFieldArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long = "type", value_enum, default_value = "text")]
    pub field_type: TypeArg,

    /// Comma-separated choices for select, radio and checkbox fields
    #[arg(long)]
    pub options: Option<String>,

    #[arg(long)]
    pub required: bool,

    #[arg(long)]
    pub min_length: Option<u32>,

    #[arg(long)]
    pub max_length: Option<u32>,

    /// Message shown when the field fails validation
    #[arg(long)]
    pub error_message: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateFieldArgs {
    #[arg(long)]
    pub id: u64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long = "type", value_enum)]
    pub field_type: Option<TypeArg>,

    /// Comma-separated choices for select, radio and checkbox fields
    #[arg(long)]
    pub options: Option<String>,

    #[arg(long)]
    pub required: Option<bool>,

    #[arg(long, conflicts_with = "clear_min_length")]
    pub min_length: Option<u32>,

    #[arg(long, conflicts_with = "clear_max_length")]
    pub max_length: Option<u32>,

    #[arg(long)]
    pub clear_min_length: bool,

    #[arg(long)]
    pub clear_max_length: bool,

    /// Message shown when the field fails validation; empty restores the default
    #[arg(long)]
    pub error_message: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SubmissionsAction {
    /// Print stored submissions
    List,
    /// Delete all stored submissions
    Clear,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeArg {
    Text,
    Email,
    Number,
    Select,
    Radio,
    Checkbox,
}

impl From<TypeArg> for FieldType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Text => FieldType::Text,
            TypeArg::Email => FieldType::Email,
            TypeArg::Number => FieldType::Number,
            TypeArg::Select => FieldType::Select,
            TypeArg::Radio => FieldType::Radio,
            TypeArg::Checkbox => FieldType::Checkbox,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
