//! CLI command implementations
//!
//! Every command except `init` loads the configuration, opens the store and
//! restores the saved schema. Schema-changing commands save it again after a
//! successful change.
//!
//! Command functions return the response data; only `run_command` touches
//! stdin and stdout.

use std::fs;
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::export::{export_csv, export_json, ExportFormat};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::schema::{
    check_draft, check_update, parse_options, FieldDraft, FieldRecord, FieldUpdate, FormSchema,
};
use crate::storage::FormStore;
use crate::validation::{
    collect_values, submission_data, validate_field_live, FormValidation, FormValidator,
};

use super::args::{
    AddFieldArgs, Cli, Command, Direction, FieldAction, SubmissionsAction, UpdateFieldArgs,
};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response, write_text};

/// Loaded configuration plus the store it points at
struct Context {
    store: FormStore,
}

impl Context {
    fn load(config_path: &Path) -> CliResult<Self> {
        let config = Config::load(config_path)?;
        Logger::set_min_severity(config.severity()?);
        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("config", config_path.display().to_string().as_str()),
                ("data_dir", config.data_dir.as_str()),
            ],
        );

        let store = FormStore::open(&config)?;
        Ok(Self { store })
    }

    fn schema(&self) -> CliResult<FormSchema> {
        Ok(self.store.load_schema_or_default()?)
    }
}

/// Parse arguments, run the command and report a failure on stdout
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli).map_err(|e| {
        log_event_with_fields(
            Event::CommandFailed,
            &[("code", e.code_str()), ("message", e.message())],
        );
        // The error itself is still returned if the response can't be written
        let _ = write_error(e.code_str(), e.message());
        e
    })
}

/// Run the appropriate command based on CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = cli.config;
    let data = match cli.command {
        Command::Init { data_dir } => init(&config, &data_dir)?,
        Command::Field { action } => field(&Context::load(&config)?, action)?,
        Command::Validate => {
            let ctx = Context::load(&config)?;
            validate(&ctx, &read_request()?)?
        }
        Command::Check { field: name, value } => {
            check(&Context::load(&config)?, &name, value.as_deref())?
        }
        Command::Submit => {
            let ctx = Context::load(&config)?;
            submit(&ctx, &read_request()?)?
        }
        Command::Submissions { action } => submissions(&Context::load(&config)?, action)?,
        Command::Export { format, output } => {
            let ctx = Context::load(&config)?;
            match output {
                Some(path) => export_to_file(&ctx, format.into(), &path)?,
                None => return write_text(&export(&ctx, format.into())?),
            }
        }
    };
    write_response(data)
}

/// Write a new configuration file and create its data directory
pub fn init(config_path: &Path, data_dir: &str) -> CliResult<Value> {
    let config = Config::new(data_dir);
    config.validate()?;
    config.write_new(config_path)?;
    let store = FormStore::open(&config)?;

    Ok(json!({
        "config": config_path.display().to_string(),
        "data_dir": store.data_dir().display().to_string(),
    }))
}

fn field(ctx: &Context, action: FieldAction) -> CliResult<Value> {
    let mut schema = ctx.schema()?;

    match action {
        FieldAction::Add(args) => add_field(ctx, &mut schema, args),
        FieldAction::Update(args) => update_field(ctx, &mut schema, args),
        FieldAction::Remove { id } => {
            let removed = schema
                .remove_field(id)
                .ok_or_else(|| CliError::field_not_found(id))?;
            ctx.store.save_schema(&schema)?;
            log_event_with_fields(
                Event::FieldRemoved,
                &[("field_id", id.to_string().as_str()), ("name", removed.name())],
            );
            Ok(json!({ "removed": FieldRecord::from(&removed) }))
        }
        FieldAction::Move { id, direction } => {
            if schema.get_field(id).is_none() {
                return Err(CliError::field_not_found(id));
            }
            let moved = match direction {
                Direction::Up => schema.move_field_up(id),
                Direction::Down => schema.move_field_down(id),
            };
            if moved {
                ctx.store.save_schema(&schema)?;
                let direction_name = match direction {
                    Direction::Up => "up",
                    Direction::Down => "down",
                };
                log_event_with_fields(
                    Event::FieldMoved,
                    &[
                        ("direction", direction_name),
                        ("field_id", id.to_string().as_str()),
                    ],
                );
            }
            let order: Vec<u64> = schema.fields().iter().map(|f| f.id()).collect();
            Ok(json!({ "moved": moved, "order": order }))
        }
        FieldAction::List => Ok(schema_json(&schema)),
        FieldAction::Clear => {
            let count = schema.len();
            schema.clear_fields();
            ctx.store.clear_schema()?;
            log_event_with_fields(
                Event::FieldsCleared,
                &[("removed", count.to_string().as_str())],
            );
            Ok(json!({ "removed": count }))
        }
    }
}

fn add_field(ctx: &Context, schema: &mut FormSchema, args: AddFieldArgs) -> CliResult<Value> {
    let draft = FieldDraft {
        name: args.name.trim().to_string(),
        field_type: args.field_type.into(),
        options: args.options.as_deref().map(parse_options).unwrap_or_default(),
        required: args.required,
        min_length: args.min_length,
        max_length: args.max_length,
        error_message: args.error_message,
    };

    if let Err(e) = check_draft(schema, &draft) {
        log_event_with_fields(Event::FieldRejected, &[("reason", e.to_string().as_str())]);
        return Err(e.into());
    }

    let record = FieldRecord::from(schema.add_field(draft)?);
    ctx.store.save_schema(schema)?;
    log_event_with_fields(
        Event::FieldAdded,
        &[
            ("field_id", record.id.to_string().as_str()),
            ("name", record.name.as_str()),
            ("type", record.field_type.as_str()),
        ],
    );
    Ok(json!({ "field": record }))
}

fn update_field(ctx: &Context, schema: &mut FormSchema, args: UpdateFieldArgs) -> CliResult<Value> {
    let id = args.id;
    let update = FieldUpdate {
        name: args.name.map(|n| n.trim().to_string()),
        field_type: args.field_type.map(Into::into),
        options: args.options.as_deref().map(parse_options),
        required: args.required,
        min_length: if args.clear_min_length {
            Some(None)
        } else {
            args.min_length.map(Some)
        },
        max_length: if args.clear_max_length {
            Some(None)
        } else {
            args.max_length.map(Some)
        },
        error_message: args.error_message,
    };

    if let Err(e) = check_update(schema, id, &update) {
        log_event_with_fields(
            Event::FieldRejected,
            &[
                ("field_id", id.to_string().as_str()),
                ("reason", e.to_string().as_str()),
            ],
        );
        return Err(e.into());
    }

    let record = schema
        .update_field(id, update)
        .map(FieldRecord::from)
        .ok_or_else(|| CliError::field_not_found(id))?;
    ctx.store.save_schema(schema)?;
    log_event_with_fields(Event::FieldUpdated, &[("field_id", id.to_string().as_str())]);
    Ok(json!({ "field": record }))
}

fn validate(ctx: &Context, input: &Map<String, Value>) -> CliResult<Value> {
    let schema = ctx.schema()?;
    let values = collect_values(&schema, input);

    let result = FormValidator::new(&schema).validate_form(&values);
    log_validation(&result);
    Ok(serde_json::to_value(&result)?)
}

fn check(ctx: &Context, field_name: &str, value: Option<&str>) -> CliResult<Value> {
    let schema = ctx.schema()?;
    let field = schema
        .field_by_name(field_name)
        .ok_or_else(|| CliError::field_name_not_found(field_name))?;

    let error = validate_field_live(field, value);
    Ok(json!({
        "field": field.name(),
        "valid": error.is_none(),
        "error": error,
    }))
}

fn submit(ctx: &Context, input: &Map<String, Value>) -> CliResult<Value> {
    let schema = ctx.schema()?;
    let values = collect_values(&schema, input);

    let result = FormValidator::new(&schema).validate_form(&values);
    log_validation(&result);

    if !result.is_valid {
        log_event_with_fields(
            Event::SubmissionRejected,
            &[("errors", result.error_count().to_string().as_str())],
        );
        return Ok(json!({
            "accepted": false,
            "errors": result.errors,
        }));
    }

    let submission = ctx.store.save_submission(submission_data(&schema, &values))?;
    Ok(json!({
        "accepted": true,
        "submission": submission,
    }))
}

fn submissions(ctx: &Context, action: SubmissionsAction) -> CliResult<Value> {
    match action {
        SubmissionsAction::List => {
            let all = ctx.store.submissions()?;
            Ok(json!({ "count": all.len(), "submissions": all }))
        }
        SubmissionsAction::Clear => {
            ctx.store.clear_submissions()?;
            Ok(json!({ "cleared": true }))
        }
    }
}

/// Renders every stored submission in `format`
fn export(ctx: &Context, format: ExportFormat) -> CliResult<String> {
    let schema = ctx.schema()?;
    let all = ctx.store.submissions()?;

    let text = match format {
        ExportFormat::Csv => export_csv(&schema, &all)?,
        ExportFormat::Json => export_json(&all)?,
    };

    log_event_with_fields(
        Event::ExportCompleted,
        &[
            ("format", format.file_name()),
            ("submissions", all.len().to_string().as_str()),
        ],
    );
    Ok(text)
}

fn export_to_file(ctx: &Context, format: ExportFormat, path: &Path) -> CliResult<Value> {
    let text = export(ctx, format)?;
    fs::write(path, &text)
        .map_err(|e| CliError::io_error(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(json!({
        "path": path.display().to_string(),
        "bytes": text.len(),
    }))
}

fn schema_json(schema: &FormSchema) -> Value {
    let fields: Vec<FieldRecord> = schema.fields().iter().map(FieldRecord::from).collect();
    json!({ "fields": fields, "nextId": schema.next_id() })
}

fn log_validation(result: &FormValidation) {
    log_event_with_fields(
        Event::FormValidated,
        &[
            ("errors", result.error_count().to_string().as_str()),
            ("valid", if result.is_valid { "true" } else { "false" }),
        ],
    );
}
