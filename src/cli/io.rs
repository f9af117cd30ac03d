//! JSON I/O handling for the CLI
//!
//! - Input: at most one JSON object on stdin
//! - Output: one JSON line on stdout per command
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde_json::{Map, Value};

use super::errors::{CliError, CliResult};

/// Read a JSON object from stdin
pub fn read_request() -> CliResult<Map<String, Value>> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_request(&input)
}

/// Parse request text, which must hold a single JSON object
pub fn parse_request(input: &str) -> CliResult<Map<String, Value>> {
    if input.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }

    match serde_json::from_str(input)? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::invalid_input(
            "Expected a JSON object mapping field names to values",
        )),
    }
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_line(&serde_json::json!({
        "status": "ok",
        "data": data
    }))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_line(&serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    }))
}

/// Write raw text to stdout, ending with a newline
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

fn write_line(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
