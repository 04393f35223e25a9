//! Output protocol for command results.
//!
//! Text mode writes human-oriented results to stdout and errors to stderr.
//! JSON mode writes exactly one JSON line to stdout for every outcome.

use crate::utils::error::StructuredError;
use serde_json::{Map, Value};
use std::io::{self, Write};

/// What a command handler produced
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Printed to stdout as-is (text mode, or the legacy `diff --json`)
    Text(String),

    /// Fields merged into the `{"ok": true, ...}` envelope
    Json(Map<String, Value>),
}

impl CommandOutput {
    /// Envelope with a single result field
    pub fn field(key: &str, value: Value) -> Self {
        let mut fields = Map::new();
        fields.insert(key.to_string(), value);
        Self::Json(fields)
    }
}

/// Build the one-line success envelope
pub fn success_line(fields: Map<String, Value>) -> String {
    let mut envelope = Map::new();
    envelope.insert("ok".to_string(), Value::Bool(true));
    envelope.extend(fields);
    Value::Object(envelope).to_string()
}

/// Build the one-line failure envelope
pub fn error_line(err: &StructuredError) -> String {
    let error = serde_json::to_value(err).unwrap_or_else(|_| Value::String(err.to_string()));
    serde_json::json!({ "ok": false, "error": error }).to_string()
}

/// Write a successful result
///
/// # Errors
/// Only when stdout itself cannot be written
pub fn emit_success<O: Write>(output: CommandOutput, out: &mut O) -> io::Result<()> {
    match output {
        CommandOutput::Text(text) => writeln!(out, "{}", text),
        CommandOutput::Json(fields) => writeln!(out, "{}", success_line(fields)),
    }
}

/// Write a failure to stdout (JSON mode) or stderr (text mode)
pub fn emit_error<O: Write, E: Write>(
    err: &StructuredError,
    json_mode: bool,
    out: &mut O,
    errout: &mut E,
) -> io::Result<()> {
    if json_mode {
        writeln!(out, "{}", error_line(err))
    } else {
        writeln!(errout, "{}", err.to_text())
    }
}
