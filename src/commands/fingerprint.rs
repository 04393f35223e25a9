//! Fingerprint command implementation.

use super::models::FingerprintArgs;
use crate::cli::InvocationContext;
use crate::fingerprint::{fingerprint_capture, fingerprint_layout};
use crate::output::CommandOutput;
use crate::parser::load_capture;
use crate::utils::error::StructuredError;
use serde_json::Value;

/// Execute the fingerprint command
pub fn execute_fingerprint(ctx: &InvocationContext) -> Result<CommandOutput, StructuredError> {
    let args = FingerprintArgs::scan(&ctx.command_args);
    let path = args
        .path
        .ok_or_else(|| StructuredError::invalid_args("Missing capture file path"))?;

    let capture = load_capture(&path)?;
    let fingerprint = if args.layout_only {
        fingerprint_layout(&capture)
    } else {
        fingerprint_capture(&capture)
    };

    if ctx.json_mode {
        Ok(CommandOutput::field("fingerprint", Value::String(fingerprint)))
    } else {
        Ok(CommandOutput::Text(fingerprint))
    }
}
