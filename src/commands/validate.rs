//! Validate command implementation.
//!
//! Loads a capture and reports its key fields. Loading already performs
//! full schema validation, so success here means the file is usable by
//! every other command.

use super::models::ValidateArgs;
use crate::cli::InvocationContext;
use crate::output::CommandOutput;
use crate::parser::load_capture;
use crate::utils::error::StructuredError;
use log::info;
use serde_json::Value;

/// Execute the validate command
///
/// # Errors
/// * `INVALID_ARGS` - no capture path given
/// * Any load error for the capture file
pub fn execute_validate(ctx: &InvocationContext) -> Result<CommandOutput, StructuredError> {
    let args = ValidateArgs::scan(&ctx.command_args);
    let path = args
        .path
        .ok_or_else(|| StructuredError::invalid_args("Missing capture file path"))?;

    let capture = load_capture(&path)?;
    info!("Validated capture {} ({} nodes)", path, capture.node_count());

    if ctx.json_mode {
        return Ok(CommandOutput::field("valid", Value::Bool(true)));
    }

    Ok(CommandOutput::Text(format!(
        "✓ Valid capture: {}\n  Version: {}\n  URL: {}\n  Viewport: {}x{}\n  Nodes: {}",
        path,
        capture.version,
        capture.url,
        capture.viewport.w_px,
        capture.viewport.h_px,
        capture.node_count()
    )))
}
