//! Render command implementation.

use super::models::RenderArgs;
use crate::cli::InvocationContext;
use crate::output::CommandOutput;
use crate::parser::load_capture;
use crate::render::{render_ascii, render_for_llm, render_structure, RenderOptions};
use crate::utils::error::StructuredError;
use log::debug;
use serde_json::Value;

/// Execute the render command
///
/// `--llm` is checked before `--structure`, so it wins when both are given.
pub fn execute_render(ctx: &InvocationContext) -> Result<CommandOutput, StructuredError> {
    let args = RenderArgs::scan(&ctx.command_args);
    let path = args
        .path
        .as_deref()
        .ok_or_else(|| StructuredError::invalid_args("Missing capture file path"))?;

    let capture = load_capture(path)?;
    debug!("Render args: {:?}", args);

    let ascii = if args.llm {
        render_for_llm(&capture)
    } else if args.structure {
        render_structure(&capture, args.width, args.height)
    } else {
        render_ascii(
            &capture,
            RenderOptions {
                width: args.width,
                height: args.height,
            },
        )
    };

    if ctx.json_mode {
        Ok(CommandOutput::field("ascii", Value::String(ascii)))
    } else {
        Ok(CommandOutput::Text(ascii))
    }
}
