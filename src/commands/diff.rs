//! Diff command implementation.

use super::models::DiffArgs;
use crate::cli::InvocationContext;
use crate::diff::{diff_captures, format_diff, format_diff_json, DiffOptions};
use crate::output::CommandOutput;
use crate::parser::load_capture;
use crate::utils::error::StructuredError;
use anyhow::Context;
use log::info;

/// Execute the diff command
///
/// Output precedence: global JSON envelope, then the legacy local `--json`
/// (raw pretty JSON), then the text report.
///
/// # Errors
/// * `INVALID_ARGS` - not exactly two capture paths
/// * Any load error, for A first and then B
pub fn execute_diff(ctx: &InvocationContext) -> Result<CommandOutput, StructuredError> {
    let args = DiffArgs::scan(&ctx.command_args);
    let [path_a, path_b] = args.paths.as_slice() else {
        return Err(StructuredError::invalid_args(
            "diff requires exactly 2 capture files",
        ));
    };

    let a = load_capture(path_a)?;
    let b = load_capture(path_b)?;

    let opts = DiffOptions {
        include_text: !args.layout_only,
        include_name: !args.layout_only,
        match_threshold: args.threshold,
    };
    let result = diff_captures(&a, &b, &opts);
    info!(
        "Diff {} -> {}: {} changes",
        path_a, path_b, result.summary.total_changes
    );

    if ctx.json_mode {
        let value = serde_json::to_value(&result).context("Failed to serialize diff result")?;
        return Ok(CommandOutput::field("diff", value));
    }

    if args.raw_json {
        let json = format_diff_json(&result).context("Failed to serialize diff result")?;
        return Ok(CommandOutput::Text(json));
    }

    Ok(CommandOutput::Text(format_diff(&result)))
}
