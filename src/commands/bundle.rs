//! Bundle command implementation.
//!
//! The bundle command:
//! 1. Loads one or two captures, in order (first failure aborts)
//! 2. Diffs them with default options when there are exactly two
//! 3. Stamps schema version, tool and creation time
//! 4. Prints the bundle or writes it to the `-o` path

use super::models::{Bundle, BundleArgs};
use crate::cli::InvocationContext;
use crate::diff::{diff_captures, DiffOptions};
use crate::output::{write_json_pretty, CommandOutput};
use crate::parser::{load_capture_document, resolve_path};
use crate::utils::config::{tool_stamp, BUNDLE_SCHEMA_VERSION};
use crate::utils::error::StructuredError;
use anyhow::Context;
use chrono::Utc;
use log::{debug, info};
use serde_json::Value;

/// Execute the bundle command
///
/// # Errors
/// * `INVALID_ARGS` - zero or more than two capture paths
/// * Any load error (nothing is printed or written)
/// * Write errors for the `-o` path
pub fn execute_bundle(ctx: &InvocationContext) -> Result<CommandOutput, StructuredError> {
    let args = BundleArgs::scan(&ctx.command_args);
    if args.paths.is_empty() || args.paths.len() > 2 {
        return Err(StructuredError::invalid_args(
            "bundle requires 1 or 2 capture files",
        ));
    }

    let bundle = assemble_bundle(&args.paths)?;

    if let Some(output) = &args.output {
        let target = resolve_path(output)?;
        let size = write_json_pretty(&bundle, &target).map_err(|e| e.into_structured(&target))?;
        info!("Bundle written to {} ({} bytes)", target.display(), size);

        return Ok(if ctx.json_mode {
            CommandOutput::field("path", Value::String(target.display().to_string()))
        } else {
            CommandOutput::Text(format!("Bundle written to {}", target.display()))
        });
    }

    if ctx.json_mode {
        let value = serde_json::to_value(&bundle).context("Failed to serialize bundle")?;
        Ok(CommandOutput::field("bundle", value))
    } else {
        let text = serde_json::to_string_pretty(&bundle).context("Failed to serialize bundle")?;
        Ok(CommandOutput::Text(text))
    }
}

/// Load captures and build the bundle value
///
/// Diff options are fixed to the defaults so bundles are reproducible.
/// Captures are embedded as the documents that were read, not re-encoded
/// from the typed model.
pub fn assemble_bundle(paths: &[String]) -> Result<Bundle, StructuredError> {
    let loaded = paths
        .iter()
        .map(|p| load_capture_document(p))
        .collect::<Result<Vec<_>, _>>()?;

    let diff = match loaded.as_slice() {
        [a, b] => Some(diff_captures(&a.capture, &b.capture, &DiffOptions::default())),
        _ => None,
    };
    let captures: Vec<Value> = loaded.into_iter().map(|parsed| parsed.raw).collect();
    debug!(
        "Assembled bundle: {} captures, diff={}",
        captures.len(),
        diff.is_some()
    );

    Ok(Bundle {
        schema_version: BUNDLE_SCHEMA_VERSION.to_string(),
        tool: tool_stamp(),
        created_at: Utc::now(),
        captures,
        diff,
    })
}
