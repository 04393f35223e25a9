//! Command router and single dispatch point.
//!
//! Every run ends here: either a handler result goes through the output
//! protocol with exit code 0, or a [`StructuredError`] is rendered and its
//! kind picks the exit code. Panics inside handlers are folded into
//! `INTERNAL` so nothing escapes unclassified.

pub mod args;
pub mod usage;

pub use args::{parse_invocation, Invocation, InvocationContext};
pub use usage::usage;

use crate::commands::{dispatch, CommandName};
use crate::output::{emit_error, emit_success};
use crate::utils::config::{CLI_NAME, VERSION};
use crate::utils::error::{ErrorKind, StructuredError};
use log::debug;
use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

/// Run the CLI against `args` (program name excluded) and return the exit code
///
/// # Arguments
/// * `args` - Raw arguments after the program name
/// * `out` - Standard output
/// * `err` - Standard error (unused in JSON mode)
pub fn run<O: Write, E: Write>(args: &[String], out: &mut O, err: &mut E) -> i32 {
    let ctx = match parse_invocation(args) {
        Invocation::Help => return print_text(out, &usage()),
        Invocation::Version => return print_text(out, &format!("{} v{}", CLI_NAME, VERSION)),
        Invocation::Run(ctx) => ctx,
    };

    let result = match CommandName::resolve(&ctx.command) {
        Some(command) => panic::catch_unwind(AssertUnwindSafe(|| dispatch(command, &ctx)))
            .unwrap_or_else(|payload| Err(panic_error(payload))),
        None => {
            if !ctx.json_mode {
                let _ = writeln!(out, "{}", usage());
            }
            Err(StructuredError::invalid_args(format!(
                "Unknown command: {}",
                ctx.command
            )))
        }
    };

    match result {
        Ok(output) => match emit_success(output, out) {
            Ok(()) => 0,
            Err(e) => {
                debug!("Failed to write result: {}", e);
                ErrorKind::IoError.exit_code()
            }
        },
        Err(error) => {
            debug!("Command failed: {}", error);
            if let Err(e) = emit_error(&error, ctx.json_mode, out, err) {
                debug!("Failed to write error: {}", e);
            }
            error.exit_code()
        }
    }
}

fn print_text<O: Write>(out: &mut O, text: &str) -> i32 {
    match writeln!(out, "{}", text.trim_end()) {
        Ok(()) => 0,
        Err(_) => ErrorKind::IoError.exit_code(),
    }
}

fn panic_error(payload: Box<dyn Any + Send>) -> StructuredError {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    StructuredError::internal(format!("Unexpected failure: {}", detail))
}
