//! CLI command implementations.
//!
//! Each command is implemented in its own module. Handlers take the
//! invocation context, scan their own arguments and return either a
//! result for the output protocol or a structured error.

pub mod bundle;
pub mod diff;
pub mod fingerprint;
pub mod models;
pub mod render;
pub mod validate;

use crate::cli::InvocationContext;
use crate::output::CommandOutput;
use crate::utils::error::StructuredError;

// Re-export main command functions
pub use bundle::{assemble_bundle, execute_bundle};
pub use diff::execute_diff;
pub use fingerprint::execute_fingerprint;
pub use models::Bundle;
pub use render::execute_render;
pub use validate::execute_validate;

/// Resolved command, aliases folded in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    Validate,
    Render,
    Fingerprint,
    Diff,
    Bundle,
}

impl CommandName {
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "validate" => Some(Self::Validate),
            "render" | "render-ascii" | "ascii" => Some(Self::Render),
            "fingerprint" | "fp" => Some(Self::Fingerprint),
            "diff" => Some(Self::Diff),
            "bundle" => Some(Self::Bundle),
            _ => None,
        }
    }
}

/// Run one command handler
pub fn dispatch(
    command: CommandName,
    ctx: &InvocationContext,
) -> Result<CommandOutput, StructuredError> {
    match command {
        CommandName::Validate => execute_validate(ctx),
        CommandName::Render => execute_render(ctx),
        CommandName::Fingerprint => execute_fingerprint(ctx),
        CommandName::Diff => execute_diff(ctx),
        CommandName::Bundle => execute_bundle(ctx),
    }
}
