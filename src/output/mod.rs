//! Output writers for command results.
//!
//! This module handles:
//! - The text / JSON-envelope output protocol
//! - Writing JSON artifacts to disk

pub mod envelope;
pub mod json;

// Re-export main functions
pub use envelope::{emit_error, emit_success, error_line, success_line, CommandOutput};
pub use json::write_json_pretty;
