//! Capture diffing.
//!
//! This module compares two captures (A = before, B = after), pairs their
//! nodes and reports what was added, removed, moved, resized or otherwise
//! changed.
//!
//! # Example
//! ```ignore
//! use websketch_cli::diff::{diff_captures, format_diff, DiffOptions};
//! use websketch_cli::parser::load_capture;
//!
//! let a = load_capture("before.json")?;
//! let b = load_capture("after.json")?;
//! let result = diff_captures(&a, &b, &DiffOptions::default());
//! println!("{}", format_diff(&result));
//! ```

mod engine;
pub mod matcher;
mod output;
mod schema;

// Public API exports
pub use engine::diff_captures;
pub use output::{format_diff, format_diff_json};
pub use schema::{Change, ChangeCounts, ChangeKind, DiffOptions, DiffResult, DiffSummary};
