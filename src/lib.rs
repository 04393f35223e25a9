//! WebSketch CLI
//!
//! Validate, render, fingerprint, diff and bundle WebSketch UI captures.
//!
//! This crate provides the core implementation for the `websketch` CLI
//! tool: the capture loader, the error taxonomy with its exit-code mapping,
//! the text / JSON output protocol, the command router and the in-crate
//! capture engines the commands call into.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install websketch-cli
//! websketch --help
//! ```
//!
//! The whole CLI can also be driven in-process:
//!
//! ```ignore
//! let args = vec!["--json".to_string(), "validate".to_string(), "page.json".to_string()];
//! let code = websketch_cli::cli::run(&args, &mut std::io::stdout(), &mut std::io::stderr());
//! ```

pub mod cli;
pub mod commands;
pub mod diff;
pub mod fingerprint;
pub mod output;
pub mod parser;
pub mod render;
pub mod utils;
