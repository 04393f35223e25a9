//! Declarative CLI surface.
//!
//! The commands, aliases and flags are declared with clap so the usage text
//! stays in sync with what the router accepts. Arguments are not parsed
//! through this definition: handlers run a tolerant scan instead, so the
//! parsed fields are never read outside the tests below.
#![allow(dead_code)]

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Exit Codes:
  0  success (including --help and --version)
  1  invalid JSON, invalid capture, invalid arguments, internal error
  2  file not found, permission denied, other I/O error

With --json every outcome, errors included, is one JSON line on stdout:
  {\"ok\":true,...} or {\"ok\":false,\"error\":{\"code\":...,\"message\":...}}

Examples:
  websketch validate capture.json
  websketch render --llm capture.json
  websketch render --width 120 --height 40 capture.json
  websketch fingerprint --layout-only capture.json
  websketch diff before.json after.json
  websketch --json bundle before.json after.json -o bundle.json";

/// WebSketch CLI - validate, render, fingerprint, diff and bundle UI captures
#[derive(Parser, Debug)]
#[command(
    name = "websketch",
    disable_version_flag = true,
    disable_help_subcommand = true,
    flatten_help = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Emit a single-line JSON envelope on stdout for every outcome
    #[arg(long)]
    json: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that a capture file is valid
    Validate {
        /// Capture file
        capture: PathBuf,
    },

    /// Render a capture as ASCII art
    #[command(visible_aliases = ["render-ascii", "ascii"])]
    Render {
        /// Capture file
        capture: PathBuf,

        /// Grid width
        #[arg(long, default_value_t = 80)]
        width: usize,

        /// Grid height
        #[arg(long, default_value_t = 24)]
        height: usize,

        /// LLM-oriented document with metadata (wins over --structure)
        #[arg(long)]
        llm: bool,

        /// Minimal structure-only view
        #[arg(long)]
        structure: bool,
    },

    /// Compute a structural fingerprint
    #[command(visible_alias = "fp")]
    Fingerprint {
        /// Capture file
        capture: PathBuf,

        /// Ignore text content
        #[arg(long)]
        layout_only: bool,
    },

    /// Compare two captures (A = before, B = after)
    Diff {
        /// "Before" capture
        a: PathBuf,

        /// "After" capture
        b: PathBuf,

        /// Ignore text and name changes
        #[arg(long)]
        layout_only: bool,

        /// Minimum similarity (0-1) to match nodes
        #[arg(long, default_value_t = 0.5)]
        threshold: f64,

        /// Print the raw diff as pretty JSON (ignored with a leading --json)
        #[arg(long)]
        json: bool,
    },

    /// Package one or two captures (plus their diff) into one artifact
    Bundle {
        /// One or two capture files
        #[arg(num_args = 1..=2, required = true)]
        captures: Vec<PathBuf>,

        /// Write the bundle to a file instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
}

/// Rendered usage text
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
