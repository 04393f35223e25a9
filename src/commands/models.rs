//! Per-command argument models.
//!
//! Every command scans its own argument slice left to right: known flags
//! are consumed (with their value token when they take one and one is
//! present), anything that does not start with `-` is a positional path,
//! and unknown flags are skipped.

use crate::diff::DiffResult;
use crate::utils::config::{DEFAULT_HEIGHT, DEFAULT_MATCH_THRESHOLD, DEFAULT_WIDTH};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

/// One step of the tolerant scan
enum Token<'a> {
    Flag(&'a str),
    Positional(&'a str),
}

fn classify(token: &str) -> Token<'_> {
    if token.starts_with('-') {
        Token::Flag(token)
    } else {
        Token::Positional(token)
    }
}

/// Parse the next token as a flag value, keeping `current` when it is
/// missing or unparseable
fn take_value<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a String>,
    current: T,
) -> T {
    tokens
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or(current)
}

/// Arguments for the validate command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidateArgs {
    /// Capture path (last positional wins)
    pub path: Option<String>,
}

impl ValidateArgs {
    pub fn scan(tokens: &[String]) -> Self {
        let mut args = Self::default();
        for token in tokens {
            if let Token::Positional(p) = classify(token) {
                args.path = Some(p.to_string());
            }
        }
        args
    }
}

/// Arguments for the render command
#[derive(Debug, Clone, PartialEq)]
pub struct RenderArgs {
    pub path: Option<String>,
    pub width: usize,
    pub height: usize,
    pub llm: bool,
    pub structure: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            path: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            llm: false,
            structure: false,
        }
    }
}

impl RenderArgs {
    pub fn scan(tokens: &[String]) -> Self {
        let mut args = Self::default();
        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            match classify(token) {
                Token::Flag("--width") => args.width = take_value(&mut iter, args.width),
                Token::Flag("--height") => args.height = take_value(&mut iter, args.height),
                Token::Flag("--llm") => args.llm = true,
                Token::Flag("--structure") => args.structure = true,
                Token::Flag(_) => {}
                Token::Positional(p) => args.path = Some(p.to_string()),
            }
        }
        args
    }
}

/// Arguments for the fingerprint command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FingerprintArgs {
    pub path: Option<String>,

    /// Exclude text content from the hash
    pub layout_only: bool,
}

impl FingerprintArgs {
    pub fn scan(tokens: &[String]) -> Self {
        let mut args = Self::default();
        for token in tokens {
            match classify(token) {
                Token::Flag("--layout-only") => args.layout_only = true,
                Token::Flag(_) => {}
                Token::Positional(p) => args.path = Some(p.to_string()),
            }
        }
        args
    }
}

/// Arguments for the diff command
#[derive(Debug, Clone, PartialEq)]
pub struct DiffArgs {
    /// Positional paths in command-line order (A, then B)
    pub paths: Vec<String>,

    /// Ignore text and name fields
    pub layout_only: bool,

    /// Minimum similarity to match nodes
    pub threshold: f64,

    /// Legacy local `--json`: print the raw diff as pretty JSON
    pub raw_json: bool,
}

impl Default for DiffArgs {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            layout_only: false,
            threshold: DEFAULT_MATCH_THRESHOLD,
            raw_json: false,
        }
    }
}

impl DiffArgs {
    pub fn scan(tokens: &[String]) -> Self {
        let mut args = Self::default();
        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            match classify(token) {
                Token::Flag("--layout-only") => args.layout_only = true,
                Token::Flag("--threshold") => {
                    args.threshold = take_value(&mut iter, args.threshold)
                }
                Token::Flag("--json") => args.raw_json = true,
                Token::Flag(_) => {}
                Token::Positional(p) => args.paths.push(p.to_string()),
            }
        }
        args
    }
}

/// Arguments for the bundle command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BundleArgs {
    pub paths: Vec<String>,

    /// Write to this file instead of stdout
    pub output: Option<String>,
}

impl BundleArgs {
    pub fn scan(tokens: &[String]) -> Self {
        let mut args = Self::default();
        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            match classify(token) {
                Token::Flag("-o") | Token::Flag("--output") => {
                    if let Some(path) = iter.next() {
                        args.output = Some(path.clone());
                    }
                }
                Token::Flag(_) => {}
                Token::Positional(p) => args.paths.push(p.to_string()),
            }
        }
        args
    }
}

/// Versioned artifact packaging one or two captures and their diff
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub schema_version: String,

    /// `<package>@<version>` of the tool that produced the bundle
    pub tool: String,

    pub created_at: DateTime<Utc>,

    /// Capture documents exactly as loaded
    pub captures: Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<DiffResult>,
}
