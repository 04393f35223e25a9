//! Schema definitions for diff results.
//!
//! Defines the structures that represent differences between two captures.

use crate::parser::schema::{BBox, Role};
use crate::utils::config::DEFAULT_MATCH_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Knobs for a diff run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffOptions {
    /// Compare text content hashes
    pub include_text: bool,

    /// Compare accessible names
    pub include_name: bool,

    /// Minimum similarity (0-1) for two nodes to be paired
    pub match_threshold: f64,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            include_text: true,
            include_name: true,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

/// Complete diff result comparing a "before" (A) and "after" (B) capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Summary of diff results
    pub summary: DiffSummary,

    /// Ranked list of node-level changes
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// True when no node changed and the viewport is the same
    pub identical: bool,

    pub node_count_a: usize,
    pub node_count_b: usize,

    /// Node pairs matched across captures
    pub matched: usize,

    pub total_changes: usize,

    pub counts: ChangeCounts,

    pub url_changed: bool,
    pub viewport_changed: bool,
}

/// Per-kind change counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub removed: usize,
    pub added: usize,
    pub resized: usize,
    pub moved: usize,
    pub text_changed: usize,
    pub name_changed: usize,
    pub state_changed: usize,
}

impl ChangeCounts {
    pub fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Removed => self.removed += 1,
            ChangeKind::Added => self.added += 1,
            ChangeKind::Resized => self.resized += 1,
            ChangeKind::Moved => self.moved += 1,
            ChangeKind::TextChanged => self.text_changed += 1,
            ChangeKind::NameChanged => self.name_changed += 1,
            ChangeKind::StateChanged => self.state_changed += 1,
        }
    }
}

/// Kind of change; declaration order is report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    Removed,
    Added,
    Resized,
    Moved,
    TextChanged,
    NameChanged,
    StateChanged,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Removed => "REMOVED",
            Self::Added => "ADDED",
            Self::Resized => "RESIZED",
            Self::Moved => "MOVED",
            Self::TextChanged => "TEXT_CHANGED",
            Self::NameChanged => "NAME_CHANGED",
            Self::StateChanged => "STATE_CHANGED",
        }
    }

    /// One-character marker for text reports
    pub fn symbol(self) -> char {
        match self {
            Self::Removed => '-',
            Self::Added => '+',
            _ => '~',
        }
    }
}

/// A single node-level change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub kind: ChangeKind,
    pub role: Role,

    /// Node path in B for added/matched nodes, in A for removed nodes
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<BBox>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<BBox>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
