//! Capture schema definitions.
//!
//! This module defines the structure of capture documents we read from disk.
//! Required fields carry no serde defaults so a missing one is a schema
//! violation rather than a silently substituted value.

use serde::{Deserialize, Serialize};

/// Top-level capture document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    /// Capture schema version (e.g. "0.1")
    pub version: String,

    /// Page URL the capture was taken from
    pub url: String,

    /// Capture time in milliseconds since the Unix epoch
    pub timestamp_ms: u64,

    /// Viewport the bboxes are normalised against
    pub viewport: Viewport,

    /// Compiler that produced the capture
    pub compiler: CompilerInfo,

    /// Root of the UI tree
    pub root: UiNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub w_px: u32,
    pub h_px: u32,
    pub aspect: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerInfo {
    pub name: String,
    pub version: String,
    pub options_hash: String,
}

/// Normalised `[x, y, w, h]` box, each component a fraction of the viewport
pub type BBox = [f64; 4];

/// One node of the UI tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiNode {
    pub id: String,
    pub role: Role,
    pub bbox: BBox,
    pub interactive: bool,
    pub visible: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focusable: Option<bool>,

    /// Accessible name (aria-label, alt, title...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form semantic hint from the compiler (e.g. "login-form")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSignal>,

    /// Stacking order hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<UiNode>,
}

/// Text content summary: a stable hash plus an optional short snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSignal {
    pub hash: String,
    pub len: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Semantic role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Page,
    Nav,
    Header,
    Footer,
    Section,
    Card,
    List,
    Table,
    Modal,
    Toast,
    Dropdown,
    Form,
    Input,
    Button,
    Link,
    Checkbox,
    Radio,
    Icon,
    Image,
    Text,
    Pagination,
    Unknown,
}

impl Role {
    /// Canonical upper-case name as it appears in capture files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "PAGE",
            Self::Nav => "NAV",
            Self::Header => "HEADER",
            Self::Footer => "FOOTER",
            Self::Section => "SECTION",
            Self::Card => "CARD",
            Self::List => "LIST",
            Self::Table => "TABLE",
            Self::Modal => "MODAL",
            Self::Toast => "TOAST",
            Self::Dropdown => "DROPDOWN",
            Self::Form => "FORM",
            Self::Input => "INPUT",
            Self::Button => "BUTTON",
            Self::Link => "LINK",
            Self::Checkbox => "CHECKBOX",
            Self::Radio => "RADIO",
            Self::Icon => "ICON",
            Self::Image => "IMAGE",
            Self::Text => "TEXT",
            Self::Pagination => "PAGINATION",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Short tag used as a box label in ASCII renders
    pub fn tag(self) -> &'static str {
        match self {
            Self::Page => "PAGE",
            Self::Nav => "NAV",
            Self::Header => "HDR",
            Self::Footer => "FTR",
            Self::Section => "SEC",
            Self::Card => "CARD",
            Self::List => "LIST",
            Self::Table => "TBL",
            Self::Modal => "MODAL",
            Self::Toast => "TOAST",
            Self::Dropdown => "DROP",
            Self::Form => "FORM",
            Self::Input => "INPUT",
            Self::Button => "BTN",
            Self::Link => "LINK",
            Self::Checkbox => "CHK",
            Self::Radio => "RADIO",
            Self::Icon => "ICON",
            Self::Image => "IMG",
            Self::Text => "TXT",
            Self::Pagination => "PAGER",
            Self::Unknown => "?",
        }
    }

    /// Roles that group other content
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Page
                | Self::Nav
                | Self::Header
                | Self::Footer
                | Self::Section
                | Self::Card
                | Self::List
                | Self::Table
                | Self::Modal
                | Self::Form
                | Self::Dropdown
        )
    }
}

impl UiNode {
    /// Number of nodes in this subtree, including self
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(UiNode::count).sum::<usize>()
    }

    /// Number of interactive nodes in this subtree
    pub fn interactive_count(&self) -> usize {
        usize::from(self.interactive)
            + self
                .children
                .iter()
                .map(UiNode::interactive_count)
                .sum::<usize>()
    }

    /// Best human label for the node: name first, then text snippet
    pub fn label(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.text.as_ref().and_then(|t| t.snippet.as_deref()))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl Capture {
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}
