//! Capture parsing and schema definitions.
//!
//! This module handles:
//! - Defining the capture schema
//! - Parsing and validating raw bytes
//! - Loading capture files from disk

pub mod capture;
pub mod loader;
pub mod schema;

// Re-export main types
pub use capture::{parse_capture, parse_capture_document, validate_capture, ParsedCapture};
pub use loader::{load_capture, load_capture_document, resolve_path};
pub use schema::{BBox, Capture, CompilerInfo, Role, TextSignal, UiNode, Viewport};
