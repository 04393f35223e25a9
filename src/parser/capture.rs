//! Capture parser and validator.
//!
//! Turns raw bytes into a typed [`Capture`]. Syntax problems and schema
//! problems are reported as distinct [`SchemaError`] variants so callers can
//! tell "not JSON" apart from "JSON, but not a capture".

use super::schema::{Capture, UiNode};
use crate::utils::config::{MAX_JSON_NESTING, SUPPORTED_CAPTURE_VERSIONS};
use crate::utils::error::SchemaError;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// A validated capture together with the document it was read from
///
/// `raw` is the parsed JSON exactly as loaded (unknown fields and number
/// representations intact); `capture` is the typed view used by the engines.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCapture {
    pub capture: Capture,
    pub raw: Value,
}

/// Parse and validate a capture document
///
/// # Errors
/// * `SchemaError::Syntax` - bytes are not valid JSON
/// * `SchemaError::Shape` - JSON does not match the capture structure
/// * `SchemaError::Invalid` - structure matches but values are out of range
pub fn parse_capture(bytes: &[u8]) -> Result<Capture, SchemaError> {
    parse_capture_document(bytes).map(|parsed| parsed.capture)
}

/// Parse and validate, keeping the raw document alongside the typed capture
pub fn parse_capture_document(bytes: &[u8]) -> Result<ParsedCapture, SchemaError> {
    let depth = nesting_depth(bytes);
    if depth > MAX_JSON_NESTING {
        return Err(invalid(
            "root",
            format!(
                "nesting too deep ({} levels, at most {} supported)",
                depth, MAX_JSON_NESTING
            ),
        ));
    }

    // Two steps so syntax errors are never reported as shape errors.
    // Depth is bounded above, so serde_json's own limit is not needed.
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let raw = Value::deserialize(&mut de)?;
    de.end()?;

    let capture = Capture::deserialize(&raw).map_err(SchemaError::Shape)?;

    validate_capture(&capture)?;

    debug!(
        "Parsed capture: version {}, {} nodes, url {}",
        capture.version,
        capture.node_count(),
        capture.url
    );

    Ok(ParsedCapture { capture, raw })
}

/// Deepest array/object nesting in a JSON text, ignoring brackets in strings
fn nesting_depth(bytes: &[u8]) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &b in bytes {
        if in_string {
            match (escaped, b) {
                (true, _) => escaped = false,
                (false, b'\\') => escaped = true,
                (false, b'"') => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                max = max.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

/// Check value-level constraints serde cannot express
pub fn validate_capture(capture: &Capture) -> Result<(), SchemaError> {
    if !SUPPORTED_CAPTURE_VERSIONS.contains(&capture.version.as_str()) {
        return Err(invalid(
            "version",
            format!(
                "unsupported version '{}' (supported: {})",
                capture.version,
                SUPPORTED_CAPTURE_VERSIONS.join(", ")
            ),
        ));
    }

    let viewport = &capture.viewport;
    if viewport.w_px == 0 || viewport.h_px == 0 {
        return Err(invalid("viewport", "dimensions must be positive"));
    }
    if !viewport.aspect.is_finite() || viewport.aspect <= 0.0 {
        return Err(invalid("viewport.aspect", "must be a positive number"));
    }

    validate_node(&capture.root, "root")
}

fn validate_node(node: &UiNode, at: &str) -> Result<(), SchemaError> {
    let [x, y, w, h] = node.bbox;
    if [x, y, w, h].iter().any(|v| !v.is_finite()) {
        return Err(invalid(format!("{}.bbox", at), "components must be finite numbers"));
    }
    if w < 0.0 || h < 0.0 {
        return Err(invalid(format!("{}.bbox", at), "width and height must be non-negative"));
    }

    for (i, child) in node.children.iter().enumerate() {
        validate_node(child, &format!("{}.children[{}]", at, i))?;
    }
    Ok(())
}

fn invalid(at: impl Into<String>, reason: impl Into<String>) -> SchemaError {
    SchemaError::Invalid {
        at: at.into(),
        reason: reason.into(),
    }
}
