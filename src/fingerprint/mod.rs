//! Structural fingerprints.
//!
//! A capture is reduced to a canonical pre-order serialisation and hashed
//! with CRC-32. The result is always 8 lowercase hex digits. Bboxes are
//! quantised so sub-percent jitter between captures does not change the hash.

use crate::parser::schema::{Capture, UiNode};
use crate::utils::config::FINGERPRINT_QUANTUM;
use crc32fast::Hasher;

/// What goes into the hash domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintScope {
    /// Structure, geometry, text and names
    Full,
    /// Structure and geometry only
    LayoutOnly,
}

/// Fingerprint including text content and names
pub fn fingerprint_capture(capture: &Capture) -> String {
    fingerprint(capture, FingerprintScope::Full)
}

/// Fingerprint ignoring text content and names
pub fn fingerprint_layout(capture: &Capture) -> String {
    fingerprint(capture, FingerprintScope::LayoutOnly)
}

pub fn fingerprint(capture: &Capture, scope: FingerprintScope) -> String {
    let mut hasher = Hasher::new();
    hash_node(&mut hasher, &capture.root, 0, scope);
    format!("{:08x}", hasher.finalize())
}

/// Canonical line for one node
fn canonical_line(node: &UiNode, depth: usize, scope: FingerprintScope) -> String {
    let q = |v: f64| (v * FINGERPRINT_QUANTUM).round() as i64;
    let [x, y, w, h] = node.bbox;

    let mut line = format!(
        "{}|{}|{},{},{},{}|{}|{}",
        depth,
        node.role.as_str(),
        q(x),
        q(y),
        q(w),
        q(h),
        u8::from(node.interactive),
        u8::from(node.visible)
    );

    if scope == FingerprintScope::Full {
        let text_hash = node.text.as_ref().map(|t| t.hash.as_str()).unwrap_or("");
        let name = node.name.as_deref().unwrap_or("");
        line.push('|');
        line.push_str(text_hash);
        line.push('|');
        line.push_str(name);
    }
    line
}

fn hash_node(hasher: &mut Hasher, node: &UiNode, depth: usize, scope: FingerprintScope) {
    hasher.update(canonical_line(node, depth, scope).as_bytes());
    hasher.update(b"\n");
    for child in &node.children {
        hash_node(hasher, child, depth + 1, scope);
    }
}
