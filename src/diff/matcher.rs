//! Node flattening and cross-capture matching.
//!
//! Handles the math for pairing nodes between two captures,
//! including degenerate (zero-area) boxes.

use super::schema::DiffOptions;
use crate::parser::schema::{BBox, UiNode};
use std::collections::{HashMap, VecDeque};

/// A node addressed by its role path from the root
#[derive(Debug, Clone)]
pub struct FlatNode<'a> {
    /// e.g. `PAGE/FORM[0]/BUTTON[1]`
    pub path: String,
    pub node: &'a UiNode,
}

/// Flatten a tree in pre-order
///
/// Sibling indices count only siblings of the same role, so inserting a
/// node of another role does not shift the paths of its neighbours.
pub fn flatten(root: &UiNode) -> Vec<FlatNode<'_>> {
    let mut out = Vec::new();
    push_node(root, root.role.as_str().to_string(), &mut out);
    out
}

fn push_node<'a>(node: &'a UiNode, path: String, out: &mut Vec<FlatNode<'a>>) {
    out.push(FlatNode {
        path: path.clone(),
        node,
    });

    let mut seen: HashMap<&'static str, usize> = HashMap::new();
    for child in &node.children {
        let role = child.role.as_str();
        let index = seen.entry(role).or_insert(0);
        let child_path = format!("{}/{}[{}]", path, role, index);
        *index += 1;
        push_node(child, child_path, out);
    }
}

/// Pair nodes of A with nodes of B
///
/// Exactly-equal nodes are paired first so a capture always matches itself
/// completely, whatever the threshold. Remaining nodes are paired greedily,
/// in A order, with the best-scoring unmatched B node of the same role.
///
/// Returns `(index_in_a, index_in_b)` pairs sorted by A index.
pub fn match_nodes(a: &[FlatNode<'_>], b: &[FlatNode<'_>], opts: &DiffOptions) -> Vec<(usize, usize)> {
    let threshold = effective_threshold(opts.match_threshold);
    let mut a_taken = vec![false; a.len()];
    let mut b_taken = vec![false; b.len()];
    let mut pairs = Vec::new();

    // Pass 1: exact signatures
    let mut by_signature: HashMap<String, VecDeque<usize>> = HashMap::new();
    for (j, flat) in b.iter().enumerate() {
        by_signature.entry(signature(flat, opts)).or_default().push_back(j);
    }
    for (i, flat) in a.iter().enumerate() {
        if let Some(j) = by_signature
            .get_mut(&signature(flat, opts))
            .and_then(VecDeque::pop_front)
        {
            a_taken[i] = true;
            b_taken[j] = true;
            pairs.push((i, j));
        }
    }

    // Pass 2: best similarity above threshold
    for (i, flat_a) in a.iter().enumerate() {
        if a_taken[i] {
            continue;
        }

        let mut best: Option<(usize, f64)> = None;
        for (j, flat_b) in b.iter().enumerate() {
            if b_taken[j] || flat_a.node.role != flat_b.node.role {
                continue;
            }
            let score = similarity(flat_a, flat_b, opts);
            if score >= threshold && best.map_or(true, |(_, s)| score > s) {
                best = Some((j, score));
            }
        }

        if let Some((j, _)) = best {
            a_taken[i] = true;
            b_taken[j] = true;
            pairs.push((i, j));
        }
    }

    pairs.sort_unstable();
    pairs
}

/// Clamp the user threshold to [0, 1]; non-finite falls back to the default
pub fn effective_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        DiffOptions::default().match_threshold
    }
}

/// Similarity in [0, 1]: geometry 60%, path 20%, content 20%
pub fn similarity(a: &FlatNode<'_>, b: &FlatNode<'_>, opts: &DiffOptions) -> f64 {
    if a.node.role != b.node.role {
        return 0.0;
    }

    let geometry = 0.5 * iou(a.node.bbox, b.node.bbox) + 0.5 * proximity(a.node.bbox, b.node.bbox);
    let path = if a.path == b.path { 1.0 } else { 0.0 };

    let mut compared = 0.0;
    let mut equal = 0.0;
    if opts.include_text {
        compared += 1.0;
        if text_hash(a.node) == text_hash(b.node) {
            equal += 1.0;
        }
    }
    if opts.include_name {
        compared += 1.0;
        if a.node.name == b.node.name {
            equal += 1.0;
        }
    }
    let content = if compared > 0.0 { equal / compared } else { 1.0 };

    0.6 * geometry + 0.2 * path + 0.2 * content
}

/// Intersection over union of two boxes
pub fn iou(a: BBox, b: BBox) -> f64 {
    let [ax, ay, aw, ah] = a;
    let [bx, by, bw, bh] = b;

    let ix = ((ax + aw).min(bx + bw) - ax.max(bx)).max(0.0);
    let iy = ((ay + ah).min(by + bh) - ay.max(by)).max(0.0);
    let intersection = ix * iy;
    let union = aw * ah + bw * bh - intersection;

    if union <= 0.0 {
        // Both degenerate: same box counts as full overlap
        return if a == b { 1.0 } else { 0.0 };
    }
    intersection / union
}

/// 1 at identical centres, falling linearly to 0 one viewport-unit apart
fn proximity(a: BBox, b: BBox) -> f64 {
    let (acx, acy) = (a[0] + a[2] / 2.0, a[1] + a[3] / 2.0);
    let (bcx, bcy) = (b[0] + b[2] / 2.0, b[1] + b[3] / 2.0);
    let distance = ((acx - bcx).powi(2) + (acy - bcy).powi(2)).sqrt();
    (1.0 - distance).max(0.0)
}

pub fn text_hash(node: &UiNode) -> Option<&str> {
    node.text.as_ref().map(|t| t.hash.as_str())
}

fn signature(flat: &FlatNode<'_>, opts: &DiffOptions) -> String {
    let node = flat.node;
    let mut sig = format!(
        "{}|{:?}|{}|{}",
        flat.path, node.bbox, node.interactive, node.visible
    );
    if opts.include_text {
        sig.push('|');
        sig.push_str(text_hash(node).unwrap_or(""));
    }
    if opts.include_name {
        sig.push('|');
        sig.push_str(node.name.as_deref().unwrap_or(""));
    }
    sig
}
