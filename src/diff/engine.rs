//! Core diff engine implementation.
//! Compares two captures node by node and produces a ranked change list.

use super::matcher::{flatten, match_nodes, text_hash, FlatNode};
use super::schema::{Change, ChangeCounts, ChangeKind, DiffOptions, DiffResult, DiffSummary};
use crate::parser::schema::{Capture, UiNode};
use crate::utils::config::GEOMETRY_EPSILON;
use log::debug;

/// Compare two captures
///
/// # Arguments
/// * `a` - The "before" capture
/// * `b` - The "after" capture
/// * `opts` - What to compare and how strictly to match nodes
///
/// # Returns
/// DiffResult with a summary and changes ordered by kind, then path
pub fn diff_captures(a: &Capture, b: &Capture, opts: &DiffOptions) -> DiffResult {
    // Step 1: Flatten both trees into path-addressed nodes
    let flat_a = flatten(&a.root);
    let flat_b = flatten(&b.root);

    // Step 2: Pair nodes across captures
    let pairs = match_nodes(&flat_a, &flat_b, opts);
    debug!(
        "Matched {} of {}/{} nodes",
        pairs.len(),
        flat_a.len(),
        flat_b.len()
    );

    // Step 3: Collect changes
    let mut changes = Vec::new();
    let mut a_matched = vec![false; flat_a.len()];
    let mut b_matched = vec![false; flat_b.len()];

    for &(i, j) in &pairs {
        a_matched[i] = true;
        b_matched[j] = true;
        compare_pair(&flat_a[i], &flat_b[j], opts, &mut changes);
    }

    for (flat, _) in flat_a.iter().zip(&a_matched).filter(|(_, m)| !**m) {
        changes.push(Change {
            kind: ChangeKind::Removed,
            role: flat.node.role,
            path: flat.path.clone(),
            before: Some(flat.node.bbox),
            after: None,
            detail: flat.node.label().map(str::to_string),
        });
    }

    for (flat, _) in flat_b.iter().zip(&b_matched).filter(|(_, m)| !**m) {
        changes.push(Change {
            kind: ChangeKind::Added,
            role: flat.node.role,
            path: flat.path.clone(),
            before: None,
            after: Some(flat.node.bbox),
            detail: flat.node.label().map(str::to_string),
        });
    }

    // Step 4: Rank
    changes.sort_by(|x, y| x.kind.cmp(&y.kind).then_with(|| x.path.cmp(&y.path)));

    let mut counts = ChangeCounts::default();
    for change in &changes {
        counts.record(change.kind);
    }

    let viewport_changed =
        a.viewport.w_px != b.viewport.w_px || a.viewport.h_px != b.viewport.h_px;

    DiffResult {
        summary: DiffSummary {
            identical: changes.is_empty() && !viewport_changed,
            node_count_a: flat_a.len(),
            node_count_b: flat_b.len(),
            matched: pairs.len(),
            total_changes: changes.len(),
            counts,
            url_changed: a.url != b.url,
            viewport_changed,
        },
        changes,
    }
}

/// Emit every change between two matched nodes
fn compare_pair(a: &FlatNode<'_>, b: &FlatNode<'_>, opts: &DiffOptions, out: &mut Vec<Change>) {
    let [ax, ay, aw, ah] = a.node.bbox;
    let [bx, by, bw, bh] = b.node.bbox;

    let change = |kind: ChangeKind, detail: Option<String>| Change {
        kind,
        role: b.node.role,
        path: b.path.clone(),
        before: Some(a.node.bbox),
        after: Some(b.node.bbox),
        detail,
    };

    if differs(ax, bx) || differs(ay, by) {
        out.push(change(
            ChangeKind::Moved,
            Some(format!("moved by ({:+.3}, {:+.3})", bx - ax, by - ay)),
        ));
    }

    if differs(aw, bw) || differs(ah, bh) {
        out.push(change(
            ChangeKind::Resized,
            Some(format!("{:.3}x{:.3} -> {:.3}x{:.3}", aw, ah, bw, bh)),
        ));
    }

    if opts.include_text && text_hash(a.node) != text_hash(b.node) {
        let snippet = |n: &UiNode| {
            n.text
                .as_ref()
                .and_then(|t| t.snippet.clone())
                .unwrap_or_default()
        };
        out.push(change(
            ChangeKind::TextChanged,
            Some(format!("\"{}\" -> \"{}\"", snippet(a.node), snippet(b.node))),
        ));
    }

    if opts.include_name && a.node.name != b.node.name {
        out.push(change(
            ChangeKind::NameChanged,
            Some(format!(
                "\"{}\" -> \"{}\"",
                a.node.name.as_deref().unwrap_or(""),
                b.node.name.as_deref().unwrap_or("")
            )),
        ));
    }

    let mut states = Vec::new();
    if a.node.interactive != b.node.interactive {
        states.push(format!(
            "interactive: {} -> {}",
            a.node.interactive, b.node.interactive
        ));
    }
    if a.node.visible != b.node.visible {
        states.push(format!("visible: {} -> {}", a.node.visible, b.node.visible));
    }
    if !states.is_empty() {
        out.push(change(ChangeKind::StateChanged, Some(states.join(", "))));
    }
}

fn differs(a: f64, b: f64) -> bool {
    (a - b).abs() > GEOMETRY_EPSILON
}
