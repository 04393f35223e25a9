//! Text and JSON rendering for diff results.

use super::schema::DiffResult;

/// Render a human-readable diff report
pub fn format_diff(result: &DiffResult) -> String {
    let mut out = String::new();
    out.push_str(&render_header(result));
    out.push_str(&render_changes(result));
    out.trim_end().to_string()
}

/// Render a diff result as pretty-printed JSON
pub fn format_diff_json(result: &DiffResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

fn render_header(result: &DiffResult) -> String {
    let summary = &result.summary;
    let mut out = String::new();

    if summary.identical {
        out.push_str(&format!(
            "Identical: no changes detected ({} nodes compared)\n",
            summary.matched
        ));
    } else {
        out.push_str(&format!(
            "Changes: {} (A: {} nodes, B: {} nodes, {} matched)\n",
            summary.total_changes, summary.node_count_a, summary.node_count_b, summary.matched
        ));
        let c = &summary.counts;
        out.push_str(&format!(
            "  removed: {}, added: {}, resized: {}, moved: {}, text: {}, name: {}, state: {}\n",
            c.removed, c.added, c.resized, c.moved, c.text_changed, c.name_changed, c.state_changed
        ));
    }

    if summary.viewport_changed {
        out.push_str("  viewport changed\n");
    }
    if summary.url_changed {
        out.push_str("  url changed\n");
    }
    out
}

fn render_changes(result: &DiffResult) -> String {
    let mut out = String::new();
    if result.changes.is_empty() {
        return out;
    }

    out.push('\n');
    for change in &result.changes {
        out.push_str(&format!(
            "{} {:<13} {:<10} {}",
            change.kind.symbol(),
            change.kind.as_str(),
            change.role.as_str(),
            change.path
        ));
        if let Some(detail) = &change.detail {
            out.push_str(&format!("  {}", detail));
        }
        out.push('\n');
    }
    out
}
