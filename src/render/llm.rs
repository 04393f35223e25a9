//! Metadata-rich single-document render for LLM consumption.

use super::ascii::{render_ascii, RenderOptions};
use super::grid::single_line;
use crate::parser::schema::{Capture, Role, UiNode};
use crate::utils::config::{LLM_HEIGHT, LLM_WIDTH};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Render a capture as a self-describing text document
///
/// Sections: metadata header, layout grid, legend of role tags in use,
/// and the list of interactive elements with their positions.
pub fn render_for_llm(capture: &Capture) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "# WebSketch Capture");
    let _ = writeln!(out, "URL: {}", capture.url);
    let _ = writeln!(
        out,
        "Viewport: {}x{} (aspect {:.2})",
        capture.viewport.w_px, capture.viewport.h_px, capture.viewport.aspect
    );
    let _ = writeln!(
        out,
        "Compiler: {} {}",
        capture.compiler.name, capture.compiler.version
    );
    let _ = writeln!(
        out,
        "Nodes: {} ({} interactive)",
        capture.node_count(),
        capture.root.interactive_count()
    );

    let _ = writeln!(out, "\n## Layout ({}x{})", LLM_WIDTH, LLM_HEIGHT);
    let _ = writeln!(
        out,
        "{}",
        render_ascii(
            capture,
            RenderOptions {
                width: LLM_WIDTH,
                height: LLM_HEIGHT,
            }
        )
    );

    let mut roles = BTreeSet::new();
    collect_roles(&capture.root, &mut roles);
    let _ = writeln!(out, "\n## Legend");
    for role in &roles {
        let _ = writeln!(out, "{} = {}", role.tag(), role.as_str());
    }
    let _ = writeln!(out, "* = interactive");

    let mut interactive = Vec::new();
    collect_interactive(&capture.root, &mut interactive);
    let _ = writeln!(out, "\n## Interactive Elements");
    if interactive.is_empty() {
        let _ = writeln!(out, "(none)");
    }
    for node in interactive {
        let [x, y, w, h] = node.bbox;
        let label = node
            .label()
            .map(|l| format!(" \"{}\"", single_line(l)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "- [{}]{} at ({:.0}%, {:.0}%) size {:.0}%x{:.0}%",
            node.role.tag(),
            label,
            x * 100.0,
            y * 100.0,
            w * 100.0,
            h * 100.0
        );
    }

    out.trim_end().to_string()
}

fn collect_roles(node: &UiNode, roles: &mut BTreeSet<Role>) {
    if node.visible {
        roles.insert(node.role);
    }
    for child in &node.children {
        collect_roles(child, roles);
    }
}

fn collect_interactive<'a>(node: &'a UiNode, found: &mut Vec<&'a UiNode>) {
    if node.visible && node.interactive {
        found.push(node);
    }
    for child in &node.children {
        collect_interactive(child, found);
    }
}
