//! ASCII layout rendering.
//!
//! Draws visible nodes in pre-order so children land on top of their
//! parents. Labels go on the top border of each box when there is room.

use super::grid::Grid;
use crate::parser::schema::{Capture, UiNode};
use crate::utils::config::{MAX_GRID_HEIGHT, MAX_GRID_WIDTH, MIN_GRID_HEIGHT, MIN_GRID_WIDTH};
use log::debug;

/// Grid size for ASCII renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: usize,
    pub height: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: crate::utils::config::DEFAULT_WIDTH,
            height: crate::utils::config::DEFAULT_HEIGHT,
        }
    }
}

impl RenderOptions {
    /// Clamp to the supported grid range
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.clamp(MIN_GRID_WIDTH, MAX_GRID_WIDTH),
            height: self.height.clamp(MIN_GRID_HEIGHT, MAX_GRID_HEIGHT),
        }
    }
}

/// Which nodes get drawn and how they are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Detail {
    /// Every visible node, labelled with role tag and name/snippet
    Full,
    /// Containers only, labelled with role tag
    Structure,
}

/// Render a capture to an ASCII grid
pub fn render_ascii(capture: &Capture, options: RenderOptions) -> String {
    render_with(capture, options, Detail::Full)
}

/// Render only the structural skeleton of a capture
pub fn render_structure(capture: &Capture, width: usize, height: usize) -> String {
    render_with(capture, RenderOptions { width, height }, Detail::Structure)
}

fn render_with(capture: &Capture, options: RenderOptions, detail: Detail) -> String {
    let options = options.clamped();
    debug!(
        "Rendering {} nodes on a {}x{} grid ({:?})",
        capture.node_count(),
        options.width,
        options.height,
        detail
    );

    let mut grid = Grid::new(options.width, options.height);
    draw_node(&mut grid, &capture.root, detail);
    grid.to_text()
}

fn draw_node(grid: &mut Grid, node: &UiNode, detail: Detail) {
    // Hidden subtrees are not drawn at all
    if !node.visible {
        return;
    }

    let drawn = match detail {
        Detail::Full => true,
        Detail::Structure => node.role.is_container() || !node.children.is_empty(),
    };

    if drawn {
        if let Some(rect) = grid.project(node.bbox) {
            grid.draw_box(rect);

            let inner = rect.right.saturating_sub(rect.left).saturating_sub(1);
            if inner > 0 {
                let label = box_label(node, detail);
                grid.write_text(rect.left + 1, rect.top, &label, inner);
            }
        }
    }

    for child in &node.children {
        draw_node(grid, child, detail);
    }
}

fn box_label(node: &UiNode, detail: Detail) -> String {
    let marker = if node.interactive { "*" } else { "" };
    match (detail, node.label()) {
        (Detail::Full, Some(text)) => format!("[{}{}:{}]", node.role.tag(), marker, text),
        _ => format!("[{}{}]", node.role.tag(), marker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{CompilerInfo, Role, TextSignal, Viewport};
    use unicode_width::UnicodeWidthChar;

    fn node(role: Role, bbox: [f64; 4], children: Vec<UiNode>) -> UiNode {
        UiNode {
            id: String::new(),
            role,
            bbox,
            interactive: role == Role::Button,
            visible: true,
            enabled: None,
            focusable: None,
            name: None,
            semantic: None,
            text: None,
            z: None,
            children,
        }
    }

    fn capture(root: UiNode) -> Capture {
        Capture {
            version: "0.1".to_string(),
            url: "https://example.com".to_string(),
            timestamp_ms: 1_700_000_000_000,
            viewport: Viewport {
                w_px: 1920,
                h_px: 1080,
                aspect: 1.78,
            },
            compiler: CompilerInfo {
                name: "websketch-ir".to_string(),
                version: "0.2.1".to_string(),
                options_hash: "test".to_string(),
            },
            root,
        }
    }

    #[test]
    fn test_page_fills_grid() {
        let cap = capture(node(Role::Page, [0.0, 0.0, 1.0, 1.0], vec![]));
        let out = render_ascii(&cap, RenderOptions { width: 20, height: 5 });
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("┌[PAGE]"));
        assert!(lines[0].ends_with('┐'));
        assert!(lines[4].starts_with('└'));
    }

    #[test]
    fn test_children_labelled_with_text() {
        let mut button = node(Role::Button, [0.1, 0.2, 0.5, 0.5], vec![]);
        button.text = Some(TextSignal {
            hash: "abc".to_string(),
            len: 6,
            snippet: Some("Submit".to_string()),
        });
        let cap = capture(node(Role::Page, [0.0, 0.0, 1.0, 1.0], vec![button]));

        let out = render_ascii(&cap, RenderOptions { width: 40, height: 10 });
        assert!(out.contains("[BTN*:Submit]"));
    }

    #[test]
    fn test_hidden_nodes_skipped() {
        let mut hidden = node(Role::Modal, [0.2, 0.2, 0.5, 0.5], vec![]);
        hidden.visible = false;
        let cap = capture(node(Role::Page, [0.0, 0.0, 1.0, 1.0], vec![hidden]));

        let out = render_ascii(&cap, RenderOptions { width: 40, height: 10 });
        assert!(!out.contains("MODAL"));
    }

    #[test]
    fn test_structure_omits_leaves_and_text() {
        let mut button = node(Role::Button, [0.1, 0.5, 0.3, 0.3], vec![]);
        button.name = Some("Go".to_string());
        let form = node(Role::Form, [0.0, 0.4, 1.0, 0.6], vec![button]);
        let cap = capture(node(Role::Page, [0.0, 0.0, 1.0, 1.0], vec![form]));

        let out = render_structure(&cap, 40, 12);
        assert!(out.contains("[FORM]"));
        assert!(!out.contains("BTN"));
        assert!(!out.contains("Go"));
    }

    #[test]
    fn test_multiline_name_keeps_grid_shape() {
        let mut button = node(Role::Button, [0.0, 0.2, 1.0, 0.5], vec![]);
        button.name = Some("Sign\nin\tnow".to_string());
        let cap = capture(node(Role::Page, [0.0, 0.0, 1.0, 1.0], vec![button]));

        let out = render_ascii(&cap, RenderOptions { width: 40, height: 10 });
        assert_eq!(out.lines().count(), 10);
        assert!(out.contains("[BTN*:Sign in now]"));
        assert!(!out.contains('\t'));
    }

    #[test]
    fn test_wide_label_keeps_right_border_aligned() {
        let mut button = node(Role::Button, [0.0, 0.0, 1.0, 1.0], vec![]);
        button.name = Some("登録する".to_string());
        let cap = capture(button);

        let out = render_ascii(&cap, RenderOptions { width: 12, height: 3 });
        let top = out.lines().next().unwrap();
        assert!(top.starts_with("┌[BTN*:登"));
        assert!(top.ends_with('┐'));
        let cols: usize = top.chars().map(|c| c.width().unwrap_or(0)).sum();
        assert_eq!(cols, 12);
    }

    #[test]
    fn test_tiny_grid_is_clamped() {
        let cap = capture(node(Role::Page, [0.0, 0.0, 1.0, 1.0], vec![]));
        let out = render_ascii(&cap, RenderOptions { width: 0, height: 0 });
        assert_eq!(out.lines().count(), MIN_GRID_HEIGHT);
        assert!(!out.is_empty());
    }
}
