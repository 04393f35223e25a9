//! Character grid with box drawing primitives.
//!
//! One cell is one terminal column. A double-width character occupies its
//! cell plus a placeholder cell to its right, so rows stay aligned.

use unicode_width::UnicodeWidthChar;

/// Right half of a double-width character; never emitted
const WIDE_TAIL: char = '\0';

/// Replace control characters (newlines, tabs, escapes) with spaces
pub fn single_line(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

/// Cell rectangle, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

/// Fixed-size character canvas
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Map a normalised `[x, y, w, h]` box onto cells, clipped to the grid.
    ///
    /// Returns `None` when the box lies entirely outside the grid.
    pub fn project(&self, bbox: [f64; 4]) -> Option<CellRect> {
        let [x, y, w, h] = bbox;
        let scale_x = self.width as f64;
        let scale_y = self.height as f64;

        let left = (x * scale_x).floor();
        let top = (y * scale_y).floor();
        let right = ((x + w) * scale_x).ceil() - 1.0;
        let bottom = ((y + h) * scale_y).ceil() - 1.0;

        if right < 0.0 || bottom < 0.0 || left >= scale_x || top >= scale_y {
            return None;
        }

        let clamp_x = |v: f64| v.max(0.0).min(scale_x - 1.0) as usize;
        let clamp_y = |v: f64| v.max(0.0).min(scale_y - 1.0) as usize;
        let left = clamp_x(left);
        let top = clamp_y(top);

        Some(CellRect {
            left,
            top,
            right: clamp_x(right).max(left),
            bottom: clamp_y(bottom).max(top),
        })
    }

    /// Put a single-width character, splitting any wide character it lands on
    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if col >= self.width || row >= self.height {
            return;
        }
        let at = row * self.width + col;
        if self.cells[at] == WIDE_TAIL && col > 0 {
            self.cells[at - 1] = ' ';
        }
        if col + 1 < self.width && self.cells[at + 1] == WIDE_TAIL {
            self.cells[at + 1] = ' ';
        }
        self.cells[at] = ch;
    }

    /// Draw a rectangle outline; degenerate rectangles become a line or a marker
    pub fn draw_box(&mut self, rect: CellRect) {
        let CellRect {
            left,
            top,
            right,
            bottom,
        } = rect;

        if left == right && top == bottom {
            self.set(left, top, '▪');
            return;
        }
        if top == bottom {
            for col in left..=right {
                self.set(col, top, '─');
            }
            return;
        }
        if left == right {
            for row in top..=bottom {
                self.set(left, row, '│');
            }
            return;
        }

        for col in left + 1..right {
            self.set(col, top, '─');
            self.set(col, bottom, '─');
        }
        for row in top + 1..bottom {
            self.set(left, row, '│');
            self.set(right, row, '│');
        }
        self.set(left, top, '┌');
        self.set(right, top, '┐');
        self.set(left, bottom, '└');
        self.set(right, bottom, '┘');
    }

    /// Write `text` starting at `(col, row)` within `max_cols` columns
    ///
    /// Control characters become spaces and zero-width characters are
    /// dropped. A wide character that would not fit ends the text.
    pub fn write_text(&mut self, col: usize, row: usize, text: &str, max_cols: usize) {
        if row >= self.height {
            return;
        }
        let mut used = 0;
        for ch in text.chars() {
            let ch = if ch.is_control() { ' ' } else { ch };
            let cols = match ch.width() {
                Some(w) if w > 0 => w,
                _ => continue,
            };
            if used + cols > max_cols {
                break;
            }

            self.set(col + used, row, ch);
            if cols == 2 {
                if col + used + 1 >= self.width {
                    // Half a wide character would misalign the row
                    self.set(col + used, row, ' ');
                    break;
                }
                self.set(col + used + 1, row, ' ');
                self.cells[row * self.width + col + used + 1] = WIDE_TAIL;
            }
            used += cols;
        }
    }

    /// Rows joined by newlines, trailing blanks trimmed per row
    pub fn to_text(&self) -> String {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| {
                row.iter()
                    .filter(|&&ch| ch != WIDE_TAIL)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
