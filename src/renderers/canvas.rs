//! Canvas — fixed-size 2D character grid shared by the chart renderers.

use super::charset::BLANK;

// ─── Canvas ───────────────────────────────────────────────────────────────────

/// A 2D character grid used as a painting surface.
///
/// Dimensions are fixed at construction. Writes outside the grid are
/// silently dropped: the layout math may land one cell off the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub height: usize,
    pub width: usize,
    fill: char,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(height: usize, width: usize, fill: char) -> Self {
        Self {
            height,
            width,
            fill,
            cells: vec![vec![fill; width]; height],
        }
    }

    /// Canvas filled with the blank placeholder.
    pub fn blank(height: usize, width: usize) -> Self {
        Self::new(height, width, BLANK)
    }

    fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Cell content, or the fill character outside the grid.
    pub fn get(&self, row: i64, col: i64) -> char {
        if self.in_bounds(row, col) {
            self.cells[row as usize][col as usize]
        } else {
            self.fill
        }
    }

    pub fn set(&mut self, row: i64, col: i64, ch: char) {
        if self.in_bounds(row, col) {
            self.cells[row as usize][col as usize] = ch;
        }
    }

    /// Fill columns `x1..=x2` of a row.
    pub fn hline(&mut self, row: i64, x1: i64, x2: i64, ch: char) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for col in lo..=hi {
            self.set(row, col, ch);
        }
    }

    /// Fill rows `y1..=y2` of a column.
    pub fn vline(&mut self, col: i64, y1: i64, y2: i64, ch: char) {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        for row in lo..=hi {
            self.set(row, col, ch);
        }
    }

    /// One row as a string, every column included.
    pub fn row_string(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|r| r.iter().collect())
            .unwrap_or_default()
    }

    /// All rows, in order.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(|r| self.row_string(r))
    }

    /// Row-major text: one newline-terminated line per row, nothing trimmed.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for row in &self.cells {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
