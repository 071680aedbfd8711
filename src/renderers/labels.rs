//! X-axis label placement.
//!
//! Labels are placed greedily in data order onto a single row. Earlier
//! labels win: a later label is moved (or dropped) rather than an earlier
//! one being disturbed, and no cell that already holds a label character
//! is overwritten.
//!
//! Two policies are offered because the charts use different ones:
//!
//! - [`LabelRow::place_shifting`] (area chart): on collision, move right
//!   past the colliding label, then fall back to the ideal position if
//!   that turns out to be free, then clamp into the row.
//! - [`LabelRow::place_skipping`] (vertical bar chart): on collision with
//!   the previous label, drop the label entirely.

use tracing::trace;

use super::charset::BLANK;

/// Half-open column interval `[start, end)` occupied by a placed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: i64,
    pub end: i64,
}

impl Span {
    pub fn new(start: i64, len: i64) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The collision test used while shifting: either edge of `self`
    /// falls inside `other`, or `self` covers `other` entirely.
    fn collides_with(&self, other: &Span) -> bool {
        (self.start >= other.start && self.start < other.end)
            || (self.end > other.start && self.end <= other.end)
            || (self.start <= other.start && self.end >= other.end)
    }
}

/// Ideal start column for a label of `len` characters centred on `center`.
pub fn centered_start(center: i64, len: i64) -> i64 {
    center - len / 2
}

/// First `max_len` characters of a label.
pub fn truncate_label(label: &str, max_len: usize) -> String {
    label.chars().take(max_len).collect()
}

/// A single output row of axis labels.
#[derive(Debug, Clone)]
pub struct LabelRow {
    cells: Vec<char>,
    left: i64,
    placed: Vec<Span>,
}

impl LabelRow {
    /// A blank row `width` cells wide. Labels never land left of `left`
    /// (the column just past the Y-axis).
    pub fn new(width: usize, left: usize) -> Self {
        Self {
            cells: vec![BLANK; width],
            left: left as i64,
            placed: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Spans recorded so far, in placement order.
    pub fn placed(&self) -> &[Span] {
        &self.placed
    }

    /// Place `text` centred on `center` if possible, shifting right past
    /// earlier labels when it would collide with them. Always places.
    pub fn place_shifting(&mut self, center: i64, text: &str) -> Span {
        let len = text.chars().count() as i64;
        let ideal = centered_start(center, len);
        let mut start = ideal;
        let mut adjusted = false;

        for placed in &self.placed {
            if Span::new(start, len).collides_with(placed) {
                start = placed.end + 1;
                adjusted = true;
            }
        }

        if adjusted && start < ideal {
            let want = Span::new(ideal, len);
            if !self.placed.iter().any(|p| want.overlaps(p)) {
                start = ideal;
            }
        }

        let right = self.cells.len() as i64;
        start = start.max(self.left);
        start = start.min(right - len);

        self.write(start, text, false);
        let span = Span::new(start, len);
        self.placed.push(span);
        span
    }

    /// Place `text` centred on `center`, or drop it when it would start
    /// within one cell of the previously placed label.
    pub fn place_skipping(&mut self, center: i64, text: &str) -> Option<Span> {
        let len = text.chars().count() as i64;
        let start = centered_start(center, len);

        if let Some(prev) = self.placed.last() {
            if start <= prev.end {
                trace!(label = text, start, prev_end = prev.end, "dropping colliding label");
                return None;
            }
        }

        self.write(start, text, true);
        let span = Span::new(start, len);
        self.placed.push(span);
        Some(span)
    }

    /// Copy characters into blank cells only. With `allow_same`, a cell
    /// already holding the identical character also counts as free.
    fn write(&mut self, start: i64, text: &str, allow_same: bool) {
        let width = self.cells.len() as i64;
        for (i, ch) in text.chars().enumerate() {
            let pos = start + i as i64;
            if pos < self.left || pos >= width {
                continue;
            }
            let cell = &mut self.cells[pos as usize];
            if *cell == BLANK || (allow_same && *cell == ch) {
                *cell = ch;
            }
        }
    }

    pub fn as_string(&self) -> String {
        self.cells.iter().collect()
    }
}

impl std::fmt::Display for LabelRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_labels.rs"]
mod tests;
