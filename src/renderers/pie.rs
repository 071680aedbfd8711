//! Pie chart on a 24×24 grid.
//!
//! Character cells are roughly twice as tall as they are wide, so the
//! circle test stretches the vertical distance by [`ASPECT_RATIO`]. The
//! slice angle uses the unstretched offset, which keeps each slice's
//! angular share equal to its percentage.

use std::f64::consts::TAU;

use tracing::{debug, warn};

use super::artifact::{Artifact, Chart, LegendEntry, PreconditionError};
use super::canvas::Canvas;
use super::charset::glyph;
use crate::config::RenderConfig;
use crate::types::{ChartKind, Record, label_column_width};

pub const SIZE: usize = 24;
pub const ASPECT_RATIO: f64 = 2.0;
pub const RADIUS: f64 = SIZE as f64 / 2.0 - 2.0;
const CENTER: f64 = SIZE as f64 / 2.0 - 0.5;

/// Share of the total for each record, in percent. All zero when the
/// total is zero.
pub fn percentages(data: &[Record]) -> Vec<f64> {
    let total: f64 = data.iter().map(|r| r.value).sum();
    data.iter()
        .map(|r| if total == 0.0 { 0.0 } else { r.value / total * 100.0 })
        .collect()
}

/// Angle of a cell from the centre, in `[0, 2π)`, measured without the
/// aspect correction.
pub fn cell_angle(row: usize, col: usize) -> f64 {
    let angle = (row as f64 - CENTER).atan2(col as f64 - CENTER);
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Whether a cell falls inside the aspect-corrected circle.
pub fn in_circle(row: usize, col: usize) -> bool {
    let dx = col as f64 - CENTER;
    let dy = (row as f64 - CENTER) * ASPECT_RATIO;
    (dx * dx + dy * dy).sqrt() <= RADIUS
}

/// Index of the slice containing `angle`. Falls back to the first slice
/// when rounding leaves the angle past the last boundary.
pub fn slice_index(angle: f64, percentages: &[f64]) -> usize {
    let mut cumulative = 0.0;
    for (i, pct) in percentages.iter().enumerate() {
        let sweep = pct / 100.0 * TAU;
        if angle >= cumulative && angle < cumulative + sweep {
            return i;
        }
        cumulative += sweep;
    }
    0
}

pub fn draw(percentages: &[f64], glyphs: &[char]) -> Canvas {
    let mut canvas = Canvas::blank(SIZE, SIZE);
    for row in 0..SIZE {
        for col in 0..SIZE {
            if !in_circle(row, col) {
                continue;
            }
            let idx = slice_index(cell_angle(row, col), percentages);
            canvas.set(row as i64, col as i64, glyphs[idx % glyphs.len()]);
        }
    }
    canvas
}

pub fn render(data: &[Record], config: &RenderConfig) -> Artifact {
    let glyphs: Vec<char> = config.style.pie_chars.iter().filter_map(|s| glyph(s)).collect();
    if glyphs.is_empty() {
        warn!("pie chart requested without any characters");
        return Artifact::Error(PreconditionError::NoPieChars);
    }
    if glyphs.len() < data.len() {
        warn!(required = data.len(), selected = glyphs.len(), "too few pie characters");
        return Artifact::Error(PreconditionError::InsufficientPieChars {
            required: data.len(),
            selected: glyphs.len(),
        });
    }

    let pcts = percentages(data);
    debug!(size = SIZE, radius = RADIUS, slices = pcts.len(), "pie layout");

    let canvas = draw(&pcts, &glyphs);
    let rows = canvas.rows().collect();

    let legend = data
        .iter()
        .zip(&pcts)
        .enumerate()
        .map(|(i, (r, &pct))| LegendEntry {
            glyph: Some(glyphs[i % glyphs.len()]),
            label: r.label.clone(),
            value: r.value,
            percentage: Some(pct),
        })
        .collect();

    let mut chart = Chart::new(ChartKind::Pie, legend, rows);
    chart.label_width = label_column_width(data);
    Artifact::Chart(chart)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_pie.rs"]
mod tests;
