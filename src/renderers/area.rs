//! Area chart: a linearly interpolated line with the area below it filled.

use tracing::{debug, warn};

use super::artifact::{Artifact, Chart, LegendEntry, PreconditionError};
use super::axis::{self, PLOT_LEFT};
use super::canvas::Canvas;
use super::charset::{AxisChars, glyph};
use super::labels::{LabelRow, truncate_label};
use super::{ratio, round_half_up};
use crate::config::RenderConfig;
use crate::types::{ChartKind, Record, max_value};

pub const HEIGHT: usize = 15;
pub const MIN_WIDTH: usize = 40;

/// Scaled heights are clamped to this many canvas heights either way, so
/// values far outside `0..=max` stay off-canvas instead of overflowing.
const SCALE_LIMIT: f64 = HEIGHT as f64 * 4.0;

/// A data point in canvas coordinates. `y` may be -1 for the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

pub fn chart_width(n: usize) -> usize {
    (n * 4).max(MIN_WIDTH)
}

/// Column of data point `index` out of `n`, spread across the full width.
pub fn point_x(index: usize, n: usize, width: usize) -> i64 {
    let denom = n.saturating_sub(1).max(1) as f64;
    round_half_up(index as f64 / denom * (width as f64 - 1.0)) as i64
}

pub fn points(data: &[Record], width: usize) -> Vec<Point> {
    let max = max_value(data);
    data.iter()
        .enumerate()
        .map(|(i, r)| {
            let scaled = (ratio(r.value, max) * HEIGHT as f64).clamp(-SCALE_LIMIT, SCALE_LIMIT);
            Point {
                x: point_x(i, data.len(), width),
                y: (HEIGHT as i64 - 1).saturating_sub(round_half_up(scaled) as i64),
            }
        })
        .collect()
}

/// Interpolated line row at `col`. Columns before the first point use the
/// first segment; a single point gives a flat line.
pub fn line_row(points: &[Point], col: i64) -> i64 {
    let segment = points
        .windows(2)
        .position(|w| col >= w[0].x && col <= w[1].x)
        .unwrap_or(0);
    let p1 = points[segment];
    let p2 = points.get(segment + 1).copied().unwrap_or(p1);
    if p1.x == p2.x {
        return p1.y;
    }
    let t = (col - p1.x) as f64 / (p2.x - p1.x) as f64;
    round_half_up(p1.y as f64 + t * p2.y.saturating_sub(p1.y) as f64) as i64
}

/// Draw line and fill onto a fresh canvas.
pub fn draw(data: &[Record], line_char: char, fill_char: char) -> Canvas {
    let width = chart_width(data.len());
    let pts = points(data, width);
    let mut canvas = Canvas::blank(HEIGHT, width);

    for col in 0..width as i64 {
        let y = line_row(&pts, col);
        canvas.set(y, col, line_char);
        if y + 1 < HEIGHT as i64 {
            canvas.vline(col, (y + 1).max(0), HEIGHT as i64 - 1, fill_char);
        }
    }
    canvas
}

/// Y-axis labels, blank where the rounded value repeats the row above.
/// The top row is compared against -1, so a top value of -1 is blank too.
pub fn y_labels(max: f64) -> Vec<Option<String>> {
    let mut last = Some(-1.0);
    (0..HEIGHT)
        .map(|row| {
            let value = axis::row_value(max, row, HEIGHT);
            if last == Some(value) {
                None
            } else {
                last = Some(value);
                Some(axis::y_label(value))
            }
        })
        .collect()
}

pub fn render(data: &[Record], config: &RenderConfig) -> Artifact {
    let (line, fill) = &config.style.area_chars;
    let (Some(line_char), Some(fill_char)) = (glyph(line), glyph(fill)) else {
        warn!("area chart requested without line and fill characters");
        return Artifact::Error(PreconditionError::MissingAreaChars);
    };
    let axis_chars = AxisChars::for_charset(config.charset);

    let n = data.len();
    let width = chart_width(n);
    let max = max_value(data);
    debug!(width, height = HEIGHT, max, "area layout");

    let canvas = draw(data, line_char, fill_char);
    let mut rows = axis::decorate(&canvas, &y_labels(max), axis_chars);
    rows.push(axis::x_axis_rule(width, axis_chars));

    let max_label_len = (width / n).saturating_sub(1).max(4);
    let mut label_row = LabelRow::new(PLOT_LEFT + width, PLOT_LEFT);
    for (i, r) in data.iter().enumerate() {
        let center = PLOT_LEFT as i64 + point_x(i, n, width);
        label_row.place_shifting(center, &truncate_label(&r.label, max_label_len));
    }
    rows.push(label_row.as_string());

    let legend = data
        .iter()
        .map(|r| LegendEntry::plain(&r.label, r.value))
        .collect();
    Artifact::Chart(Chart::new(ChartKind::Area, legend, rows))
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_area.rs"]
mod tests;
