//! Vertical bar chart on a 15-row canvas.

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
pub const BAR_WIDTH: usize = 3;
pub const BAR_SPACING: usize = 3;
pub const MIN_WIDTH: usize = 50;

/// Cells covered by `n` bars and the gaps between them.
fn bars_span(n: usize) -> usize {
    n * BAR_WIDTH + n.saturating_sub(1) * BAR_SPACING
}

/// Canvas width for `n` bars.
pub fn chart_width(n: usize) -> usize {
    (bars_span(n) + 4).max(MIN_WIDTH)
}

/// Left edge of the centred bar group.
pub fn start_offset(n: usize) -> usize {
    (chart_width(n) - bars_span(n)) / 2
}

/// First canvas column of bar `index`.
pub fn bar_start(n: usize, index: usize) -> usize {
    start_offset(n) + index * (BAR_WIDTH + BAR_SPACING)
}

/// Filled height of a bar, 1..=HEIGHT for values up to the maximum.
pub fn bar_height(value: f64, max: f64) -> i64 {
    (round_half_up(ratio(value, max) * HEIGHT as f64) as i64).max(1)
}

/// Draw the bars onto a fresh canvas.
pub fn draw(data: &[Record], bar_char: char) -> Canvas {
    let n = data.len();
    let width = chart_width(n);
    let max = max_value(data);
    let mut canvas = Canvas::blank(HEIGHT, width);

    for (i, r) in data.iter().enumerate() {
        let x_start = bar_start(n, i) as i64;
        let x_end = x_start + BAR_WIDTH as i64 - 1;
        let height = bar_height(r.value, max).min(HEIGHT as i64);
        for row in 0..height {
            canvas.hline(HEIGHT as i64 - 1 - row, x_start, x_end, bar_char);
        }
    }
    canvas
}

pub fn render(data: &[Record], config: &RenderConfig) -> Artifact {
    let Some(bar_char) = glyph(&config.style.bar_char) else {
        warn!("vertical bar chart requested without a bar character");
        return Artifact::Error(PreconditionError::MissingBarChar);
    };
    let axis_chars = AxisChars::for_charset(config.charset);

    let n = data.len();
    let width = chart_width(n);
    let max = max_value(data);
    debug!(width, height = HEIGHT, offset = start_offset(n), max, "vertical bar layout");

    let canvas = draw(data, bar_char);

    let y_labels: Vec<Option<String>> = (0..HEIGHT)
        .map(|row| Some(axis::y_label(axis::row_value(max, row, HEIGHT))))
        .collect();
    let mut rows = axis::decorate(&canvas, &y_labels, axis_chars);
    rows.push(axis::x_axis_rule(width, axis_chars));

    let max_label_len = BAR_WIDTH + BAR_SPACING / 2;
    let mut label_row = LabelRow::new(PLOT_LEFT + width, PLOT_LEFT);
    for (i, r) in data.iter().enumerate() {
        let center = PLOT_LEFT + bar_start(n, i) + BAR_WIDTH / 2;
        label_row.place_skipping(center as i64, &truncate_label(&r.label, max_label_len));
    }
    rows.push(label_row.as_string());

    let legend = data
        .iter()
        .map(|r| LegendEntry::plain(&r.label, r.value))
        .collect();
    Artifact::Chart(Chart::new(ChartKind::VerticalBar, legend, rows))
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_vertical_bar.rs"]
mod tests;
