//! Y-axis labels and the X-axis rule shared by the grid charts.

use super::artifact::format_value;
use super::canvas::Canvas;
use super::charset::AxisChars;
use super::round_half_up;

/// Columns reserved left of the Y-axis rule (label plus one separator slot).
pub const Y_AXIS_WIDTH: usize = 6;

/// Column where the plot area starts in a decorated row.
pub const PLOT_LEFT: usize = Y_AXIS_WIDTH + 1;

/// Rounded axis value for a canvas row: `max` at the top, falling
/// linearly towards 0 at the (exclusive) bottom.
pub fn row_value(max: f64, row: usize, height: usize) -> f64 {
    round_half_up(max - (row as f64 / height as f64) * max)
}

/// Right-aligned Y-axis label text.
pub fn y_label(value: f64) -> String {
    format!("{:>width$}", format_value(value), width = Y_AXIS_WIDTH - 1)
}

/// Prefix every canvas row with its Y-axis label and the axis rule.
///
/// `labels[row]` of None leaves the label slot blank.
pub fn decorate(canvas: &Canvas, labels: &[Option<String>], axis: AxisChars) -> Vec<String> {
    let blank = " ".repeat(Y_AXIS_WIDTH - 1);
    canvas
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            let label = labels
                .get(row)
                .and_then(|l| l.as_deref())
                .unwrap_or(blank.as_str());
            format!("{label}{}{cells}", axis.vertical)
        })
        .collect()
}

/// Corner plus horizontal rule under a plot `width` cells wide.
pub fn x_axis_rule(width: usize, axis: AxisChars) -> String {
    let mut line = " ".repeat(Y_AXIS_WIDTH);
    line.push(axis.corner);
    line.extend(std::iter::repeat_n(axis.horizontal, width));
    line
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_axis.rs"]
mod tests;
