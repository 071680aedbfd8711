//! Horizontal bar graph: one row per record, bars scaled to 50 cells.

use tracing::{debug, warn};

use super::artifact::{Artifact, Chart, LegendEntry, PreconditionError, format_value};
use super::charset::{AxisChars, glyph};
use super::round_half_up;
use crate::config::RenderConfig;
use crate::types::{ChartKind, Record, label_column_width, max_value};

/// Length in cells of the longest bar.
pub const BAR_WIDTH: usize = 50;

/// Number of cells for a bar. Never less than one, never more than
/// four full bar widths (only reachable with a non-positive maximum).
pub fn bar_length(value: f64, scale: f64) -> usize {
    round_half_up(value * scale).clamp(1.0, (BAR_WIDTH * 4) as f64) as usize
}

pub fn render(data: &[Record], config: &RenderConfig) -> Artifact {
    let Some(bar_char) = glyph(&config.style.bar_char) else {
        warn!("bar chart requested without a bar character");
        return Artifact::Error(PreconditionError::MissingBarChar);
    };
    let axis = AxisChars::for_charset(config.charset);

    let max = max_value(data);
    let scale = if max == 0.0 { 0.0 } else { BAR_WIDTH as f64 / max };
    let label_width = label_column_width(data);
    debug!(max, scale, label_width, "bar layout");

    let rows = data
        .iter()
        .map(|r| {
            let bar: String = std::iter::repeat_n(bar_char, bar_length(r.value, scale)).collect();
            let padding = " ".repeat(label_width - r.label_len());
            format!(
                "{}{padding} {}{bar} {}",
                r.label,
                axis.vertical,
                format_value(r.value)
            )
        })
        .collect();

    let scale_row = format!(
        "{}0{}{}",
        " ".repeat(label_width + 2),
        " ".repeat(BAR_WIDTH - 1),
        format_value(max)
    );

    let legend = data
        .iter()
        .map(|r| LegendEntry::plain(&r.label, r.value))
        .collect();

    let mut chart = Chart::new(ChartKind::Bar, legend, rows);
    chart.label_width = label_width;
    chart.scale = Some(scale_row);
    Artifact::Chart(chart)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_bar.rs"]
mod tests;
