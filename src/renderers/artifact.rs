//! Render output: the Artifact enum and its text / HTML serialization.

use std::fmt::Write as _;

use thiserror::Error;

use super::round_half_up;
use crate::config::{OutputFormat, RenderConfig};
use crate::types::ChartKind;

// ─── PreconditionError ───────────────────────────────────────────────────────

/// Missing or insufficient glyphs. Never returned as `Err`: renderers wrap
/// it in [`Artifact::Error`] so the caller can display it like any chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Bar character is required.")]
    MissingBarChar,
    #[error("Both line and fill characters are required.")]
    MissingAreaChars,
    #[error("At least one character is required for pie chart.")]
    NoPieChars,
    #[error(
        "Please select at least {required} character{} for {required} data point{}. You have {selected} selected.",
        plural(.required),
        plural(.required)
    )]
    InsufficientPieChars { required: usize, selected: usize },
}

fn plural(n: &usize) -> &'static str {
    if *n > 1 { "s" } else { "" }
}

// ─── Number formatting ───────────────────────────────────────────────────────

/// Shortest decimal form: `14`, `2.5`. Negative zero prints as `0`.
pub fn format_value(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

/// One decimal place, ties rounded away from zero: `6.25 → 6.3`.
pub fn format_fixed1(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let rounded = round_half_up(v.abs() * 10.0) / 10.0;
    format!("{:.1}", rounded.copysign(v))
}

/// Integer form when integral, otherwise one decimal place.
pub fn format_pie_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format_value(v)
    } else {
        format_fixed1(v)
    }
}

/// Escape text for embedding in HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

// ─── Chart ───────────────────────────────────────────────────────────────────

/// One legend line.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Slice glyph (pie only).
    pub glyph: Option<char>,
    pub label: String,
    pub value: f64,
    /// Share of the total, 0..=100 (pie only).
    pub percentage: Option<f64>,
}

impl LegendEntry {
    pub fn plain(label: &str, value: f64) -> Self {
        Self {
            glyph: None,
            label: label.to_string(),
            value,
            percentage: None,
        }
    }

    fn padding(&self, label_width: usize) -> String {
        " ".repeat(label_width.saturating_sub(self.label.chars().count()))
    }

    fn to_text(&self, label_width: usize) -> String {
        match (self.glyph, self.percentage) {
            (Some(g), Some(pct)) => format!(
                "{g} {}{} {} ({}%)",
                self.label,
                self.padding(label_width),
                format_pie_value(self.value),
                format_fixed1(pct)
            ),
            _ => format!("{}: {}", self.label, format_value(self.value)),
        }
    }

    fn to_html(&self, label_width: usize) -> String {
        match (self.glyph, self.percentage) {
            (Some(g), Some(pct)) => format!(
                r#"<div class="legend-item"><span class="legend-char">{}</span> <span class="legend-label">{}</span>{} <span class="legend-value">{}</span> (<span class="legend-percentage">{}%</span>)</div>"#,
                escape_html(&g.to_string()),
                escape_html(&self.label),
                self.padding(label_width),
                format_pie_value(self.value),
                format_fixed1(pct)
            ),
            _ => format!(
                r#"<div class="legend-item"><span class="legend-label">{}</span>: <span class="legend-value">{}</span></div>"#,
                escape_html(&self.label),
                format_value(self.value)
            ),
        }
    }
}

/// A finished chart: legend plus decorated graph rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub legend: Vec<LegendEntry>,
    /// Column the legend labels are padded to (pie legend only).
    pub label_width: usize,
    /// Graph lines, top to bottom, axes included.
    pub rows: Vec<String>,
    /// Trailing `0 … max` line under horizontal bars.
    pub scale: Option<String>,
}

impl Chart {
    pub fn new(kind: ChartKind, legend: Vec<LegendEntry>, rows: Vec<String>) -> Self {
        Self {
            kind,
            legend,
            label_width: 0,
            rows,
            scale: None,
        }
    }

    /// Graph rows plus the scale line, newline-terminated.
    pub fn graph_text(&self) -> String {
        let mut out = String::new();
        for row in self.rows.iter().chain(self.scale.iter()) {
            out.push_str(row);
            out.push('\n');
        }
        out
    }

    fn to_text(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        if config.title {
            let _ = writeln!(out, "{}", self.kind.title());
            out.push('\n');
        }
        out.push_str("Legend\n");
        for entry in &self.legend {
            let _ = writeln!(out, "{}", entry.to_text(self.label_width));
        }
        out.push_str("\nGraph\n");
        out.push_str(&self.graph_text());
        out
    }

    fn to_html(&self, config: &RenderConfig) -> String {
        let legend: String = self
            .legend
            .iter()
            .map(|e| e.to_html(self.label_width))
            .collect();

        // Bar rows are separate blocks; the grid charts are one escaped text block.
        let graph = if self.kind == ChartKind::Bar {
            let mut g: String = self
                .rows
                .iter()
                .map(|r| format!(r#"<div class="graph-row">{}</div>"#, escape_html(r)))
                .collect();
            if let Some(scale) = &self.scale {
                let _ = write!(g, r#"<div class="graph-scale">{}</div>"#, escape_html(scale));
            }
            g
        } else {
            escape_html(&self.graph_text())
        };

        let heading = if config.title {
            format!(
                "\n      <h1 class=\"graph-heading\">{}</h1>",
                self.kind.title()
            )
        } else {
            String::new()
        };

        format!(
            r#"
    <div class="graph-wrapper" style="background-color: {bg}; color: {fg};">{heading}
      <section class="legend-section">
        <h2 class="legend-heading">Legend</h2>
        <div class="legend-content">{legend}</div>
      </section>
      <section class="graph-section">
        <h2 class="graph-section-heading">Graph</h2>
        <div class="graph-content">{graph}</div>
      </section>
    </div>
  "#,
            bg = escape_html(&config.style.background_color),
            fg = escape_html(&config.style.text_color),
        )
    }
}

// ─── Artifact ────────────────────────────────────────────────────────────────

/// Result of a render call. Every variant serializes to displayable text.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Chart(Chart),
    /// A precondition failed; shown as an error message.
    Error(PreconditionError),
    /// Nothing to draw (empty dataset).
    Empty,
}

impl Artifact {
    pub fn chart(&self) -> Option<&Chart> {
        match self {
            Artifact::Chart(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Artifact::Error(_))
    }

    /// Serialize in the format `config` asks for.
    pub fn format(&self, config: &RenderConfig) -> String {
        match (self, config.format) {
            (Artifact::Empty, _) => String::new(),
            (Artifact::Error(e), OutputFormat::Text) => format!("Error: {e}\n"),
            (Artifact::Error(e), OutputFormat::Html) => format!(
                "<div class='graph-wrapper'><p>Error: {}</p></div>",
                escape_html(&e.to_string())
            ),
            (Artifact::Chart(c), OutputFormat::Text) => c.to_text(config),
            (Artifact::Chart(c), OutputFormat::Html) => c.to_html(config),
        }
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(&RenderConfig::default()))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_artifact.rs"]
mod tests;
