//! Core data types: Record, Dataset, ChartKind.

use std::fmt;
use std::str::FromStr;

// ─── Record ──────────────────────────────────────────────────────────────────

/// One (label, value) row of input data.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub label: String,
    pub value: f64,
}

impl Record {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Label length in characters (not bytes).
    pub fn label_len(&self) -> usize {
        self.label.chars().count()
    }
}

/// Ordered records. Order decides placement and legend order.
pub type Dataset = Vec<Record>;

/// Largest value in the dataset, or 0 for an empty one.
pub fn max_value(data: &[Record]) -> f64 {
    data.iter().map(|r| r.value).reduce(f64::max).unwrap_or(0.0)
}

/// Width of the label column: the longest label, but never under 20.
pub fn label_column_width(data: &[Record]) -> usize {
    data.iter().map(Record::label_len).max().unwrap_or(0).max(20)
}

// ─── ChartKind ───────────────────────────────────────────────────────────────

/// Which chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    /// Horizontal bars, one row per record.
    #[default]
    Bar,
    VerticalBar,
    Area,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::VerticalBar,
        ChartKind::Area,
        ChartKind::Pie,
    ];

    /// Heading shown above the legend.
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Graph",
            ChartKind::VerticalBar => "Vertical Bar Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Pie => "Pie Chart",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Bar => "bar",
            ChartKind::VerticalBar => "vertical-bar",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
        };
        f.write_str(name)
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" | "horizontal-bar" | "hbar" => Ok(ChartKind::Bar),
            "vertical-bar" | "verticalbar" | "vertical_bar" | "vbar" => Ok(ChartKind::VerticalBar),
            "area" => Ok(ChartKind::Area),
            "pie" => Ok(ChartKind::Pie),
            other => Err(format!(
                "Unknown chart kind '{other}'; use bar, vertical-bar, area, or pie"
            )),
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_types.rs"]
mod tests;
