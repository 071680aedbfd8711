//! Configuration for the rendering pipeline.
//!
//! Everything a render call needs beyond the data itself. There is no
//! process-wide default state: callers build one of these and pass it in.

use serde::Deserialize;

use crate::renderers::charset::CharSet;

/// Glyphs and colours for a chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleParams {
    /// Glyph repeated to draw bars (horizontal and vertical).
    pub bar_char: String,
    /// (line glyph, fill glyph) for the area chart.
    pub area_chars: (String, String),
    /// One glyph per pie slice, in record order.
    pub pie_chars: Vec<String>,
    /// Passed through to HTML output as-is (after escaping).
    pub background_color: String,
    pub text_color: String,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            bar_char: "█".to_string(),
            area_chars: ("█".to_string(), "▓".to_string()),
            pie_chars: DEFAULT_PIE_CHARS.iter().map(|s| s.to_string()).collect(),
            background_color: "#1e293b".to_string(),
            text_color: "#4ade80".to_string(),
        }
    }
}

pub const DEFAULT_PIE_CHARS: [&str; 12] = [
    "█", "▓", "▒", "░", "▄", "▀", "▌", "▐", "■", "□", "▪", "▫",
];

/// Serialization target for an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain monospace text, no escaping.
    #[default]
    Text,
    /// Marked-up text with escaped labels.
    Html,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub style: StyleParams,
    pub format: OutputFormat,
    /// Glyphs used for the axis rules.
    pub charset: CharSet,
    /// Emit the chart heading line.
    pub title: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: StyleParams::default(),
            format: OutputFormat::Text,
            charset: CharSet::Unicode,
            title: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: StyleParams) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }
}
