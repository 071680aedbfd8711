//! WASM bindings for ascii-graphs.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{ChartKind, OutputFormat, RenderConfig, StyleParams};

fn kind(s: &str) -> Result<ChartKind, JsError> {
    s.parse::<ChartKind>().map_err(|e| JsError::new(&e))
}

/// Render CSV text as plain-text chart with default glyphs.
#[wasm_bindgen]
pub fn render(csv: &str, chart_kind: &str) -> Result<String, JsError> {
    let config = RenderConfig::default();
    crate::render_csv(csv, kind(chart_kind)?, &config).map_err(|e| JsError::new(&e.to_string()))
}

/// Render CSV text with full control over glyphs and output format.
///
/// - `html`: true for marked-up output, false for plain text
/// - `pie_chars`: whitespace-separated glyphs, one per slice
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    csv: &str,
    chart_kind: &str,
    html: bool,
    bar_char: &str,
    line_char: &str,
    fill_char: &str,
    pie_chars: &str,
) -> Result<String, JsError> {
    let style = StyleParams {
        bar_char: bar_char.to_string(),
        area_chars: (line_char.to_string(), fill_char.to_string()),
        pie_chars: pie_chars.split_whitespace().map(str::to_owned).collect(),
        ..StyleParams::default()
    };
    let config = RenderConfig {
        style,
        format: if html { OutputFormat::Html } else { OutputFormat::Text },
        ..RenderConfig::default()
    };
    crate::render_csv(csv, kind(chart_kind)?, &config).map_err(|e| JsError::new(&e.to_string()))
}
