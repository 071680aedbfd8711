//! ascii-graphs — label/value data to ASCII/Unicode charts.
//!
//! Public API: [`render()`] for an already-parsed dataset and
//! [`render_csv()`] for raw delimited text.
//!
//! Pipeline: parse → pick a chart kind → lay out on a canvas → serialize
//! the canvas and legend as plain text or HTML.

pub mod config;
pub mod parsers;
pub mod renderers;
pub mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use crate::config::{OutputFormat, RenderConfig, StyleParams};
pub use crate::parsers::{ParseError, ParseOptions, parse, parse_with};
pub use crate::renderers::{Artifact, PreconditionError};
pub use crate::types::{ChartKind, Dataset, Record};

/// Render a dataset as the given chart kind.
///
/// Glyph problems come back as an [`Artifact::Error`], never as a panic
/// or `Err`; an empty dataset comes back as [`Artifact::Empty`].
pub fn render(kind: ChartKind, data: &[Record], config: &RenderConfig) -> Artifact {
    renderers::render(kind, data, config)
}

/// Parse comma-delimited text and render it in the configured format.
///
/// Blank input renders to the empty string.
pub fn render_csv(src: &str, kind: ChartKind, config: &RenderConfig) -> Result<String, ParseError> {
    render_csv_with(src, ParseOptions::default(), kind, config)
}

/// Like [`render_csv()`] with an explicit delimiter.
pub fn render_csv_with(
    src: &str,
    options: ParseOptions,
    kind: ChartKind,
    config: &RenderConfig,
) -> Result<String, ParseError> {
    let data = parse_with(src, options)?;
    Ok(render(kind, &data, config).format(config))
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
