//! Delimited `label,value` parser with header detection.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::{ParseError, Parser};
use crate::types::{Dataset, Record};

/// Leading numeric prefix, the way a lenient float reader sees it:
/// `12kg` reads as 12, `.5` as 0.5, `Infinity` as +inf.
static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("number prefix pattern is valid")
});

/// Read the numeric prefix of a field. Returns None when there is none.
pub fn parse_number(field: &str) -> Option<f64> {
    let m = NUMBER_PREFIX.find(field.trim_start())?;
    m.as_str().parse::<f64>().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Field separator.
    pub delimiter: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

/// Parser for delimited two-column text.
#[derive(Debug, Clone, Default)]
pub struct TabularParser {
    pub options: ParseOptions,
}

impl TabularParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// A first line is a header when it has a delimiter and its second
    /// field does not start with a number.
    fn is_header(&self, line: &str) -> bool {
        let delim = self.options.delimiter;
        if !line.contains(delim) {
            return false;
        }
        let second = line.split(delim).nth(1).unwrap_or("");
        parse_number(second).is_none()
    }
}

impl Parser for TabularParser {
    fn parse(&self, src: &str) -> Result<Dataset, ParseError> {
        let text = src.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let lines: Vec<&str> = text.split('\n').collect();

        let start = if self.is_header(lines[0]) { 1 } else { 0 };
        if start == 1 {
            debug!(header = lines[0].trim(), "skipping header line");
        }

        let mut data = Vec::new();
        for (i, raw) in lines.iter().enumerate().skip(start) {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split(self.options.delimiter).map(str::trim).collect();
            if parts.len() < 2 {
                trace!(line = i + 1, "skipping line with fewer than two fields");
                continue;
            }
            let value = parse_number(parts[1]).ok_or_else(|| ParseError::InvalidNumber {
                line: i + 1,
                token: parts[1].to_string(),
            })?;
            data.push(Record::new(parts[0], value));
        }

        debug!(records = data.len(), "parsed dataset");
        Ok(data)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_tabular.rs"]
mod tests;
