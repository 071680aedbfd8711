//! Parser registry — the Parser trait and the tabular (CSV-like) parser.

pub mod tabular;

pub use tabular::{ParseOptions, TabularParser};

use thiserror::Error;

use crate::types::Dataset;

/// Errors raised while turning raw text into a Dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A data row whose value field has no numeric prefix.
    #[error("Invalid number in row {line}: {token}")]
    InvalidNumber { line: usize, token: String },
}

/// Trait for input parsers.
pub trait Parser {
    /// Parse the input source string into an ordered Dataset.
    fn parse(&self, src: &str) -> Result<Dataset, ParseError>;
}

/// Parse comma-delimited `label,value` text.
///
/// Blank input yields an empty Dataset, not an error.
pub fn parse(src: &str) -> Result<Dataset, ParseError> {
    TabularParser::default().parse(src)
}

/// Parse with an explicit delimiter.
pub fn parse_with(src: &str, options: ParseOptions) -> Result<Dataset, ParseError> {
    TabularParser::new(options).parse(src)
}
