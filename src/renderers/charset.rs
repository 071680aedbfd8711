//! Axis character sets and the blank cell placeholder.

/// Default cell content. A non-breaking space, so HTML and clipboard
/// consumers keep the grid's whitespace verbatim.
pub const BLANK: char = '\u{00A0}';

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to use for axis rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

// ─── AxisChars ───────────────────────────────────────────────────────────────

/// Glyphs for the Y-axis rule, the X-axis rule and their corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisChars {
    pub vertical: char,
    pub horizontal: char,
    pub corner: char,
}

impl AxisChars {
    pub fn unicode() -> Self {
        Self {
            vertical: '│',
            horizontal: '─',
            corner: '└',
        }
    }

    pub fn ascii() -> Self {
        Self {
            vertical: '|',
            horizontal: '-',
            corner: '+',
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }
}

/// First character of a glyph string, or None when the string is empty.
pub fn glyph(s: &str) -> Option<char> {
    s.chars().next()
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
