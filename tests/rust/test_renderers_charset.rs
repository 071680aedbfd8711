use super::*;

#[test]
fn test_blank_is_not_a_space() {
    assert_eq!(BLANK, '\u{00A0}');
    assert_ne!(BLANK, ' ');
}

#[test]
fn test_axis_chars_unicode() {
    let ac = AxisChars::unicode();
    assert_eq!(ac.vertical, '│');
    assert_eq!(ac.horizontal, '─');
    assert_eq!(ac.corner, '└');
}

#[test]
fn test_axis_chars_ascii() {
    let ac = AxisChars::ascii();
    assert_eq!(ac.vertical, '|');
    assert_eq!(ac.horizontal, '-');
    assert_eq!(ac.corner, '+');
}

#[test]
fn test_axis_chars_for_charset() {
    assert_eq!(AxisChars::for_charset(CharSet::Unicode), AxisChars::unicode());
    assert_eq!(AxisChars::for_charset(CharSet::Ascii), AxisChars::ascii());
    assert_eq!(CharSet::default(), CharSet::Unicode);
}

#[test]
fn test_glyph_takes_first_char() {
    assert_eq!(glyph("█"), Some('█'));
    assert_eq!(glyph("#*"), Some('#'));
    assert_eq!(glyph(""), None);
}
