// src/core/sanitize.rs

/// ASCII printable set: letters, digits, punctuation, space and the
/// whitespace controls `\t \n \r \x0b \x0c`.
#[inline]
pub fn is_printable(ch: char) -> bool {
    ch.is_ascii_graphic() || matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Drop every non-printable character, keeping the order of the rest.
/// `&nbsp;` (U+00A0), smart quotes, zero-width joiners etc. all go.
pub fn printable(s: &str) -> String {
    s.chars().filter(|&c| is_printable(c)).collect()
}

/// `printable` + trim; the shape every extracted key and value ends up in.
pub fn clean_field(s: &str) -> String {
    printable(s).trim().to_string()
}

/// Split at the first ':'; `None` when the line has no separator.
pub fn split_field(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
}
