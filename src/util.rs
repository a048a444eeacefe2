/// Characters the C locale classifies as whitespace. Unlike [`char::is_ascii_whitespace`], this
/// includes the vertical tab (`\x0B`).
#[must_use]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strip leading and trailing whitespace, returning a sub-slice of `text`.
#[must_use]
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Owned form of [`trim`].
#[must_use]
pub fn trim_owned(text: &str) -> String {
    trim(text).to_owned()
}

/// Truncate `line` at the first `;`. There is no way to escape a semicolon.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(i) => &line[..i],
        None => line,
    }
}
