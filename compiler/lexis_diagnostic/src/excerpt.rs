//! Short, single-line excerpts of offending input.

/// Maximum number of characters kept by [`excerpt`].
pub const EXCERPT_CHARS: usize = 10;

/// Take up to [`EXCERPT_CHARS`] characters of `text` starting at `offset`,
/// with each `\n` rendered as the two characters `\` and `n`.
///
/// Returns an empty string when `offset` is past the end of `text` or not
/// on a character boundary.
///
/// ```
/// use lexis_diagnostic::excerpt;
///
/// assert_eq!(excerpt("let x = 1;\nlet y", 4), "x = 1;\\nlet");
/// ```
pub fn excerpt(text: &str, offset: usize) -> String {
    let rest = text.get(offset..).unwrap_or_default();
    let mut out = String::with_capacity(EXCERPT_CHARS + 2);
    for ch in rest.chars().take(EXCERPT_CHARS) {
        if ch == '\n' {
            out.push_str("\\n");
        } else {
            out.push(ch);
        }
    }
    out
}
