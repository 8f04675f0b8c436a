//! Byte offset to (line, column) conversion.

/// Compute the 1-based `(line, column)` of a byte offset in `text`.
///
/// `line` is one plus the number of `\n` bytes strictly before `offset`.
/// `column` is `offset` minus the index of the nearest preceding `\n`
/// (treated as `-1` when there is none). Offsets past the end of `text`
/// are measured against the whole text.
///
/// # Example
///
/// ```
/// use lexis_diagnostic::coordinates;
///
/// assert_eq!(coordinates("12 + x", 5), (1, 6));
/// assert_eq!(coordinates("ab\ncd", 4), (2, 2));
/// ```
pub fn coordinates(text: &str, offset: usize) -> (usize, usize) {
    let before = &text.as_bytes()[..offset.min(text.len())];
    let line = memchr::memchr_iter(b'\n', before).count() + 1;
    let line_start = memchr::memrchr(b'\n', before).map_or(0, |nl| nl + 1);
    (line, offset - line_start + 1)
}
