//! Splitting of multi-value cells ("choices", "correct answers").
//!
//! Uploads use several delimiter conventions; semicolon is preferred, pipe
//! next, and comma only as a fallback because commas also appear inside
//! quoted CSV content.

/// Split a raw cell into trimmed, non-empty sub-values.
///
/// Delimiter precedence, first match wins: `;`, then `|`, then `,` (comma
/// only when the value contains no `"`). A value with no delimiter is
/// returned as a single-element list; blank input yields an empty list.
pub fn split_values(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let delimiter = if trimmed.contains(';') {
        Some(';')
    } else if trimmed.contains('|') {
        Some('|')
    } else if trimmed.contains(',') && !trimmed.contains('"') {
        Some(',')
    } else {
        None
    };
    match delimiter {
        Some(delimiter) => trimmed
            .split(delimiter)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        None => vec![trimmed.to_string()],
    }
}
