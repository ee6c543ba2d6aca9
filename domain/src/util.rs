//! Shared utility functions.

/// One-line preview of user text for log output.
///
/// Newlines are flattened to spaces and text longer than `max_chars`
/// characters is cut and marked with `...`.
pub fn log_preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    match flat.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}
