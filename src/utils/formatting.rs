//! Formatting utilities used for the timeline output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Horizontal bar of `width` dashes.
pub fn bar(width: usize) -> String {
    "-".repeat(width)
}

/// `part` as a percentage of `whole`; 0 when `whole` is 0.
pub fn percent_of(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
