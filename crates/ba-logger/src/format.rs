//! crates/ba-logger/src/format.rs
//! Textual shapes of records and separator marks.

use crate::record::LogRecord;

/// Half of a mark line: forty dashes.
pub const MARK_HALF: &str = "----------------------------------------";

/// Renders a record into its output line.
///
/// - `verydetailed`: `[label] message`, a newline, then the location;
/// - location hidden: `[label] message`;
/// - otherwise: `[label|location] message`.
///
/// `verydetailed` records ignore `hide_location`.
#[must_use]
pub fn render_record(record: &LogRecord<'_>, hide_location: bool) -> String {
    let label = record.label();
    let message = record.message();
    if record.is_verydetailed() {
        format!("[{label}] {message}\n{}", record.location())
    } else if hide_location {
        format!("[{label}] {message}")
    } else {
        format!("[{label}|{}] {message}", record.location())
    }
}

/// Renders a separator line with optional centred text.
///
/// ```
/// use ba_logger::format::{render_mark, MARK_HALF};
///
/// assert_eq!(render_mark(None), format!("{MARK_HALF}{MARK_HALF}"));
/// assert_eq!(render_mark(Some("boot")), format!("{MARK_HALF} boot {MARK_HALF}"));
/// ```
#[must_use]
pub fn render_mark(text: Option<&str>) -> String {
    match text.filter(|text| !text.is_empty()) {
        Some(text) => format!("{MARK_HALF} {text} {MARK_HALF}"),
        None => format!("{MARK_HALF}{MARK_HALF}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rank: i64) -> LogRecord<'static> {
        LogRecord::new("cache warm", rank, "boot.rs:12".to_owned())
    }

    #[test]
    fn mark_half_is_forty_dashes() {
        assert_eq!(MARK_HALF.len(), 40);
        assert!(MARK_HALF.bytes().all(|b| b == b'-'));
    }

    #[test]
    fn shows_location_inside_brackets() {
        assert_eq!(render_record(&record(1), false), "[info|boot.rs:12] cache warm");
    }

    #[test]
    fn hides_location_when_asked() {
        assert_eq!(render_record(&record(3), true), "[error] cache warm");
    }

    #[test]
    fn verydetailed_puts_location_on_next_line() {
        assert_eq!(
            render_record(&record(4), false),
            "[verydetailed] cache warm\nboot.rs:12"
        );
        assert_eq!(
            render_record(&record(4), true),
            "[verydetailed] cache warm\nboot.rs:12"
        );
    }

    #[test]
    fn custom_rank_uses_custom_label() {
        assert_eq!(
            render_record(&record(9), false),
            "[custom level 9|boot.rs:12] cache warm"
        );
    }

    #[test]
    fn empty_mark_text_is_plain_separator() {
        assert_eq!(render_mark(Some("")), render_mark(None));
        assert_eq!(render_mark(None).len(), 80);
    }
}
