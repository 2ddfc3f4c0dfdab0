//! Integration tests for the shapes of written lines.
//!
//! These tests verify the three record shapes, the separator marks, and the
//! sink's line terminator policy as seen through a [`Logger`].

use ba_logger::format::MARK_HALF;
use ba_logger::{Logger, LoggerConfig, Severity, SiteLocator};

fn output(logger: Logger<Vec<u8>>) -> String {
    String::from_utf8(logger.into_inner()).expect("utf-8")
}

fn verbose(config: LoggerConfig) -> Logger<Vec<u8>> {
    Logger::with_config(
        Vec::new(),
        config.with_initial_threshold(Severity::Debug.rank()),
    )
}

// ============================================================================
// Record Shapes
// ============================================================================

/// Verifies the default shape carries the location inside the brackets.
#[test]
fn location_shown_inside_brackets() {
    let logger = verbose(LoggerConfig::default());
    logger.info("connected");

    let text = output(logger);
    let line = text.strip_suffix('\n').expect("terminated line");
    assert!(line.starts_with("[info|line_shapes.rs:"));
    assert!(line.ends_with("] connected"));
}

/// Verifies hidden locations leave only the label.
#[test]
fn hidden_location_leaves_label_only() {
    let logger = verbose(LoggerConfig::default().with_hide_location(true));
    logger.warn("disk at 91%");
    logger.log("custom", 8);

    assert_eq!(
        output(logger),
        "[warn] disk at 91%\n[custom level 8] custom\n"
    );
}

/// Verifies verydetailed keeps its trace even when locations are hidden.
#[test]
fn verydetailed_ignores_hidden_location() {
    let logger = verbose(LoggerConfig::default().with_hide_location(true))
        .with_locator(SiteLocator);
    logger.verydetailed("state dump");

    let text = output(logger);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("[verydetailed] state dump"));
    let trace = lines.next().expect("trace line");
    assert!(trace.starts_with("    at "));
    assert!(trace.contains("line_shapes.rs:"));
    assert_eq!(lines.next(), None);
}

/// Verifies the verydetailed trace starts on its own line.
#[test]
fn verydetailed_trace_follows_message() {
    let logger = Logger::new(Vec::new());
    logger.verydetailed("inspect");

    let text = output(logger);
    let (first, rest) = text.split_once('\n').expect("multi-line record");
    assert_eq!(first, "[verydetailed] inspect");
    assert!(rest.starts_with("    at "));
    assert!(rest.ends_with('\n'));
}

/// Verifies messages are written verbatim.
#[test]
fn message_text_is_verbatim() {
    let logger = verbose(LoggerConfig::default().with_hide_location(true));
    logger.error("50% [done] | {braces}");

    assert_eq!(output(logger), "[error] 50% [done] | {braces}\n");
}

// ============================================================================
// Marks
// ============================================================================

/// Verifies a bare mark is eighty dashes.
#[test]
fn bare_mark_is_eighty_dashes() {
    let logger = Logger::new(Vec::new());
    logger.mark(None);

    let text = output(logger);
    assert_eq!(text, format!("{}\n", "-".repeat(80)));
}

/// Verifies text is centred between two dash runs.
#[test]
fn mark_centres_text() {
    let logger = Logger::new(Vec::new());
    logger.mark(Some("x"));

    assert_eq!(output(logger), format!("{MARK_HALF} x {MARK_HALF}\n"));
}

/// Verifies empty mark text renders like a bare mark.
#[test]
fn empty_mark_text_is_bare() {
    let logger = Logger::new(Vec::new());
    logger.mark(Some(""));

    assert_eq!(output(logger), format!("{MARK_HALF}{MARK_HALF}\n"));
}

/// Verifies marks are written under thresholds that silence every record.
#[test]
fn marks_bypass_threshold() {
    let logger = Logger::with_config(
        Vec::new(),
        LoggerConfig::default().with_initial_threshold(i64::MAX),
    );
    logger.error("hidden");
    logger.mark(Some("visible"));

    let text = output(logger);
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains(" visible "));
}

// ============================================================================
// Line Termination
// ============================================================================

/// Verifies every record ends with a newline, so consecutive records never join.
#[test]
fn records_are_newline_terminated() {
    let logger = verbose(LoggerConfig::default().with_hide_location(true))
        .with_locator(SiteLocator);
    logger.info("a");
    logger.verydetailed("b");
    logger.info("c");

    let text = output(logger);
    let lines: Vec<&str> = text.lines().collect();
    assert!(text.ends_with('\n'));
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "[info] a");
    assert_eq!(lines[1], "[verydetailed] b");
    assert!(lines[2].starts_with("    at "));
    assert_eq!(lines[3], "[info] c");
}
