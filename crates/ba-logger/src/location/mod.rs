//! crates/ba-logger/src/location/mod.rs
//! Call-site resolution for log records.
//!
//! Every public entry point is `#[track_caller]`, so the compiler hands the
//! logger the exact [`CallSite`] of the user's call. A [`CallerLocator`] turns
//! that site into location text using one of two strategies:
//!
//! - **concise**: `file.rs:LINE`, used for every severity except
//!   `verydetailed`;
//! - **detailed**: a multi-line trace beginning at the caller's frame, used for
//!   `verydetailed`.
//!
//! [`TraceLocator`] walks the native call stack for the detailed strategy.
//! [`SiteLocator`] never walks the stack and renders only the supplied site,
//! which is what the explicit-site macros and stack-less targets rely on.

mod trace;

pub use trace::{Frame, INTERNAL_FRAMES, concise_location, parse_frames, render_from_caller};

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::panic::Location;

/// Source position of a log call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    /// Creates a site from explicit coordinates, usually `file!()`, `line!()` and `column!()`.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Returns the site of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Source path as recorded by the compiler.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// One-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// One-based column number, or zero when unknown.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Final path component of [`file`](Self::file).
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        trace::file_name(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Strategy that turns a [`CallSite`] into the location text of a record.
pub trait CallerLocator: Send + Sync + fmt::Debug {
    /// Single-line location for every severity except `verydetailed`.
    fn concise(&self, site: &CallSite) -> String;

    /// Multi-line location for `verydetailed` records.
    ///
    /// In unoptimized builds, implementations that inspect the call stack
    /// are invoked exactly [`INTERNAL_FRAMES`] frames below the user's call.
    fn detailed(&self, site: &CallSite) -> String;
}

/// Locator backed by native backtrace capture.
#[derive(Copy, Clone, Debug, Default)]
pub struct TraceLocator;

impl CallerLocator for TraceLocator {
    fn concise(&self, site: &CallSite) -> String {
        concise_location(&site.to_string())
    }

    #[inline(never)]
    fn detailed(&self, site: &CallSite) -> String {
        let backtrace = Backtrace::force_capture();
        if backtrace.status() != BacktraceStatus::Captured {
            return SiteLocator.detailed(site);
        }
        let frames = parse_frames(&backtrace.to_string());
        if frames.is_empty() {
            return SiteLocator.detailed(site);
        }
        render_from_caller(&frames, site)
    }
}

/// Locator that only renders the supplied call site.
#[derive(Copy, Clone, Debug, Default)]
pub struct SiteLocator;

impl CallerLocator for SiteLocator {
    fn concise(&self, site: &CallSite) -> String {
        concise_location(&site.to_string())
    }

    fn detailed(&self, site: &CallSite) -> String {
        format!("    at {site}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_reports_this_file() {
        let site = CallSite::caller();
        assert_eq!(site.file_name(), "mod.rs");
        assert_eq!(site.line(), line!() - 2);
    }

    #[test]
    fn file_name_strips_directories() {
        let site = CallSite::new("crates/ba-logger/src/lib.rs", 3, 1);
        assert_eq!(site.file_name(), "lib.rs");

        let site = CallSite::new(r"C:\work\app\main.rs", 3, 1);
        assert_eq!(site.file_name(), "main.rs");
    }

    #[test]
    fn site_display_includes_column() {
        let site = CallSite::new("src/app.rs", 12, 9);
        assert_eq!(site.to_string(), "src/app.rs:12:9");
    }

    #[test]
    fn concise_strategy_is_file_and_line() {
        let site = CallSite::new("src/app.rs", 12, 9);
        assert_eq!(TraceLocator.concise(&site), "app.rs:12");
        assert_eq!(SiteLocator.concise(&site), "app.rs:12");
    }

    #[test]
    fn site_locator_detailed_is_single_frame() {
        let site = CallSite::new("src/app.rs", 12, 9);
        assert_eq!(SiteLocator.detailed(&site), "    at src/app.rs:12:9");
    }

    #[test]
    fn trace_locator_detailed_is_never_empty() {
        let site = CallSite::caller();
        let text = TraceLocator.detailed(&site);
        assert!(!text.is_empty());
        assert!(text.lines().all(|line| line.starts_with("    at ")));
    }
}
