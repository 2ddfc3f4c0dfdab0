//! crates/ba-logger/src/location/trace.rs
//! Parsing and trimming of captured backtrace text.

use super::CallSite;

/// Symbol prefix of every function defined in this crate.
const CRATE_PREFIX: &str = "ba_logger::";

/// Suffix of any `CallerLocator::detailed` implementation, including ones
/// defined outside this crate.
const DETAILED_SUFFIX: &str = " as ba_logger::location::CallerLocator>::detailed";

/// Logger frames sitting between a [`CallerLocator::detailed`] call and the
/// user's call site in an unoptimized build.
///
/// The chain is `detailed` → `Logger::locate` → `Logger::dispatch` → public
/// entry point. Every entry point, including the process-wide free functions,
/// calls `dispatch` directly so the depth is the same for all of them.
/// Optimized builds inline part of this chain, so traces are trimmed by
/// symbol rather than by this count.
///
/// [`CallerLocator::detailed`]: super::CallerLocator::detailed
pub const INTERNAL_FRAMES: usize = 4;

/// One frame of a captured trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Demangled symbol, or the raw instruction pointer when unresolved.
    pub symbol: String,
    /// `path:line:column` of the frame, when debug info was available.
    pub location: Option<String>,
}

impl Frame {
    /// Returns `true` when this frame's source position is `site`.
    #[must_use]
    pub fn matches(&self, site: &CallSite) -> bool {
        self.location
            .as_deref()
            .and_then(split_location)
            .is_some_and(|(path, line, _)| line == site.line() && file_name(path) == site.file_name())
    }

    /// Returns `true` for frames owned by the logger or the capture itself.
    ///
    /// Trait impls render as `<Type as Trait>::method`, so a leading `<` is
    /// ignored before checking the crate prefix.
    #[must_use]
    pub fn is_logger_frame(&self) -> bool {
        let symbol = self.symbol.trim_start_matches('<');
        symbol.starts_with(CRATE_PREFIX)
            || symbol.starts_with("std::backtrace")
            || self.symbol.contains(DETAILED_SUFFIX)
    }

    fn render(&self) -> String {
        match &self.location {
            Some(location) => format!("    at {} ({location})", self.symbol),
            None => format!("    at {}", self.symbol),
        }
    }
}

/// Splits the text produced by `Backtrace`'s `Display` impl into frames.
///
/// Numbered lines start a frame; an indented `at ...` line that follows
/// supplies its location. Anything else is ignored.
#[must_use]
pub fn parse_frames(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                frame.location.get_or_insert_with(|| location.trim_end().to_owned());
            }
            continue;
        }
        if let Some((index, symbol)) = trimmed.split_once(": ") {
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                frames.push(Frame {
                    symbol: symbol.trim().to_owned(),
                    location: None,
                });
            }
        }
    }
    frames
}

/// Renders the trace starting at the caller's frame.
///
/// The caller's frame is found by matching its file name and line against
/// `site`. Inlined or unsymbolized traces may not contain such a frame; the
/// leading logger frames are then dropped and the first frame after them,
/// which holds the call, is replaced by the site itself.
#[must_use]
pub fn render_from_caller(frames: &[Frame], site: &CallSite) -> String {
    let lines: Vec<String> = match frames.iter().position(|frame| frame.matches(site)) {
        Some(anchor) => frames[anchor..].iter().map(Frame::render).collect(),
        None => {
            let mut callers = frames.iter().skip_while(|frame| frame.is_logger_frame());
            callers.next();
            std::iter::once(format!("    at {site}"))
                .chain(callers.map(Frame::render))
                .collect()
        }
    };
    lines.join("\n")
}

/// Reduces `path:line:column` frame text to `file:line`.
///
/// Text that does not end in a file name with an extension followed by two
/// numeric fields is returned unchanged.
#[must_use]
pub fn concise_location(frame: &str) -> String {
    if let Some((path, line, _)) = split_location(frame.trim()) {
        let name = file_name(path);
        if has_extension(name) {
            return format!("{name}:{line}");
        }
    }
    frame.to_owned()
}

pub(super) fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn split_location(text: &str) -> Option<(&str, u32, u32)> {
    let mut parts = text.rsplitn(3, ':');
    let column = parts.next()?.parse().ok()?;
    let line = parts.next()?.parse().ok()?;
    let path = parts.next()?;
    Some((path, line, column))
}

fn has_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
}
