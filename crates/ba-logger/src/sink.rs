//! crates/ba-logger/src/sink.rs
//! Line-oriented writer wrapper used by [`Logger`](crate::Logger).

use std::fmt;
use std::io::{self, Write};

/// Writes rendered log lines into an [`io::Write`] target.
///
/// Every line is terminated with `\n`. Each [`write_line`](Self::write_line)
/// issues a single `write_all` for the line and its terminator, so a record is
/// never split across two writer calls.
///
/// ```
/// use ba_logger::LogSink;
///
/// let mut sink = LogSink::new(Vec::new());
/// sink.write_line("[warn|main.rs:3] low disk")?;
/// assert_eq!(sink.into_inner(), b"[warn|main.rs:3] low disk\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LogSink<W> {
    writer: W,
    scratch: String,
}

impl<W> LogSink<W> {
    /// Creates a sink over `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: String::new(),
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LogSink<W>
where
    W: Write,
{
    /// Writes one newline-terminated line.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.scratch.clear();
        self.scratch.reserve(line.len() + 1);
        self.scratch.push_str(line);
        self.scratch.push('\n');
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W> fmt::Debug for LogSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_newlines_by_default() {
        let mut sink = LogSink::new(Vec::new());
        sink.write_line("first").expect("write succeeds");
        sink.write_line("second").expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "first\nsecond\n");
    }

    #[test]
    fn scratch_buffer_does_not_leak_between_lines() {
        let mut sink = LogSink::new(Vec::new());
        sink.write_line("a much longer first line").expect("write succeeds");
        sink.write_line("b").expect("write succeeds");

        assert_eq!(sink.into_inner(), b"a much longer first line\nb\n".to_vec());
    }

    #[test]
    fn multi_line_records_stay_in_one_write() {
        struct CountingWriter {
            writes: usize,
            bytes: Vec<u8>,
        }

        impl Write for CountingWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.writes += 1;
                self.bytes.extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = LogSink::new(CountingWriter {
            writes: 0,
            bytes: Vec::new(),
        });
        sink.write_line("[verydetailed] boot\n    at main").expect("write succeeds");

        let writer = sink.into_inner();
        assert_eq!(writer.writes, 1);
        assert_eq!(writer.bytes, b"[verydetailed] boot\n    at main\n".to_vec());
    }

    #[test]
    fn write_errors_surface() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = LogSink::new(Closed);
        let err = sink.write_line("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
