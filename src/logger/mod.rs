//! Per-task line buffers.
//!
//! A task gets its own [`Logger`] (or [`LoggerWithErrors`]), writes to it while it
//! runs, and hands the finished [`Log`] back to whoever aggregates, prints or
//! persists it. Tasks never share a buffer: concurrent work is merged afterwards
//! in a chosen order with [`move_logs`] / [`move_logs_with_errors`].

mod merge;
mod paired;

pub use merge::{move_logs, move_logs_with, move_logs_with_errors};
pub use paired::{
    ConsoleLogger, ERRORS_MARKER, LogWithErrors, LoggerWithErrors, PairedSink, join_log_with_errors,
};

use crate::internal;
use crate::output::{Output, TerminalOutput};
use std::fmt;

/// Ordered lines produced by one task, oldest first.
pub type Log = Vec<String>;

/// The write half of a logger: anything that accepts lines in order.
///
/// Implemented by [`Logger`], by a bare [`Log`] and by any `FnMut(String)`, so
/// merge destinations can be a plain vector or closure.
pub trait Sink {
    fn write(&mut self, line: String);
}

impl Sink for Log {
    fn write(&mut self, line: String) {
        self.push(line);
    }
}

impl<F> Sink for F
where
    F: FnMut(String),
{
    fn write(&mut self, line: String) {
        self(line);
    }
}

/// Append-only line buffer with an optional console mirror.
///
/// Quiet loggers only record. Mirrored loggers print each line through their
/// [`Output`] first, then record it, so console order and recorded order match.
#[derive(Default)]
pub struct Logger {
    lines: Log,
    mirror: Option<Box<dyn Output>>,
}

impl Logger {
    /// Records writes without printing anything.
    #[must_use]
    pub fn quiet() -> Self {
        Self::default()
    }

    /// Prints every write through `output`, then records it.
    #[must_use]
    pub fn also_console(output: impl Output + 'static) -> Self {
        Self {
            lines: Vec::new(),
            mirror: Some(Box::new(output)),
        }
    }

    /// Prints every write to stdout, then records it.
    #[must_use]
    pub fn console() -> Self {
        Self::also_console(TerminalOutput::stdout())
    }

    /// Appends one line, echoing and flushing it first when mirrored.
    ///
    /// A failing console never loses the line: mirror errors are reported as
    /// diagnostics and the line is still recorded.
    pub fn write(&mut self, line: impl Into<String>) {
        let line = line.into();
        if let Some(mirror) = &self.mirror
            && let Err(e) = mirror.write(&line).and_then(|()| mirror.flush())
        {
            internal::warn("LOGGER", &format!("Console mirror failed: {e}"));
        }
        self.lines.push(line);
    }

    /// Everything written so far, in write order.
    #[must_use]
    pub fn result(&self) -> &[String] {
        &self.lines
    }

    /// Hands over the finished log once the task is done with the logger.
    #[must_use]
    pub fn into_result(self) -> Log {
        self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether writes are also printed.
    #[must_use]
    pub fn is_mirrored(&self) -> bool {
        self.mirror.is_some()
    }
}

impl Sink for Logger {
    fn write(&mut self, line: String) {
        Self::write(self, line);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("lines", &self.lines)
            .field("mirrored", &self.is_mirrored())
            .finish()
    }
}
