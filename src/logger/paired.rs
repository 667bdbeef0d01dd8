//! Info and error channels kept side by side.

use super::{Log, Logger};
use crate::internal;
use crate::output::{Output, TerminalOutput};
use std::fmt;

/// Marker line separating info lines from error lines in a joined transcript.
pub const ERRORS_MARKER: &str = "=== ERRORS ===";

/// The write half of a paired logger.
///
/// Merge destinations only need somewhere to put info and error lines; they
/// don't have to record anything ([`ConsoleLogger`] just prints).
pub trait PairedSink {
    fn info(&mut self, line: String);
    fn error(&mut self, line: String);
}

/// Finished output of a [`LoggerWithErrors`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogWithErrors {
    pub infos: Log,
    pub errors: Log,
}

impl LogWithErrors {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// See [`join_log_with_errors`].
    #[must_use]
    pub fn join(self) -> Log {
        join_log_with_errors(self)
    }
}

/// Flattens both channels into one human-readable transcript.
///
/// Without errors the info lines come back untouched. Otherwise they are
/// followed by a blank line, [`ERRORS_MARKER`], another blank line and the
/// error lines.
#[must_use]
pub fn join_log_with_errors(log: LogWithErrors) -> Log {
    let LogWithErrors { mut infos, errors } = log;
    if errors.is_empty() {
        return infos;
    }

    infos.reserve(errors.len() + 3);
    infos.push(String::new());
    infos.push(ERRORS_MARKER.to_string());
    infos.push(String::new());
    infos.extend(errors);
    infos
}

/// Two independent loggers, one per channel.
///
/// Writing to one channel never touches the other's lines or order.
#[derive(Debug, Default)]
pub struct LoggerWithErrors {
    infos: Logger,
    errors: Logger,
}

impl LoggerWithErrors {
    /// Builds both channels from the same factory.
    #[must_use]
    pub fn with(factory: impl Fn() -> Logger) -> Self {
        Self {
            infos: factory(),
            errors: factory(),
        }
    }

    /// Records both channels without printing.
    #[must_use]
    pub fn quiet() -> Self {
        Self::with(Logger::quiet)
    }

    /// Records both channels and prints each line to stdout as it arrives.
    #[must_use]
    pub fn console() -> Self {
        Self::with(Logger::console)
    }

    pub fn info(&mut self, line: impl Into<String>) {
        self.infos.write(line);
    }

    pub fn error(&mut self, line: impl Into<String>) {
        self.errors.write(line);
    }

    #[must_use]
    pub fn infos(&self) -> &[String] {
        self.infos.result()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        self.errors.result()
    }

    /// Copy of both channels as they stand now.
    ///
    /// For a borrowed view of the live buffers use [`infos`](Self::infos) and
    /// [`errors`](Self::errors).
    #[must_use]
    pub fn result(&self) -> LogWithErrors {
        LogWithErrors {
            infos: self.infos.result().to_vec(),
            errors: self.errors.result().to_vec(),
        }
    }

    #[must_use]
    pub fn into_result(self) -> LogWithErrors {
        LogWithErrors {
            infos: self.infos.into_result(),
            errors: self.errors.into_result(),
        }
    }
}

impl PairedSink for LoggerWithErrors {
    fn info(&mut self, line: String) {
        self.infos.write(line);
    }

    fn error(&mut self, line: String) {
        self.errors.write(line);
    }
}

/// Prints info lines to stdout and error lines to stderr, recording nothing.
///
/// Mostly a merge destination: replaying a finished task's [`LogWithErrors`]
/// onto the terminal.
pub struct ConsoleLogger {
    info: Box<dyn Output>,
    error: Box<dyn Output>,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_outputs(TerminalOutput::stdout(), TerminalOutput::stderr())
    }

    #[must_use]
    pub fn with_outputs(info: impl Output + 'static, error: impl Output + 'static) -> Self {
        Self {
            info: Box::new(info),
            error: Box::new(error),
        }
    }
}

impl PairedSink for ConsoleLogger {
    fn info(&mut self, line: String) {
        if let Err(e) = self.info.write(&line).and_then(|()| self.info.flush()) {
            internal::warn("CONSOLE", &format!("Failed to print info line: {e}"));
        }
    }

    fn error(&mut self, line: String) {
        if let Err(e) = self.error.write(&line).and_then(|()| self.error.flush()) {
            internal::warn("CONSOLE", &format!("Failed to print error line: {e}"));
        }
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger").finish_non_exhaustive()
    }
}
