//! The print side of a console-mirrored logger.
//!
//! A mirrored [`Logger`](crate::Logger) hands every line to an `Output` before
//! recording it. Terminal streams are the usual target; [`CallbackOutput`] lets
//! callers inject any other print function (tests capture lines this way).

mod callback;
mod terminal;

pub use callback::CallbackOutput;
pub use terminal::{Stream, TerminalOutput};

/// `Send + Sync` so a mirrored logger can move into a spawned task.
pub trait Output: Send + Sync {
    /// Emits one line.
    ///
    /// # Errors
    /// I/O errors from the underlying sink (stdout, stderr, pipe).
    fn write(&self, line: &str) -> Result<(), crate::Error>;

    /// Pushes out anything the sink buffered.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
