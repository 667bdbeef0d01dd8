//! Console output on stdout or stderr.

use super::Output;
use std::io::{self, Write};

/// Which standard stream a [`TerminalOutput`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each line verbatim, newline-terminated, to one standard stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput {
    stream: Stream,
}

impl TerminalOutput {
    /// Info lines and mirrored task output go to stdout.
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    /// Error lines and crate diagnostics go to stderr so they survive piping stdout.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }
}

impl Output for TerminalOutput {
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}")?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
