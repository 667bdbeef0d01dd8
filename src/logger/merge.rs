//! Copying finished logs into another logger.
//!
//! Tasks run concurrently with private loggers; once each finishes, its log is
//! appended to the aggregate in the order the caller picks, so output from
//! different tasks never interleaves.

use super::{LogWithErrors, PairedSink, Sink};

/// Appends every line of `src` to `dest`, in order and unchanged.
pub fn move_logs<S, I>(dest: &mut S, src: I)
where
    S: Sink + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    for line in src {
        dest.write(line.into());
    }
}

/// Like [`move_logs`], passing each line through `mapper` first.
///
/// ```
/// use tasklog::{Logger, move_logs_with};
///
/// let mut all = Logger::quiet();
/// move_logs_with(&mut all, ["built", "tested"], |line| format!("[lib] {line}"));
/// assert_eq!(all.result(), ["[lib] built", "[lib] tested"]);
/// ```
pub fn move_logs_with<S, I, M>(dest: &mut S, src: I, mut mapper: M)
where
    S: Sink + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
    M: FnMut(String) -> String,
{
    for line in src {
        dest.write(mapper(line.into()));
    }
}

/// Moves infos to `dest`'s info channel and errors to its error channel.
pub fn move_logs_with_errors<P>(dest: &mut P, src: &LogWithErrors)
where
    P: PairedSink + ?Sized,
{
    for line in &src.infos {
        dest.info(line.clone());
    }
    for line in &src.errors {
        dest.error(line.clone());
    }
}
