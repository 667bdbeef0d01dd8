//! Output backed by a caller-supplied print function.

use super::Output;
use std::fmt;

/// Adapts any `Fn(&str)` into an [`Output`].
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use tasklog::{CallbackOutput, Logger};
///
/// let printed = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&printed);
/// let mut logger = Logger::also_console(CallbackOutput::new(move |line: &str| {
///     sink.lock().unwrap().push(line.to_string());
/// }));
///
/// logger.write("hello");
/// assert_eq!(*printed.lock().unwrap(), vec!["hello"]);
/// assert_eq!(logger.result(), ["hello"]);
/// ```
pub struct CallbackOutput<F> {
    print: F,
}

impl<F> CallbackOutput<F>
where
    F: Fn(&str) + Send + Sync,
{
    #[must_use]
    pub const fn new(print: F) -> Self {
        Self { print }
    }
}

impl<F> fmt::Debug for CallbackOutput<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackOutput").finish_non_exhaustive()
    }
}

impl<F> Output for CallbackOutput<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        (self.print)(line);
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
