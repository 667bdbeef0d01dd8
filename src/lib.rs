//! `tasklog` - per-task log buffering, ordered merging and log file persistence.
//!
//! Each logical task records its own lines, either quietly or mirrored to the
//! console. Finished logs from concurrently running tasks are merged into an
//! aggregate in a deterministic order, flattened into a transcript, and written
//! to `<home>/logs/<name>`.
//!
//! # Example
//!
//! ```no_run
//! use tasklog::{LogStore, LoggerWithErrors, move_logs_with_errors};
//!
//! # async fn run() -> Result<(), tasklog::Error> {
//! let mut build = LoggerWithErrors::quiet();
//! build.info("compiled 12 crates");
//!
//! let mut lint = LoggerWithErrors::quiet();
//! lint.info("checked 12 crates");
//! lint.error("unused import in src/lib.rs");
//!
//! let mut all = LoggerWithErrors::console();
//! move_logs_with_errors(&mut all, &build.into_result());
//! move_logs_with_errors(&mut all, &lint.into_result());
//!
//! let store = LogStore::new("/var/lib/ci");
//! store.write_log_with_errors("ci", all.into_result()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod store;

pub use config::Config;
pub use error::Error;
pub use level::Level;
pub use logger::{
    ConsoleLogger, ERRORS_MARKER, Log, LogWithErrors, Logger, LoggerWithErrors, PairedSink, Sink,
    join_log_with_errors, move_logs, move_logs_with, move_logs_with_errors,
};
pub use output::{CallbackOutput, Output, Stream, TerminalOutput};
pub use store::{LINE_SEPARATOR, LogStore};
