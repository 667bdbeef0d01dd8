//! Named log files under `<home>/logs`.
//!
//! The home directory is passed in at construction rather than read from global
//! state, so tests can point a store at a temporary directory.

use crate::config::Config;
use crate::internal;
use crate::logger::{LogWithErrors, join_log_with_errors};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Separator placed between lines in a persisted log.
pub const LINE_SEPARATOR: &str = "\r\n";

const LOG_DIR_NAME: &str = "logs";

/// Writes whole logs to files named after the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStore {
    log_dir: PathBuf,
}

impl LogStore {
    /// Store rooted at `<home>/logs`.
    #[must_use]
    pub fn new(home: impl AsRef<Path>) -> Self {
        Self {
            log_dir: home.as_ref().join(LOG_DIR_NAME),
        }
    }

    /// Store rooted at the configured home directory. Also initializes
    /// diagnostics from the same config.
    ///
    /// # Errors
    /// Fails if the configured home can't be expanded (see [`Config::home_dir`]).
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        internal::init_with_config(config);
        Ok(Self::new(config.home_dir()?))
    }

    #[must_use]
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Where the log called `name` is written.
    ///
    /// Always inside [`log_dir`](Self::log_dir): roots, drive prefixes, `.` and
    /// `..` are dropped from `name`, so `/tmp/x` and `../x` both land under `<log_dir>`.
    #[must_use]
    pub fn log_path(&self, name: &str) -> PathBuf {
        let mut path = self.log_dir.clone();
        for component in Path::new(name).components() {
            if let Component::Normal(part) = component {
                path.push(part);
            }
        }
        path
    }

    /// Writes `lines` joined by CRLF to [`log_path(name)`](Self::log_path),
    /// replacing any previous file. The log directory is created first if it
    /// doesn't exist yet.
    ///
    /// # Errors
    /// [`crate::Error::DirectoryCreation`] if the log directory can't be created,
    /// [`crate::Error::FileWrite`] if the file can't be written.
    pub async fn write_log<S>(&self, name: &str, lines: &[S]) -> Result<(), crate::Error>
    where
        S: AsRef<str>,
    {
        self.ensure_log_dir().await?;

        let path = self.log_path(name);
        let contents = join_lines(lines);
        internal::trace("STORE", &format!("Writing to: {}", path.display()));

        if let Err(source) = fs::write(&path, contents).await {
            internal::error(
                "STORE",
                &format!("Failed to write {}: {source}", path.display()),
            );
            return Err(crate::Error::FileWrite { path, source });
        }

        internal::info(
            "STORE",
            &format!("Wrote {} lines to {}", lines.len(), path.display()),
        );
        Ok(())
    }

    /// Joins both channels (see [`join_log_with_errors`]) and writes the result.
    ///
    /// # Errors
    /// Same as [`write_log`](Self::write_log).
    pub async fn write_log_with_errors(
        &self,
        name: &str,
        log: LogWithErrors,
    ) -> Result<(), crate::Error> {
        let lines = join_log_with_errors(log);
        self.write_log(name, lines.as_slice()).await
    }

    async fn ensure_log_dir(&self) -> Result<(), crate::Error> {
        match fs::create_dir_all(&self.log_dir).await {
            Ok(()) => {
                internal::debug(
                    "STORE",
                    &format!("Log directory ready: {}", self.log_dir.display()),
                );
                Ok(())
            }
            Err(source) => {
                internal::error(
                    "STORE",
                    &format!(
                        "Failed to create directory {}: {source}",
                        self.log_dir.display()
                    ),
                );
                Err(crate::Error::DirectoryCreation {
                    path: self.log_dir.clone(),
                    source,
                })
            }
        }
    }
}

/// Lines joined by [`LINE_SEPARATOR`], with no trailing separator.
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str(LINE_SEPARATOR);
        }
        out.push_str(line.as_ref());
    }
    out
}
