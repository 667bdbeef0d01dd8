//! tasklog's own diagnostics — config loading, directory creation, persisted
//! files and failures are reported here, on stderr.
//!
//! Uses `OnceLock` so the diagnostics sink is initialized exactly once, even if
//! several entry points (application startup, tests) race to call `init`.

use crate::config::Config;
use crate::level::Level;
use crate::output::{Output, TerminalOutput};
use chrono::Local;
use std::sync::OnceLock;

static DIAGNOSTICS: OnceLock<Diagnostics> = OnceLock::new();

struct Diagnostics {
    enabled: bool,
    min_level: Level,
    colors: bool,
    output: TerminalOutput,
}

impl Diagnostics {
    fn from_config(config: &Config) -> Self {
        Self {
            enabled: config.diagnostics.enabled,
            min_level: config.parse_level(),
            colors: config.diagnostics.colors,
            output: TerminalOutput::stderr(),
        }
    }

    fn log(&self, level: Level, scope: &str, msg: &str) {
        if !self.enabled || level < self.min_level {
            return;
        }

        let _ = self.output.write(&format_line(level, scope, msg, self.colors));
    }
}

/// `HH:MM:SS [level] SCOPE  message`, with the level tag colored on request.
#[must_use]
pub fn format_line(level: Level, scope: &str, msg: &str, colors: bool) -> String {
    let time = Local::now().format("%H:%M:%S");
    if colors {
        format!("{time} {}[{level}]\x1b[0m {scope}  {msg}", level.ansi())
    } else {
        format!("{time} [{level}] {scope}  {msg}")
    }
}

/// Fallback initializer that loads config itself — used when no caller provides one.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init() {
    let was_init = DIAGNOSTICS.get().is_some();
    DIAGNOSTICS.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        Diagnostics::from_config(&config)
    });
    if !was_init {
        debug("INTERNAL", "Diagnostics ready");
    }
}

/// Preferred initializer — reuses the already-loaded config to avoid double I/O.
pub fn init_with_config(config: &Config) {
    let was_init = DIAGNOSTICS.get().is_some();
    DIAGNOSTICS.get_or_init(|| Diagnostics::from_config(config));
    if !was_init {
        debug(
            "INTERNAL",
            &format!("Diagnostics ready (level: {})", config.diagnostics.level),
        );
    }
}

/// Pre-init calls silently vanish rather than crashing — safe during early startup.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(diagnostics) = DIAGNOSTICS.get() {
        diagnostics.log(level, scope, msg);
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
