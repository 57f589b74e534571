//! Subscriber setup for hosts that have none of their own.
//!
//! Only compiled with the `logging` feature. Without it the crate emits
//! `tracing` events and leaves the subscriber to the host.
//!
//! The installed filter covers this crate and `fob_glob_config` only, so
//! [`LogLevel::Debug`] prints one line per generated alias without turning up
//! the host's own targets.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable read by [`init_logging_from_env`], e.g. `FOB_GLOB_LOG=debug`.
pub const LOG_ENV: &str = "FOB_GLOB_LOG";

/// Targets the filter applies to.
const TARGETS: &[&str] = &["fob_glob_input", "fob_glob_config"];

static INIT: Once = Once::new();

/// How much of the plugin's output to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Silent,
    /// Discovery failures only
    Error,
    /// Also "no files found" and option warnings
    #[default]
    Warn,
    /// Also every alias as it is added or overwritten
    Debug,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Debug => "debug",
        }
    }

    /// `EnvFilter` directives scoping this level to the plugin's targets
    pub fn directives(self) -> String {
        TARGETS
            .iter()
            .map(|target| format!("{}={}", target, self.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "debug" | "trace" => Ok(LogLevel::Debug),
            other => Err(format!(
                "Invalid log level '{}' (expected silent, error, warn or debug)",
                other
            )),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Print the plugin's events at `level` to stderr.
///
/// Only the first call in a process does anything, and it backs off quietly
/// if the host already installed a global subscriber.
///
/// ```rust,no_run
/// use fob_glob_input::logging::{LogLevel, init_logging};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| install(level));
}

/// Like [`init_logging`], with the level taken from [`LOG_ENV`].
///
/// Unset or unparsable values fall back to [`LogLevel::Warn`].
pub fn init_logging_from_env() {
    INIT.call_once(|| install(level_from_env()));
}

fn level_from_env() -> LogLevel {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

fn install(level: LogLevel) {
    let filter = EnvFilter::new(level.directives());
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false).without_time())
        .try_init();
    if result.is_err() {
        tracing::debug!("global subscriber already set; keeping the host's");
    }
}
