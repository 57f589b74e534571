//! Operator-facing diagnostics.
//!
//! The plugin never writes to a global stream itself; it reports through a
//! [`DiagnosticsSink`] supplied by the caller. [`TracingSink`] forwards to
//! `tracing`, [`CollectingSink`] keeps everything in memory.

use std::sync::Arc;

use parking_lot::Mutex;

/// Prefix used on every forwarded message.
pub const LOG_PREFIX: &str = "[fob-glob-input]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Receives warnings and errors produced while applying the plugin
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);

    fn warn(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.report(Diagnostic::warning(message));
    }

    fn error(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.report(Diagnostic::error(message));
    }
}

/// Forwards diagnostics to `tracing::warn!` / `tracing::error!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => tracing::warn!("{} {}", LOG_PREFIX, diagnostic.message),
            Severity::Error => tracing::error!("{} {}", LOG_PREFIX, diagnostic.message),
        }
    }
}

/// Keeps every diagnostic in memory.
///
/// Cloning shares the underlying buffer, so a clone handed to the plugin can
/// be inspected afterwards through the original.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    diagnostics: Arc<Mutex<Vec<Diagnostic>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Severity::Warning)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    fn messages(&self, severity: Severity) -> Vec<String> {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.clone())
            .collect()
    }
}

impl DiagnosticsSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }
}
