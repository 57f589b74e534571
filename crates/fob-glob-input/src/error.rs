//! Error types for discovery and alias generation

use fob_glob_config::ConfigError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlobInputError>;

/// Errors that can occur while discovering files or building entries
#[derive(Error, Debug, Diagnostic)]
pub enum GlobInputError {
    /// A glob pattern could not be compiled
    #[error("invalid glob pattern '{pattern}': {source}")]
    #[diagnostic(
        code(fob::glob_input::invalid_pattern),
        help("Check the pattern syntax, e.g. \"src/**/*.html\"")
    )]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Directory traversal failed
    #[error("failed to read directory tree under {root}: {source}")]
    #[diagnostic(code(fob::glob_input::walk_failed))]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A discovered file does not live under the project root
    #[error("{path} is not located under the project root {root}")]
    #[diagnostic(
        code(fob::glob_input::outside_root),
        help("Narrow the glob patterns or set the project root to a common ancestor")
    )]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// A discovered path resolves to the project root itself
    #[error("{path} has no path segments relative to the project root")]
    #[diagnostic(code(fob::glob_input::empty_relative_path))]
    EmptyRelativePath { path: PathBuf },

    /// Two files produced the same alias in strict mode
    #[error("alias '{alias}' is produced by both {existing} and {incoming}")]
    #[diagnostic(
        code(fob::glob_input::alias_collision),
        help("Rename one of the files or change dirDelimiter/filePrefix so the aliases differ")
    )]
    AliasCollision {
        alias: String,
        existing: String,
        incoming: String,
    },

    /// Reading the current directory failed
    #[error("I/O error: {0}")]
    #[diagnostic(code(fob::glob_input::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(fob::glob_input::config))]
    Config(#[from] ConfigError),
}

impl GlobInputError {
    pub fn pattern(pattern: impl Into<String>, source: globset::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn walk(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Walk {
            root: root.into(),
            source,
        }
    }

    pub fn outside_root(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::OutsideRoot {
            path: path.into(),
            root: root.into(),
        }
    }

    pub fn alias_collision(
        alias: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        Self::AliasCollision {
            alias: alias.into(),
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }

    /// Whether the error came from file discovery (bad pattern or I/O)
    pub fn is_discovery_error(&self) -> bool {
        matches!(self, Self::Pattern { .. } | Self::Walk { .. } | Self::Io(_))
    }
}
