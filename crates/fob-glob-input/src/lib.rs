#![cfg_attr(docsrs, feature(doc_cfg))]

//! # fob-glob-input
//!
//! Discover files with glob patterns and turn each one into a named bundler
//! entry point.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fob_glob_config::{GlobInputOptions, GlobOptions};
//! use fob_glob_input::{GlobInputPlugin, InputOption};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = GlobInputOptions::new("src/**/*.html")
//!     .with_options(GlobOptions::new().with_ignore(["**/_*.html"]));
//!
//! let input = GlobInputPlugin::new(options).apply("src", InputOption::Empty)?;
//! // src/index.html      -> "home"
//! // src/about.html      -> "root_about"
//! // src/blog/post.html  -> "blog_post"
//! # Ok(()) }
//! ```
//!
//! ## Aliasing only
//!
//! When the file list is already known, [`compute_entries`] is a pure function
//! over the root, the naming rules and the files:
//!
//! ```
//! use fob_glob_config::NamingConfig;
//! use fob_glob_input::{EntryMap, compute_entries};
//! use std::path::Path;
//!
//! let entries = compute_entries(
//!     Path::new("/site"),
//!     &NamingConfig::default(),
//!     EntryMap::new(),
//!     ["/site/a/b/c.html"],
//! )
//! .unwrap();
//! assert_eq!(entries["a-b_c"], "/site/a/b/c.html");
//! ```

pub mod alias;
pub mod diagnostics;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod plugin;

#[cfg(feature = "logging")]
pub mod logging;

pub use alias::{AliasMapper, compute_entries, path_segments, strip_extension};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticsSink, Severity, TracingSink};
pub use discovery::{FileDiscovery, GlobDiscovery};
pub use entry::{EntryMap, InputOption};
pub use error::{GlobInputError, Result};
pub use plugin::{GlobInputPlugin, PLUGIN_NAME};

// Re-export the configuration surface so hosts need a single dependency
pub use fob_glob_config::{GlobInputOptions, GlobOptions, NamingConfig, PartialNamingConfig, Patterns};
