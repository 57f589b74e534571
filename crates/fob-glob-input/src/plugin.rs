//! Build hook that turns glob patterns into bundler input entries.
//!
//! ```text
//! patterns --discover--> files --(input shape)--> Empty → List([]) or Map({})
//!                                                 List  → append files
//!                                                 Map   → AliasMapper
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fob_glob_config::{GlobInputOptions, validate_schema};
use tracing::debug;

use crate::alias::{AliasMapper, absolute_root};
use crate::diagnostics::{Diagnostic, DiagnosticsSink, TracingSink};
use crate::discovery::{FileDiscovery, GlobDiscovery};
use crate::entry::{EntryMap, InputOption};
use crate::error::{GlobInputError, Result};

/// Plugin name reported to the host.
pub const PLUGIN_NAME: &str = "fob-glob-input";

/// Discovers files by glob and merges them into the host's `input` option.
///
/// # Example
///
/// ```rust,no_run
/// use fob_glob_config::{GlobInputOptions, validate_schema};
/// use fob_glob_input::{GlobInputPlugin, InputOption};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let plugin = GlobInputPlugin::new(GlobInputOptions::new("src/**/*.html"));
/// let input = plugin.apply("src", InputOption::Empty)?;
/// for (alias, path) in input.as_map().into_iter().flatten() {
///     println!("{alias} -> {path}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GlobInputPlugin {
    options: GlobInputOptions,
    discovery: Arc<dyn FileDiscovery>,
    sink: Arc<dyn DiagnosticsSink>,
}

impl std::fmt::Debug for GlobInputPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobInputPlugin")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl GlobInputPlugin {
    /// Create a plugin using filesystem discovery and `tracing` diagnostics
    pub fn new(options: GlobInputOptions) -> Self {
        Self {
            options,
            discovery: Arc::new(GlobDiscovery),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the file discovery implementation
    pub fn with_discovery(mut self, discovery: Arc<dyn FileDiscovery>) -> Self {
        self.discovery = discovery;
        self
    }

    /// Replace the diagnostics sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn options(&self) -> &GlobInputOptions {
        &self.options
    }

    /// Validate the options, then run file discovery with `absolute` forced on.
    ///
    /// Blank or missing patterns fail with [`ConfigError`](fob_glob_config::ConfigError)
    /// before any discovery happens. Failures are reported to the sink and
    /// returned unchanged.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        validate_schema(&self.options)
            .map_err(GlobInputError::from)
            .and_then(|()| {
                let glob_options = self.options.glob_options();
                self.discovery
                    .discover(self.options.patterns.as_slice(), &glob_options)
            })
            .inspect_err(|err| {
                self.sink.report(Diagnostic::error(format!(
                    "Error processing glob patterns: {}",
                    err
                )));
            })
    }

    /// Merge discovered files into `input`.
    ///
    /// With no matches a warning is reported and `input` comes back untouched.
    pub fn apply(&self, root: impl AsRef<Path>, input: InputOption) -> Result<InputOption> {
        let files = self.discover()?;

        if files.is_empty() {
            self.sink.report(Diagnostic::warning(format!(
                "No files found matching pattern: {}",
                self.options.patterns
            )));
            return Ok(input);
        }

        match input {
            InputOption::Empty if self.options.disable_alias => {
                Ok(InputOption::List(self.append(Vec::new(), &files)))
            }
            InputOption::Empty => self.alias(root.as_ref(), EntryMap::new(), &files),
            InputOption::List(paths) => Ok(InputOption::List(self.append(paths, &files))),
            InputOption::Map(existing) => {
                if self.options.disable_alias {
                    self.sink.report(Diagnostic::warning(
                        "disableAlias has no effect on an input that is already a named map; \
                         discovered files were aliased",
                    ));
                }
                self.alias(root.as_ref(), existing, &files)
            }
        }
    }

    /// Aliased entries for the discovered files, starting from an empty input.
    ///
    /// Returns an empty map when nothing matched or aliasing is disabled.
    pub fn entries(&self, root: impl AsRef<Path>) -> Result<EntryMap> {
        Ok(self
            .apply(root, InputOption::Empty)?
            .into_map()
            .unwrap_or_default())
    }

    fn append(&self, mut paths: Vec<String>, files: &[PathBuf]) -> Vec<String> {
        debug!(count = files.len(), "appending discovered files to input list");
        paths.extend(files.iter().map(|f| f.to_string_lossy().into_owned()));
        paths
    }

    fn alias(&self, root: &Path, existing: EntryMap, files: &[PathBuf]) -> Result<InputOption> {
        let root = absolute_root(root)?;
        let entries = self.mapper().compute_entries(&root, existing, files)?;
        Ok(InputOption::Map(entries))
    }

    fn mapper(&self) -> AliasMapper {
        AliasMapper::new(self.options.naming()).strict(self.options.strict_aliases)
    }
}
