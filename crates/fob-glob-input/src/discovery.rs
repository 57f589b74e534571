//! File discovery: resolve glob patterns to an ordered list of files.
//!
//! [`FileDiscovery`] is the seam the plugin calls through; [`GlobDiscovery`]
//! is the default implementation built on `globset` and `walkdir`.

use std::path::{Path, PathBuf};

use fob_glob_config::GlobOptions;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::alias::absolute_root;
use crate::error::{GlobInputError, Result};

/// Resolves glob patterns to files.
///
/// Implementations return an empty list when nothing matches and only fail
/// for malformed patterns or I/O errors.
pub trait FileDiscovery: Send + Sync {
    fn discover(&self, patterns: &[String], options: &GlobOptions) -> Result<Vec<PathBuf>>;
}

/// Filesystem walker matching `/`-separated paths relative to the cwd.
///
/// A pattern starting with `!` is treated as an extra ignore pattern. An
/// ignore pattern that matches a directory drops everything below it. Results
/// come back in file-name-sorted traversal order without duplicates.
///
/// Only files under the cwd are reachable: patterns climbing out with `..`
/// and absolute patterns outside the cwd are reported with a warning and
/// never match. Broken symbolic links are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobDiscovery;

impl GlobDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl FileDiscovery for GlobDiscovery {
    fn discover(&self, patterns: &[String], options: &GlobOptions) -> Result<Vec<PathBuf>> {
        let cwd = match &options.cwd {
            Some(cwd) => absolute_root(cwd)?,
            None => absolute_root(Path::new("."))?,
        };

        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for pattern in patterns {
            match pattern.strip_prefix('!') {
                Some(rest) => negative.push(normalize_pattern(rest, &cwd)),
                None => positive.push(normalize_pattern(pattern, &cwd)),
            }
        }
        negative.extend(options.ignore.iter().map(|p| normalize_pattern(p, &cwd)));

        let positive: Vec<String> = positive.into_iter().flatten().collect();
        let negative: Vec<String> = with_descendants(negative.into_iter().flatten());

        if positive.is_empty() {
            return Ok(Vec::new());
        }

        let case_insensitive = !options.case_sensitive_match;
        let include = build_glob_set(&positive, case_insensitive)?;
        let exclude = build_glob_set(&negative, case_insensitive)?;

        // A pattern that names a dot entry explicitly opts into dot matching.
        let allow_dot = options.dot
            || positive
                .iter()
                .any(|p| p.starts_with('.') || p.contains("/."));

        let mut files = Vec::new();
        for base in walk_roots(&positive, case_insensitive) {
            let start = cwd.join(&base);
            if !start.is_dir() {
                continue;
            }

            let mut walker = WalkDir::new(&start)
                .follow_links(options.follow_symbolic_links)
                .sort_by_file_name();
            if let Some(deep) = options.deep {
                let levels = base.components().count();
                if levels > deep {
                    continue;
                }
                walker = walker.max_depth(deep + 1 - levels);
            }

            let entries = walker.into_iter().filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                if !allow_dot && is_hidden(entry) {
                    return false;
                }
                !(entry.file_type().is_dir()
                    && relative_slash(&cwd, entry.path()).is_some_and(|rel| exclude.is_match(&rel)))
            });

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) if is_skippable(&err) => {
                        debug!(path = ?err.path(), error = %err, "skipping unreadable link");
                        continue;
                    }
                    Err(err) => return Err(GlobInputError::walk(&start, err)),
                };
                if !entry.file_type().is_file() {
                    continue;
                }

                let Some(relative) = relative_slash(&cwd, entry.path()) else {
                    continue;
                };

                if include.is_match(&relative) && !exclude.is_match(&relative) {
                    files.push(if options.absolute {
                        entry.path().to_path_buf()
                    } else {
                        PathBuf::from(relative)
                    });
                }
            }
        }

        debug!(cwd = %cwd.display(), count = files.len(), "glob discovery finished");
        Ok(files)
    }
}

/// Directories (relative to the cwd) the walk starts from.
///
/// Each pattern contributes its leading segments up to the first one holding
/// a wildcard. Nested bases are folded into their ancestor, and the sorted
/// component order keeps the output identical to a single walk from the cwd.
/// Case-insensitive matching cannot trust literal directory names, so it
/// always walks the whole cwd.
fn walk_roots(patterns: &[String], case_insensitive: bool) -> Vec<PathBuf> {
    if case_insensitive {
        return vec![PathBuf::new()];
    }

    let mut bases: Vec<PathBuf> = patterns
        .iter()
        .map(|p| PathBuf::from(literal_base(p)))
        .collect();
    bases.sort();
    bases.dedup();

    let mut roots: Vec<PathBuf> = Vec::new();
    for base in bases {
        if !roots.iter().any(|root| base.starts_with(root)) {
            roots.push(base);
        }
    }
    roots
}

/// Leading directory segments of `pattern` that contain no glob syntax.
fn literal_base(pattern: &str) -> &str {
    let mut end = 0;
    for (idx, _) in pattern.match_indices('/') {
        if pattern[..idx].contains(['*', '?', '[', '{']) {
            break;
        }
        end = idx;
    }
    &pattern[..end]
}

/// Add `p/**` for every ignore pattern so an ignored directory hides its
/// contents, the way a directory name in an ignore list is usually meant.
fn with_descendants(patterns: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out = Vec::new();
    for pattern in patterns {
        let trimmed = pattern.trim_end_matches('/');
        if trimmed.is_empty() {
            continue;
        }
        if !trimmed.ends_with("**") {
            out.push(format!("{trimmed}/**"));
        }
        out.push(trimmed.to_string());
    }
    out
}

/// Dangling links and symlink cycles are not worth failing the build over.
fn is_skippable(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return true;
    }
    let not_found = err
        .io_error()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
    not_found
        && err.path().is_some_and(|path| {
            path.symlink_metadata()
                .is_ok_and(|meta| meta.file_type().is_symlink())
        })
}

fn relative_slash(cwd: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(cwd).ok().map(to_slash)
}

/// Compile patterns into one set. `*` does not cross `/`, `**` does.
fn build_glob_set(patterns: &[String], case_insensitive: bool) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| GlobInputError::pattern(pattern.clone(), e))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| GlobInputError::pattern(patterns.join(","), e))
}

/// Make a pattern relative to `cwd`.
///
/// Returns `None` for patterns that point outside `cwd` (absolute ones under
/// another directory, or relative ones climbing out with `..`). Those cannot
/// match and are reported with a warning.
fn normalize_pattern(pattern: &str, cwd: &Path) -> Option<String> {
    let pattern = pattern.replace('\\', "/");

    if Path::new(&pattern).is_absolute() {
        let base = to_slash(cwd);
        let base = base.trim_end_matches('/');
        return match pattern.strip_prefix(base) {
            Some(rest) if rest.starts_with('/') => Some(rest.trim_start_matches('/').to_string()),
            _ => {
                warn!(%pattern, cwd = %cwd.display(), "absolute pattern outside cwd never matches");
                None
            }
        };
    }

    let mut relative = pattern.as_str();
    while let Some(rest) = relative.strip_prefix("./") {
        relative = rest;
    }

    if relative.split('/').any(|segment| segment == "..") {
        warn!(%pattern, cwd = %cwd.display(), "pattern leaving cwd through '..' never matches");
        return None;
    }

    Some(relative.to_string())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
