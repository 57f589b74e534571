//! Shared test utilities for fob-glob-input tests

#![allow(dead_code)]

use fob_glob_config::GlobOptions;
use fob_glob_input::{FileDiscovery, GlobInputError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Files of the sample site, relative to its root
pub const SITE_FILES: &[&str] = &[
    "index.html",
    "non-index.html",
    "subdir/index.html",
    "subdir/non-index.html",
    "ignore/ignore.html",
    "ignore/_index.html",
    "assets/app.js",
];

/// Create a temporary site tree containing [`SITE_FILES`]
pub fn site_fixture() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    for file in SITE_FILES {
        write_file(dir.path(), file);
    }
    dir
}

pub fn write_file(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(&path, "<!doctype html>").expect("write file");
    path
}

/// Glob options rooted at `dir`
pub fn options_in(dir: &Path) -> GlobOptions {
    GlobOptions::new().with_cwd(dir)
}

/// Paths relative to `root`, with `/` separators
pub fn relative_paths(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(root)
                .expect("under root")
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

/// Discovery returning a fixed list, recording nothing
pub struct FixedDiscovery(pub Vec<PathBuf>);

impl FileDiscovery for FixedDiscovery {
    fn discover(&self, _patterns: &[String], _options: &GlobOptions) -> Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}

/// Discovery that always fails like a malformed pattern would
pub struct FailingDiscovery;

impl FileDiscovery for FailingDiscovery {
    fn discover(&self, patterns: &[String], _options: &GlobOptions) -> Result<Vec<PathBuf>> {
        let pattern = patterns.first().cloned().unwrap_or_default();
        let source = globset::Glob::new("[").expect_err("unclosed class");
        Err(GlobInputError::pattern(pattern, source))
    }
}
