//! Path-to-alias derivation.
//!
//! A discovered file is relativized against the project root and split into
//! segments. The last segment loses its final extension and becomes the file
//! name; the rest are joined with the directory delimiter.
//!
//! ```text
//! index.html           -> home
//! about.html           -> root_about
//! blog/index.html      -> blog
//! blog/post.html       -> blog_post
//! a/b/c.html           -> a-b_c
//! ```

use std::path::{Component, Path, PathBuf};

use fob_glob_config::NamingConfig;
use path_clean::PathClean;
use tracing::debug;

use crate::entry::EntryMap;
use crate::error::{GlobInputError, Result};

/// File stem that maps to the home alias or to its bare directory alias.
const INDEX_STEM: &str = "index";

/// Non-empty components of `file` relative to `root`.
///
/// Both paths are normalized lexically first, so `.` and `..` components and
/// doubled separators do not produce segments.
pub fn path_segments(root: &Path, file: &Path) -> Result<Vec<String>> {
    let root = root.clean();
    let cleaned = file.clean();

    let relative = cleaned
        .strip_prefix(&root)
        .map_err(|_| GlobInputError::outside_root(file, &root))?;

    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .filter(|part| !part.is_empty())
        .collect();

    if segments.is_empty() {
        return Err(GlobInputError::EmptyRelativePath {
            path: file.to_path_buf(),
        });
    }

    Ok(segments)
}

/// Remove the final `.ext` from a file name.
///
/// The extension must be non-empty and the dot must not be the first
/// character, so `.env` and `name.` are returned unchanged.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}

/// Derives entry aliases from file paths for one naming configuration.
#[derive(Debug, Clone, Default)]
pub struct AliasMapper {
    naming: NamingConfig,
    strict: bool,
}

impl AliasMapper {
    pub fn new(naming: NamingConfig) -> Self {
        Self {
            naming,
            strict: false,
        }
    }

    /// Fail with [`GlobInputError::AliasCollision`] instead of overwriting.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Alias for a single file under `root`.
    pub fn alias_for(&self, root: &Path, file: &Path) -> Result<String> {
        let segments = path_segments(root, file)?;
        Ok(self.alias_from_segments(&segments))
    }

    /// `segments` comes from [`path_segments`], which never returns an empty list.
    fn alias_from_segments(&self, segments: &[String]) -> String {
        let Some((file_name, dirs)) = segments.split_last() else {
            return self.naming.home_alias().to_string();
        };
        let base = strip_extension(file_name);

        if dirs.is_empty() {
            if base == INDEX_STEM {
                self.naming.home_alias().to_string()
            } else {
                format!(
                    "{}{}{}",
                    self.naming.root_prefix(),
                    self.naming.file_prefix(),
                    base
                )
            }
        } else {
            let dir_alias = dirs.join(self.naming.dir_delimiter());
            if base == INDEX_STEM {
                dir_alias
            } else {
                format!("{}{}{}", dir_alias, self.naming.file_prefix(), base)
            }
        }
    }

    /// Add an alias for every file to `existing`, in input order.
    ///
    /// A later file whose alias is already present replaces the earlier path
    /// and keeps the key's original position, unless the mapper is strict.
    pub fn compute_entries<I, P>(&self, root: &Path, existing: EntryMap, files: I) -> Result<EntryMap>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut entries = existing;

        for file in files {
            let file = file.as_ref();
            let alias = self.alias_for(root, file)?;
            let path = file.to_string_lossy().into_owned();

            if let Some(previous) = entries.get(&alias) {
                if self.strict {
                    return Err(GlobInputError::alias_collision(alias, previous.clone(), path));
                }
                debug!(%alias, previous = %previous, replacement = %path, "alias overwritten");
            } else {
                debug!(%alias, %path, "entry added");
            }

            entries.insert(alias, path);
        }

        Ok(entries)
    }
}

/// Merge aliased `files` into `existing` using last-write-wins.
///
/// # Example
///
/// ```
/// use fob_glob_config::NamingConfig;
/// use fob_glob_input::{EntryMap, compute_entries};
/// use std::path::Path;
///
/// let entries = compute_entries(
///     Path::new("/site"),
///     &NamingConfig::default(),
///     EntryMap::new(),
///     ["/site/index.html", "/site/blog/post.html"],
/// )
/// .unwrap();
///
/// assert_eq!(entries["home"], "/site/index.html");
/// assert_eq!(entries["blog_post"], "/site/blog/post.html");
/// ```
pub fn compute_entries<I, P>(
    root: &Path,
    config: &NamingConfig,
    existing: EntryMap,
    files: I,
) -> Result<EntryMap>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    AliasMapper::new(config.clone()).compute_entries(root, existing, files)
}

/// Resolve `root` to an absolute path, using the process cwd for relative roots.
pub fn absolute_root(root: &Path) -> Result<PathBuf> {
    if root.is_absolute() {
        Ok(root.clean())
    } else {
        Ok(std::env::current_dir()?.join(root).clean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fob_glob_config::PartialNamingConfig;

    fn alias(path: &str) -> String {
        AliasMapper::default()
            .alias_for(Path::new("/site"), &Path::new("/site").join(path))
            .unwrap()
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("index.html"), "index");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("README"), "README");
        assert_eq!(strip_extension(".env"), ".env");
        assert_eq!(strip_extension(".env.local"), ".env");
        assert_eq!(strip_extension("name."), "name.");
    }

    #[test]
    fn test_path_segments_normalizes() {
        let segments =
            path_segments(Path::new("/site/"), Path::new("/site//blog/./post.html")).unwrap();
        assert_eq!(segments, vec!["blog", "post.html"]);

        let segments =
            path_segments(Path::new("/site"), Path::new("/site/tmp/../about.html")).unwrap();
        assert_eq!(segments, vec!["about.html"]);
    }

    #[test]
    fn test_path_segments_outside_root() {
        let err = path_segments(Path::new("/site"), Path::new("/other/index.html")).unwrap_err();
        assert!(matches!(err, GlobInputError::OutsideRoot { .. }));

        // Sibling directory sharing a name prefix is still outside.
        let err = path_segments(Path::new("/site"), Path::new("/site2/index.html")).unwrap_err();
        assert!(matches!(err, GlobInputError::OutsideRoot { .. }));
    }

    #[test]
    fn test_path_segments_root_itself() {
        let err = path_segments(Path::new("/site"), Path::new("/site/")).unwrap_err();
        assert!(matches!(err, GlobInputError::EmptyRelativePath { .. }));
    }

    #[test]
    fn test_root_itself_never_becomes_home() {
        let mapper = AliasMapper::default();
        let err = mapper
            .alias_for(Path::new("/site"), Path::new("/site"))
            .unwrap_err();
        assert!(matches!(err, GlobInputError::EmptyRelativePath { .. }));

        let err = mapper
            .compute_entries(Path::new("/site"), EntryMap::new(), ["/site/."])
            .unwrap_err();
        assert!(matches!(err, GlobInputError::EmptyRelativePath { .. }));
    }

    #[test]
    fn test_depth_one_aliases() {
        assert_eq!(alias("index.html"), "home");
        assert_eq!(alias("about.html"), "root_about");
        assert_eq!(alias("Index.html"), "root_Index");
        assert_eq!(alias("INDEX.html"), "root_INDEX");
        assert_eq!(alias("index"), "home");
    }

    #[test]
    fn test_nested_aliases() {
        assert_eq!(alias("blog/post.html"), "blog_post");
        assert_eq!(alias("blog/index.html"), "blog");
        assert_eq!(alias("a/b/c.html"), "a-b_c");
        assert_eq!(alias("a/b/index.html"), "a-b");
    }

    #[test]
    fn test_custom_naming() {
        let mapper = AliasMapper::new(
            PartialNamingConfig::new()
                .with_home_alias("main")
                .with_root_prefix("app")
                .with_dir_delimiter("__")
                .with_file_prefix("--")
                .resolve(),
        );
        let root = Path::new("/site");

        assert_eq!(mapper.alias_for(root, Path::new("/site/index.html")).unwrap(), "main");
        assert_eq!(mapper.alias_for(root, Path::new("/site/about.html")).unwrap(), "app--about");
        assert_eq!(mapper.alias_for(root, Path::new("/site/a/b/c.html")).unwrap(), "a__b--c");
        assert_eq!(mapper.alias_for(root, Path::new("/site/a/b/index.html")).unwrap(), "a__b");
    }

    #[test]
    fn test_strict_collision() {
        let mapper = AliasMapper::default().strict(true);
        let err = mapper
            .compute_entries(
                Path::new("/site"),
                EntryMap::new(),
                ["/site/blog/post.html", "/site/blog/post.htm"],
            )
            .unwrap_err();

        match err {
            GlobInputError::AliasCollision {
                alias,
                existing,
                incoming,
            } => {
                assert_eq!(alias, "blog_post");
                assert_eq!(existing, "/site/blog/post.html");
                assert_eq!(incoming, "/site/blog/post.htm");
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_collision_with_existing_entry() {
        let mut existing = EntryMap::new();
        existing.insert("home".into(), "/site/main.ts".into());

        let err = AliasMapper::default()
            .strict(true)
            .compute_entries(Path::new("/site"), existing, ["/site/index.html"])
            .unwrap_err();
        assert!(matches!(err, GlobInputError::AliasCollision { .. }));
    }

    #[test]
    fn test_absolute_root_cleans() {
        let root = absolute_root(Path::new("/site/./pages/..")).unwrap();
        assert_eq!(root, PathBuf::from("/site"));
        assert!(absolute_root(Path::new("relative")).unwrap().is_absolute());
    }
}
