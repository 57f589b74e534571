//! Alias naming rules.
//!
//! Every default lives in exactly one place (the `DEFAULT_*` constants below).
//! User input arrives as a [`PartialNamingConfig`] and is resolved into a fully
//! populated [`NamingConfig`] with [`PartialNamingConfig::resolve`].

use serde::{Deserialize, Serialize};

/// Alias used for `index.*` directly under the project root.
pub const DEFAULT_HOME_ALIAS: &str = "home";
/// Prefix for non-index files directly under the project root.
pub const DEFAULT_ROOT_PREFIX: &str = "root";
/// Joins directory segments.
pub const DEFAULT_DIR_DELIMITER: &str = "-";
/// Separates the directory part (or root prefix) from the file name.
pub const DEFAULT_FILE_PREFIX: &str = "_";

/// Fully resolved naming rules for one alias-generation pass.
///
/// Fields are read-only; build one through [`PartialNamingConfig::resolve`] or
/// take the [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConfig {
    home_alias: String,
    root_prefix: String,
    dir_delimiter: String,
    file_prefix: String,
}

impl NamingConfig {
    pub fn home_alias(&self) -> &str {
        &self.home_alias
    }

    pub fn root_prefix(&self) -> &str {
        &self.root_prefix
    }

    pub fn dir_delimiter(&self) -> &str {
        &self.dir_delimiter
    }

    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Names of the fields that are empty strings.
    ///
    /// An empty delimiter or prefix is accepted but makes distinct paths
    /// more likely to produce the same alias.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        [
            ("homeAlias", &self.home_alias),
            ("rootPrefix", &self.root_prefix),
            ("dirDelimiter", &self.dir_delimiter),
            ("filePrefix", &self.file_prefix),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        PartialNamingConfig::default().resolve()
    }
}

/// User-supplied naming overrides. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialNamingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir_delimiter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_prefix: Option<String>,
}

impl PartialNamingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home_alias(mut self, value: impl Into<String>) -> Self {
        self.home_alias = Some(value.into());
        self
    }

    pub fn with_root_prefix(mut self, value: impl Into<String>) -> Self {
        self.root_prefix = Some(value.into());
        self
    }

    pub fn with_dir_delimiter(mut self, value: impl Into<String>) -> Self {
        self.dir_delimiter = Some(value.into());
        self
    }

    pub fn with_file_prefix(mut self, value: impl Into<String>) -> Self {
        self.file_prefix = Some(value.into());
        self
    }

    /// Layer `over` on top of `self`; fields set in `over` win.
    pub fn merge(self, over: PartialNamingConfig) -> Self {
        Self {
            home_alias: over.home_alias.or(self.home_alias),
            root_prefix: over.root_prefix.or(self.root_prefix),
            dir_delimiter: over.dir_delimiter.or(self.dir_delimiter),
            file_prefix: over.file_prefix.or(self.file_prefix),
        }
    }

    /// Fill every unset field from the defaults table.
    pub fn resolve(self) -> NamingConfig {
        NamingConfig {
            home_alias: self
                .home_alias
                .unwrap_or_else(|| DEFAULT_HOME_ALIAS.to_string()),
            root_prefix: self
                .root_prefix
                .unwrap_or_else(|| DEFAULT_ROOT_PREFIX.to_string()),
            dir_delimiter: self
                .dir_delimiter
                .unwrap_or_else(|| DEFAULT_DIR_DELIMITER.to_string()),
            file_prefix: self
                .file_prefix
                .unwrap_or_else(|| DEFAULT_FILE_PREFIX.to_string()),
        }
    }
}

impl From<PartialNamingConfig> for NamingConfig {
    fn from(partial: PartialNamingConfig) -> Self {
        partial.resolve()
    }
}
