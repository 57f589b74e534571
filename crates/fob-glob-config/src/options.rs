//! Plugin options: patterns, matching options and naming overrides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::naming::{NamingConfig, PartialNamingConfig};

/// Pattern searched when none is configured.
pub const DEFAULT_PATTERN: &str = "**/*.html";

/// One or more glob patterns.
///
/// Deserializes from either a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PatternsRepr", into = "Vec<String>")]
pub struct Patterns(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum PatternsRepr {
    One(String),
    Many(Vec<String>),
}

impl From<PatternsRepr> for Patterns {
    fn from(repr: PatternsRepr) -> Self {
        match repr {
            PatternsRepr::One(pattern) => Self(vec![pattern]),
            PatternsRepr::Many(patterns) => Self(patterns),
        }
    }
}

impl From<Patterns> for Vec<String> {
    fn from(patterns: Patterns) -> Self {
        patterns.0
    }
}

impl Patterns {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(patterns.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self(vec![DEFAULT_PATTERN.to_string()])
    }
}

impl From<&str> for Patterns {
    fn from(pattern: &str) -> Self {
        Self(vec![pattern.to_string()])
    }
}

impl From<String> for Patterns {
    fn from(pattern: String) -> Self {
        Self(vec![pattern])
    }
}

impl From<Vec<String>> for Patterns {
    fn from(patterns: Vec<String>) -> Self {
        Self(patterns)
    }
}

impl std::fmt::Display for Patterns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

/// Matching options handed to file discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobOptions {
    /// Directory patterns are resolved against. `None` means the process cwd.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Patterns excluded from the results.
    pub ignore: Vec<String>,

    /// Return absolute paths.
    pub absolute: bool,

    /// Match entries whose name starts with a dot.
    pub dot: bool,

    pub case_sensitive_match: bool,

    pub follow_symbolic_links: bool,

    /// Maximum directory depth below `cwd`. `None` is unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep: Option<usize>,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            ignore: Vec::new(),
            absolute: true,
            dot: false,
            case_sensitive_match: true,
            follow_symbolic_links: true,
            deep: None,
        }
    }
}

impl GlobOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_ignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn with_dot(mut self, enabled: bool) -> Self {
        self.dot = enabled;
        self
    }

    pub fn with_case_sensitive_match(mut self, enabled: bool) -> Self {
        self.case_sensitive_match = enabled;
        self
    }

    pub fn with_deep(mut self, depth: usize) -> Self {
        self.deep = Some(depth);
        self
    }

    /// Discovered paths are always absolute; callers cannot turn this off.
    pub fn forced_absolute(mut self) -> Self {
        self.absolute = true;
        self
    }
}

/// Complete option set for the glob input plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobInputOptions {
    #[serde(default)]
    pub patterns: Patterns,

    #[serde(default)]
    pub options: GlobOptions,

    /// Append discovered files as a plain list instead of aliasing them.
    #[serde(default)]
    pub disable_alias: bool,

    /// Fail on duplicate aliases instead of letting the later file win.
    #[serde(default)]
    pub strict_aliases: bool,

    #[serde(flatten)]
    pub naming: PartialNamingConfig,
}

impl GlobInputOptions {
    pub fn new(patterns: impl Into<Patterns>) -> Self {
        Self {
            patterns: patterns.into(),
            ..Self::default()
        }
    }

    /// Create from serde_json::Value (for programmatic config from a host tool)
    ///
    /// # Example
    ///
    /// ```
    /// use fob_glob_config::GlobInputOptions;
    /// use serde_json::json;
    ///
    /// let options = GlobInputOptions::from_value(json!({
    ///     "patterns": "src/**/*.html",
    ///     "homeAlias": "main"
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(options.patterns.as_slice(), ["src/**/*.html"]);
    /// assert_eq!(options.naming().home_alias(), "main");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid_value("options", e))
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid_value("options", e))
    }

    pub fn with_options(mut self, options: GlobOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_disable_alias(mut self, disabled: bool) -> Self {
        self.disable_alias = disabled;
        self
    }

    pub fn with_strict_aliases(mut self, strict: bool) -> Self {
        self.strict_aliases = strict;
        self
    }

    pub fn with_naming(mut self, naming: PartialNamingConfig) -> Self {
        self.naming = self.naming.merge(naming);
        self
    }

    /// Resolved naming rules.
    pub fn naming(&self) -> NamingConfig {
        self.naming.clone().resolve()
    }

    /// Matching options with `absolute` forced on.
    pub fn glob_options(&self) -> GlobOptions {
        self.options.clone().forced_absolute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patterns_accept_string_or_list() {
        let one: Patterns = serde_json::from_value(json!("**/*.html")).unwrap();
        assert_eq!(one.as_slice(), ["**/*.html"]);

        let many: Patterns = serde_json::from_value(json!(["a/*.html", "b/*.html"])).unwrap();
        assert_eq!(many.as_slice(), ["a/*.html", "b/*.html"]);
        assert_eq!(many.to_string(), "a/*.html,b/*.html");
    }

    #[test]
    fn test_glob_options_forced_absolute() {
        let options = GlobInputOptions::from_value(json!({
            "patterns": "**/*.html",
            "options": { "absolute": false, "ignore": ["**/ignore.html"] }
        }))
        .unwrap();

        assert!(!options.options.absolute);
        let glob = options.glob_options();
        assert!(glob.absolute);
        assert_eq!(glob.ignore, vec!["**/ignore.html".to_string()]);
    }

    #[test]
    fn test_flattened_naming_fields() {
        let options = GlobInputOptions::from_value(json!({
            "patterns": ["index.html"],
            "homeAlias": "main",
            "rootPrefix": "app",
            "dirDelimiter": "__",
            "filePrefix": "--"
        }))
        .unwrap();

        let naming = options.naming();
        assert_eq!(naming.home_alias(), "main");
        assert_eq!(naming.root_prefix(), "app");
        assert_eq!(naming.dir_delimiter(), "__");
        assert_eq!(naming.file_prefix(), "--");
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let err = GlobInputOptions::from_value(json!({ "disableAlias": "yes" })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
