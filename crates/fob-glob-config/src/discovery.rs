//! File-based config discovery
//!
//! Handles finding and loading plugin options from the filesystem, layered
//! over the built-in defaults and under `FOB_GLOB_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::GlobInputOptions;

/// Dedicated config file name.
pub const CONFIG_FILE: &str = "fob-glob.toml";

/// Field read from `package.json`.
pub const PACKAGE_JSON_FIELD: &str = "globInput";

/// Prefix for environment overrides, e.g. `FOB_GLOB_HOME_ALIAS=main`.
pub const ENV_PREFIX: &str = "FOB_GLOB_";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use fob_glob_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let options = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: fob-glob.toml
    /// 2. package.json (globInput field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get(PACKAGE_JSON_FIELD).is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load options from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<GlobInputOptions> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load options from the discovered file, or fall back to defaults plus
    /// environment overrides when there is none.
    pub fn load_or_default(&self) -> Result<GlobInputOptions> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => extract(base_figment()),
        }
    }

    /// Load options from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<GlobInputOptions> {
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;
        toml::from_str::<toml::Value>(&content).map_err(|e| {
            ConfigError::invalid_value("toml", format!("Invalid TOML syntax: {}", e))
        })?;

        extract(base_figment().merge(Toml::string(&content)))
    }

    fn load_from_package_json(&self, path: &Path) -> Result<GlobInputOptions> {
        let content = fs::read_to_string(path)?;

        let parsed: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::invalid_value("package.json", format!("Invalid JSON: {}", e)))?;

        let section = parsed
            .get(PACKAGE_JSON_FIELD)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("Add a 'globInput' field to your package.json".to_string()),
            })?;

        extract(base_figment().merge(Serialized::defaults(section.clone())))
    }
}

/// Built-in defaults. File providers merge on top, the environment is merged
/// last in [`extract`].
fn base_figment() -> Figment {
    Figment::new().merge(Serialized::defaults(GlobInputOptions::default()))
}

fn extract(figment: Figment) -> Result<GlobInputOptions> {
    let env = Env::prefixed(ENV_PREFIX)
        .map(|key| snake_to_camel(&key.as_str().to_ascii_lowercase()).into())
        .lowercase(false);

    figment.merge(env).extract().map_err(|e| ConfigError::InvalidValue {
        field: "configuration".to_string(),
        hint: Some(format!(
            "Check {} syntax and field types ({})",
            CONFIG_FILE, e
        )),
    })
}

/// `home_alias` -> `homeAlias`
fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Discover and load options from the current directory (convenience function)
pub fn discover() -> Result<GlobInputOptions> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
