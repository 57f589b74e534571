//! Schema validation for plugin options (no filesystem checks).

use crate::error::{ConfigError, Result};
use crate::options::GlobInputOptions;

/// Trait for pluggable option validation strategies
pub trait ConfigValidator {
    fn validate(&self, options: &GlobInputOptions) -> Result<()>;
}

/// Schema-only validation
///
/// # Example
///
/// ```
/// use fob_glob_config::{ConfigValidator, GlobInputOptions, SchemaValidator};
///
/// let options = GlobInputOptions::new("src/**/*.html");
/// SchemaValidator.validate(&options).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, options: &GlobInputOptions) -> Result<()> {
        if options.patterns.is_empty() {
            return Err(ConfigError::NoPatterns);
        }

        for pattern in options.patterns.as_slice() {
            if pattern.trim().is_empty() || pattern.trim() == "!" {
                return Err(ConfigError::SchemaValidation {
                    message: "glob patterns cannot be empty".to_string(),
                    hint: Some("Remove empty strings from the 'patterns' list".to_string()),
                });
            }
        }

        for ignore in &options.options.ignore {
            if ignore.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "ignore patterns cannot be empty".to_string(),
                    hint: Some("Remove empty strings from the 'options.ignore' list".to_string()),
                });
            }
        }

        // Empty naming fields are legal, they only raise the collision odds.
        let naming = options.naming();
        for field in naming.empty_fields() {
            tracing::warn!(
                field,
                "naming field is empty; distinct files may map to the same alias"
            );
        }

        Ok(())
    }
}

/// Validate with the schema validator (convenience function)
pub fn validate_schema(options: &GlobInputOptions) -> Result<()> {
    SchemaValidator.validate(options)
}
