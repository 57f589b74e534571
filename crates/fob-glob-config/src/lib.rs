//! # fob-glob-config
//!
//! Configuration surface for the glob input plugin: naming rules with a single
//! defaults table, matching options for file discovery, and layered loading
//! (defaults, then `fob-glob.toml` or `package.json`, then `FOB_GLOB_*`).

pub mod discovery;
pub mod error;
pub mod naming;
pub mod options;
pub mod validation;

pub use discovery::{ConfigDiscovery, discover};
pub use error::*;
pub use naming::*;
pub use options::*;
pub use validation::{ConfigValidator, SchemaValidator, validate_schema};
