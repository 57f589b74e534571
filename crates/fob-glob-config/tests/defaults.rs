//! Tests for default values and edge cases.

use fob_glob_config::{
    DEFAULT_DIR_DELIMITER, DEFAULT_FILE_PREFIX, DEFAULT_HOME_ALIAS, DEFAULT_ROOT_PREFIX,
    GlobInputOptions, GlobOptions, NamingConfig, PartialNamingConfig, Patterns,
};

#[test]
fn glob_input_options_defaults() {
    let options = GlobInputOptions::default();
    assert_eq!(options.patterns.as_slice(), ["**/*.html"]);
    assert!(!options.disable_alias);
    assert!(!options.strict_aliases);
    assert_eq!(options.naming, PartialNamingConfig::default());
    assert_eq!(options.options, GlobOptions::default());
}

#[test]
fn glob_options_defaults() {
    let options = GlobOptions::default();
    assert!(options.cwd.is_none());
    assert!(options.ignore.is_empty());
    assert!(options.absolute);
    assert!(!options.dot);
    assert!(options.case_sensitive_match);
    assert!(options.follow_symbolic_links);
    assert!(options.deep.is_none());
}

#[test]
fn naming_defaults_match_constants() {
    let naming = NamingConfig::default();
    assert_eq!(naming.home_alias(), DEFAULT_HOME_ALIAS);
    assert_eq!(naming.root_prefix(), DEFAULT_ROOT_PREFIX);
    assert_eq!(naming.dir_delimiter(), DEFAULT_DIR_DELIMITER);
    assert_eq!(naming.file_prefix(), DEFAULT_FILE_PREFIX);
}

#[test]
fn naming_from_partial_equals_resolve() {
    let partial = PartialNamingConfig::new().with_root_prefix("app");
    let via_from: NamingConfig = partial.clone().into();
    assert_eq!(via_from, partial.resolve());
    assert_eq!(via_from.root_prefix(), "app");
}

#[test]
fn empty_json_object_yields_defaults() {
    let options = GlobInputOptions::from_value(serde_json::json!({})).unwrap();
    assert_eq!(options, GlobInputOptions::default());
}

#[test]
fn builder_setters_compose() {
    let options = GlobInputOptions::new(Patterns::new(["a/*.html", "b/*.html"]))
        .with_disable_alias(true)
        .with_strict_aliases(true)
        .with_naming(PartialNamingConfig::new().with_home_alias("main"))
        .with_naming(PartialNamingConfig::new().with_file_prefix("--"));

    assert!(options.disable_alias);
    assert!(options.strict_aliases);
    let naming = options.naming();
    assert_eq!(naming.home_alias(), "main");
    assert_eq!(naming.file_prefix(), "--");
    assert_eq!(naming.dir_delimiter(), "-");
}

#[test]
fn round_trips_through_value() {
    let options = GlobInputOptions::new("src/**/*.html")
        .with_options(GlobOptions::new().with_ignore(["**/_*.html"]).with_deep(3))
        .with_naming(PartialNamingConfig::new().with_dir_delimiter("__"));

    let value = options.to_value().unwrap();
    assert_eq!(value["dirDelimiter"], "__");
    assert_eq!(value["options"]["deep"], 3);
    assert!(value.get("homeAlias").is_none());

    let back = GlobInputOptions::from_value(value).unwrap();
    assert_eq!(back, options);
}
