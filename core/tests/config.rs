use iconbook_core::types::{AppConfig, AppConfigError, CaseMatching, Dimension};

/// Verify a missing config file falls back to defaults.
#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = AppConfig::load(&AppConfig::path(dir.path())).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.general.base_path, "/icon-preview/");
    assert_eq!(config.sprite.source, "is-icon-defs.svg");
    assert_eq!(config.snippets.fill, "#333");
    assert_eq!(config.search.suggestion_limit, 5);
}

/// Verify partial files keep defaults for the missing keys.
#[test]
fn test_load_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(
        &path,
        r#"
[sprite]
source = "https://cdn.example.com/icons.svg"

[snippets]
width = 24
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.sprite.source, "https://cdn.example.com/icons.svg");
    assert_eq!(config.snippets.width, Dimension::try_new(24).unwrap());
    assert_eq!(config.snippets.height, Dimension::default());
    assert_eq!(config.snippets.class_name, "create");
}

/// Verify a saved config loads back unchanged.
#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = AppConfig::path(dir.path());
    let mut config = AppConfig::default();
    config.general.base_path = "/icons/".to_string();
    config.search.suggestion_limit = 3;

    config.save(&path).unwrap();

    assert_eq!(AppConfig::load(&path).unwrap(), config);
}

/// Verify zero dimensions are rejected while parsing.
#[test]
fn test_zero_dimension_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[snippets]\nheight = 0\n").unwrap();

    let result = AppConfig::load(&path);

    assert!(matches!(result, Err(AppConfigError::Parse(_))));
}

/// Verify invalid values are reported and replaced by defaults.
#[test]
fn test_validate_and_repair() {
    let mut config = AppConfig::default();
    config.sprite.source = "  ".to_string();
    config.search.suggestion_limit = 0;

    assert_eq!(config.validate().len(), 2);

    let repaired = config.with_defaults_for_invalid();
    assert!(repaired.validate().is_empty());
    assert_eq!(repaired.sprite.source, "is-icon-defs.svg");
    assert_eq!(repaired.search.suggestion_limit, 5);
}

/// Verify suggestion case handling is read from the search table.
#[test]
fn test_search_settings_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(
        &path,
        "[search]\ncase_matching = \"sensitive\"\nunicode_normalization = false\n",
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.search.case_matching, CaseMatching::Sensitive);
    assert!(!config.search.unicode_normalization);
    assert_eq!(config.search.suggestion_limit, 5);
}

/// Verify the base path is kept as written and leaves the sprite source alone.
#[test]
fn test_base_path_does_not_rewrite_sprite_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(
        &path,
        "[general]\nbase_path = \"/icons/\"\n\n[sprite]\nsource = \"defs.svg\"\n",
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.general.base_path, "/icons/");
    assert_eq!(config.sprite.source, "defs.svg");
}
