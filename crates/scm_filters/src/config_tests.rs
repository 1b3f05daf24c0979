use super::*;
use crate::{CandidateRepository, Project, RepositoryCatalog};
use std::fs;
use tempfile::TempDir;

const TWO_FILTERS: &str = r#"
[[traits]]
symbol = "projectNameRegexFilter"
regex = "team-.*"

[[traits]]
symbol = "projectNameRegexFilter"
regex = ".*-alpha"
"#;

#[test]
fn test_default_config_has_no_traits() {
    let config = FilterConfig::default();

    assert!(config.traits.is_empty());
    assert!(config.build_context().filters().is_empty());
}

#[test]
fn test_empty_document_parses_to_default() {
    let config = FilterConfig::from_toml_str("").expect("Empty config should parse");

    assert_eq!(config, FilterConfig::default());
}

#[test]
fn test_from_toml_str_parses_traits_in_order() {
    let config = FilterConfig::from_toml_str(TWO_FILTERS).expect("Config should parse");

    let regexes: Vec<&str> = config
        .traits
        .iter()
        .map(|t| match t {
            TraitConfig::ProjectNameRegexFilter(filter) => filter.regex(),
        })
        .collect();
    assert_eq!(regexes, vec!["team-.*", ".*-alpha"]);
}

#[test]
fn test_from_toml_str_rejects_invalid_regex() {
    let content = r#"
[[traits]]
symbol = "projectNameRegexFilter"
regex = "team-("
"#;

    let result = FilterConfig::from_toml_str(content);

    match result {
        Err(FilterError::ConfigParse { reason }) => {
            assert!(reason.contains("Invalid regular expression"));
        }
        other => panic!("Expected ConfigParse error, got {:?}", other),
    }
}

#[test]
fn test_from_toml_str_rejects_unknown_symbol() {
    let content = r#"
[[traits]]
symbol = "branchNameFilter"
regex = "main"
"#;

    assert!(matches!(
        FilterConfig::from_toml_str(content),
        Err(FilterError::ConfigParse { .. })
    ));
}

#[test]
fn test_from_toml_str_rejects_missing_regex() {
    let content = r#"
[[traits]]
symbol = "projectNameRegexFilter"
"#;

    assert!(matches!(
        FilterConfig::from_toml_str(content),
        Err(FilterError::ConfigParse { .. })
    ));
}

#[test]
fn test_build_context_applies_every_trait() {
    let config = FilterConfig::from_toml_str(TWO_FILTERS).expect("Config should parse");
    let catalog = RepositoryCatalog::new(vec![
        CandidateRepository::new("api", Some(Project::new("TA", "team-alpha"))),
        CandidateRepository::new("web", Some(Project::new("TB", "team-beta"))),
        CandidateRepository::new("infra", Some(Project::new("OPS", "ops-alpha"))),
        CandidateRepository::new("dotfiles", None),
    ]);

    let context = config.build_context();
    let included: Vec<&str> = catalog
        .included_repositories(&context)
        .expect("Filtering should succeed")
        .iter()
        .map(|r| r.name())
        .collect();

    assert_eq!(context.filters().len(), 2);
    assert_eq!(included, vec!["api", "dotfiles"]);
}

#[test]
fn test_load_nonexistent_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("missing.toml");

    let result = FilterConfig::load(&config_path);

    assert!(matches!(result, Err(FilterError::ConfigNotFound { .. })));
}

#[test]
fn test_load_invalid_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("invalid.toml");
    fs::write(&config_path, "invalid = toml = syntax").expect("Failed to write invalid TOML");

    let result = FilterConfig::load(&config_path);

    assert!(matches!(result, Err(FilterError::ConfigParse { .. })));
}

#[test]
fn test_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("filters.toml");

    let original = FilterConfig {
        traits: vec![TraitConfig::ProjectNameRegexFilter(
            ProjectNameRegexFilter::try_new("^team-.*$").expect("Pattern should compile"),
        )],
    };

    original.save(&config_path).expect("Failed to save config");
    let saved = fs::read_to_string(&config_path).expect("Failed to read saved config");
    assert!(saved.contains("symbol = \"projectNameRegexFilter\""));

    let loaded = FilterConfig::load(&config_path).expect("Failed to load config");
    assert_eq!(loaded, original);
}
