use super::*;
use serde_json::{from_str, to_string};

#[test]
fn test_candidate_repository_deserialization_with_project() {
    let json_str = r#"{
        "name": "api",
        "full_name": "acme/api",
        "project": { "key": "PLAT", "name": "platform" }
    }"#;

    let repo: CandidateRepository =
        from_str(json_str).expect("Failed to deserialize CandidateRepository");

    assert_eq!(repo.name(), "api");
    assert_eq!(repo.full_name(), "acme/api");
    assert_eq!(repo.project().map(Project::key), Some("PLAT"));
    assert_eq!(repo.project_name(), Some("platform"));
}

#[test]
fn test_candidate_repository_deserialization_without_project() {
    let json_str = r#"{ "name": "dotfiles" }"#;

    let repo: CandidateRepository =
        from_str(json_str).expect("Failed to deserialize CandidateRepository");

    assert_eq!(repo.name(), "dotfiles");
    assert!(repo.project().is_none());
    assert!(repo.project_name().is_none());
}

#[test]
fn test_full_name_falls_back_to_name() {
    let repo = CandidateRepository::new("dotfiles", None);

    assert_eq!(repo.full_name(), "dotfiles");
}

#[test]
fn test_candidate_repository_serialization_skips_missing_fields() {
    let repo = CandidateRepository::new("dotfiles", None);

    let json_str = to_string(&repo).expect("Failed to serialize CandidateRepository");

    let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("Failed to parse JSON");
    assert_eq!(parsed["name"], "dotfiles");
    assert!(parsed.get("project").is_none());
    assert!(parsed.get("full_name").is_none());
}
