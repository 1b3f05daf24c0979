//! End-to-end filtering of a discovered organization.

use scm_filters::{
    check_regex, CandidateRepository, FilterConfig, FilterError, FormValidation, NavigatorContext,
    NavigatorTrait, Project, ProjectNameRegexFilter, RepositoryCatalog,
};

fn organization() -> Vec<CandidateRepository> {
    let platform = Project::new("PLAT", "team-platform");
    let payments = Project::new("PAY", "team-payments");
    let archive = Project::new("ARC", "Archive");

    vec![
        CandidateRepository::new("gateway", Some(platform.clone())).with_full_name("acme/gateway"),
        CandidateRepository::new("billing", Some(payments)).with_full_name("acme/billing"),
        CandidateRepository::new("old-site", Some(archive)).with_full_name("acme/old-site"),
        CandidateRepository::new("scratch", None).with_full_name("jdoe/scratch"),
        CandidateRepository::new("deploy", Some(platform)).with_full_name("acme/deploy"),
    ]
}

#[test]
fn test_configured_filter_selects_team_projects() {
    let config = FilterConfig::from_toml_str(
        r#"
[[traits]]
symbol = "projectNameRegexFilter"
regex = "^team-.*$"
"#,
    )
    .expect("Config should parse");

    let catalog = RepositoryCatalog::new(organization());
    let (included, excluded) = catalog
        .partition(&config.build_context())
        .expect("Filtering should succeed");

    let included: Vec<&str> = included.iter().map(|r| r.full_name()).collect();
    let excluded: Vec<&str> = excluded.iter().map(|r| r.full_name()).collect();
    assert_eq!(
        included,
        vec!["acme/gateway", "acme/billing", "jdoe/scratch", "acme/deploy"]
    );
    assert_eq!(excluded, vec!["acme/old-site"]);
}

#[test]
fn test_filter_built_in_code_matches_configured_filter() {
    let filter = ProjectNameRegexFilter::try_new("team-platform").expect("Pattern should compile");
    let mut context = NavigatorContext::new();
    filter.decorate_context(&mut context);

    let catalog = RepositoryCatalog::new(organization());
    let included: Vec<&str> = catalog
        .included_repositories(&context)
        .expect("Filtering should succeed")
        .iter()
        .map(|r| r.name())
        .collect();

    assert_eq!(included, vec!["gateway", "scratch", "deploy"]);
}

#[test]
fn test_validation_and_construction_agree() {
    for pattern in [
        "team-.*",
        "(a|b)+",
        "team-(",
        "[z-a]",
        "\\",
        "(?x)team-.* # teams only",
        "(?x) a | b #",
    ] {
        let validation = check_regex(pattern);
        let constructed = ProjectNameRegexFilter::try_new(pattern);

        match (&validation, &constructed) {
            (FormValidation::Ok, Ok(_)) => {}
            (FormValidation::Error(message), Err(FilterError::InvalidPattern { reason, .. })) => {
                assert_eq!(message, reason);
            }
            _ => panic!(
                "Validation {:?} disagrees with construction {:?} for '{}'",
                validation, constructed, pattern
            ),
        }
    }
}
