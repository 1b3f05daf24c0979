//! Repository filters for SCM organization discovery.
//!
//! A navigator enumerates the repositories of an organization on a hosting
//! service and asks its registered filters which repositories to skip. This
//! crate provides the filter seams ([`SourceFilter`], [`NavigatorRequest`],
//! [`NavigatorTrait`]) together with the project name regular expression
//! filter and its configuration-time validation.
//!
//! # Examples
//!
//! ```rust
//! use scm_filters::{CandidateRepository, NavigatorContext, NavigatorTrait, Project};
//! use scm_filters::{ProjectNameRegexFilter, RepositoryCatalog};
//!
//! let filter = ProjectNameRegexFilter::try_new("team-.*")?;
//!
//! let mut context = NavigatorContext::new();
//! filter.decorate_context(&mut context);
//!
//! let catalog = RepositoryCatalog::new(vec![
//!     CandidateRepository::new("api", Some(Project::new("TA", "team-alpha"))),
//!     CandidateRepository::new("legacy", Some(Project::new("OPS", "operations"))),
//! ]);
//!
//! let included = catalog.included_repositories(&context)?;
//! assert_eq!(included.len(), 1);
//! assert_eq!(included[0].name(), "api");
//! # Ok::<(), scm_filters::FilterError>(())
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod navigator;
pub mod project_name_regex_filter;
pub mod validation;

pub use config::{FilterConfig, TraitConfig};
pub use errors::{FilterError, FilterResult};
pub use models::{CandidateRepository, Project};
pub use navigator::{
    NavigatorContext, NavigatorRequest, NavigatorTrait, RepositoryCatalog, SourceFilter,
};
pub use project_name_regex_filter::{ProjectNameFilter, ProjectNameRegexFilter};
pub use validation::{check_regex, FormValidation};
