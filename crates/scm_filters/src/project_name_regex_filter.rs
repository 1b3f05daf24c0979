//! Filtering discovered repositories by the name of their project.
//!
//! The filter keeps a repository when the display name of its project
//! matches a configured regular expression in full, and excludes it
//! otherwise. Repositories that do not belong to a project are always kept.

use crate::{
    check_regex, CandidateRepository, FilterError, FilterResult, FormValidation,
    NavigatorContext, NavigatorRequest, NavigatorTrait, SourceFilter,
};
use regex::Regex;
use regex_syntax::Parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(test)]
#[path = "project_name_regex_filter_tests.rs"]
mod tests;

/// Configuration symbol of the project name filter.
pub const SYMBOL: &str = "projectNameRegexFilter";

/// Display name of the project name filter.
pub const DISPLAY_NAME: &str = "Filter by project name (with regular expression)";

/// Excludes repositories whose project name does not match a regular expression.
///
/// The pattern must match the entire project name. Matching is
/// case-sensitive. The pattern is compiled once, when the filter is created
/// or deserialized, and the filter is immutable afterwards.
///
/// # Examples
///
/// ```rust
/// use scm_filters::{CandidateRepository, Project, ProjectNameRegexFilter};
///
/// let filter = ProjectNameRegexFilter::try_new("team-.*")?;
///
/// let alpha = CandidateRepository::new("api", Some(Project::new("TA", "team-alpha")));
/// let ops = CandidateRepository::new("infra", Some(Project::new("OPS", "operations")));
/// let personal = CandidateRepository::new("dotfiles", None);
///
/// assert!(!filter.is_excluded(&alpha));
/// assert!(filter.is_excluded(&ops));
/// assert!(!filter.is_excluded(&personal));
/// # Ok::<(), scm_filters::FilterError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProjectNameRegexSettings", into = "ProjectNameRegexSettings")]
pub struct ProjectNameRegexFilter {
    /// The regular expression as configured
    regex: String,
    /// The configured expression, anchored to the whole input
    pattern: Regex,
}

impl ProjectNameRegexFilter {
    /// Creates a filter from a regular expression.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidPattern` if `regex` does not compile.
    /// The error carries the regex engine's message.
    pub fn try_new(regex: impl Into<String>) -> FilterResult<Self> {
        let regex = regex.into();

        // Compile the expression on its own first so syntax errors refer to
        // the text the user wrote.
        Regex::new(&regex).map_err(|e| invalid_pattern(&regex, e))?;

        // Anchor the parsed expression rather than the source text. The
        // printed form has no comments or verbose-mode whitespace that could
        // swallow the closing anchor.
        let hir = Parser::new()
            .parse(&regex)
            .map_err(|e| invalid_pattern(&regex, e))?;
        let pattern =
            Regex::new(&format!(r"\A(?:{})\z", hir)).map_err(|e| invalid_pattern(&regex, e))?;

        debug!(regex = regex.as_str(), "Compiled project name filter");
        Ok(Self { regex, pattern })
    }

    /// Returns the regular expression as configured.
    pub fn regex(&self) -> &str {
        &self.regex
    }

    /// Returns the compiled expression used for matching.
    ///
    /// The returned expression only matches the entire input.
    pub fn compiled_pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Returns `true` if `repository` must be excluded.
    ///
    /// A repository without a project is never excluded.
    pub fn is_excluded(&self, repository: &CandidateRepository) -> bool {
        excludes(&self.pattern, repository)
    }

    /// Validates a regular expression entered for this filter.
    pub fn check_regex(value: &str) -> FormValidation {
        check_regex(value)
    }
}

impl PartialEq for ProjectNameRegexFilter {
    fn eq(&self, other: &Self) -> bool {
        self.regex == other.regex
    }
}

impl Eq for ProjectNameRegexFilter {}

impl NavigatorTrait for ProjectNameRegexFilter {
    fn symbol(&self) -> &'static str {
        SYMBOL
    }

    fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    fn decorate_context(&self, context: &mut NavigatorContext) {
        context.with_filter(ProjectNameFilter {
            pattern: self.pattern.clone(),
        });
    }
}

/// The source filter registered by [`ProjectNameRegexFilter`].
///
/// Holds only the compiled pattern.
#[derive(Debug, Clone)]
pub struct ProjectNameFilter {
    pattern: Regex,
}

impl SourceFilter for ProjectNameFilter {
    fn is_excluded(
        &self,
        request: &dyn NavigatorRequest,
        repository_name: &str,
    ) -> FilterResult<bool> {
        let repository =
            request
                .repository(repository_name)
                .ok_or_else(|| FilterError::RepositoryNotFound {
                    name: repository_name.to_string(),
                })?;

        Ok(excludes(&self.pattern, repository))
    }
}

fn excludes(pattern: &Regex, repository: &CandidateRepository) -> bool {
    let Some(project_name) = repository.project_name() else {
        return false;
    };

    let excluded = !pattern.is_match(project_name);
    trace!(
        repository = repository.name(),
        project = project_name,
        excluded,
        "Evaluated project name filter"
    );
    excluded
}

fn invalid_pattern(regex: &str, error: impl std::fmt::Display) -> FilterError {
    FilterError::InvalidPattern {
        pattern: regex.to_string(),
        reason: error.to_string(),
    }
}

/// Serialized form of [`ProjectNameRegexFilter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectNameRegexSettings {
    regex: String,
}

impl TryFrom<ProjectNameRegexSettings> for ProjectNameRegexFilter {
    type Error = FilterError;

    fn try_from(settings: ProjectNameRegexSettings) -> Result<Self, Self::Error> {
        Self::try_new(settings.regex)
    }
}

impl From<ProjectNameRegexFilter> for ProjectNameRegexSettings {
    fn from(filter: ProjectNameRegexFilter) -> Self {
        Self {
            regex: filter.regex,
        }
    }
}
