//! Repository data as seen by filters.
//!
//! These types describe what a navigator knows about a discovered
//! repository. Filters only read them.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A project on the hosting service.
///
/// Projects group repositories. Each project has a short key and a
/// human-readable display name.
///
/// # Examples
///
/// ```rust
/// use scm_filters::Project;
///
/// let project = Project::new("PLAT", "platform-team");
/// assert_eq!(project.key(), "PLAT");
/// assert_eq!(project.name(), "platform-team");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Project {
    /// The short project key
    key: String,
    /// The display name of the project
    name: String,
}

impl Project {
    /// Creates a new project from its key and display name.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    /// Returns the short project key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display name of the project.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A repository discovered by a navigator, pending filter decisions.
///
/// A repository may not belong to any project, for example a personal
/// repository. In that case [`CandidateRepository::project`] returns `None`.
///
/// # Examples
///
/// ```rust
/// use scm_filters::{CandidateRepository, Project};
///
/// let repo = CandidateRepository::new("api", Some(Project::new("PLAT", "platform")))
///     .with_full_name("acme/api");
///
/// assert_eq!(repo.name(), "api");
/// assert_eq!(repo.full_name(), "acme/api");
/// assert_eq!(repo.project_name(), Some("platform"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CandidateRepository {
    /// The name of the repository
    name: String,
    /// The full name of the repository (owner/name), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    /// The project that owns the repository, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    project: Option<Project>,
}

impl CandidateRepository {
    /// Creates a new candidate repository.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the repository (without owner)
    /// * `project` - The owning project, or `None` when the repository has none
    pub fn new(name: impl Into<String>, project: Option<Project>) -> Self {
        Self {
            name: name.into(),
            full_name: None,
            project,
        }
    }

    /// Sets the full name (owner/name) of the repository.
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Returns the name of the repository.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full name of the repository.
    ///
    /// Falls back to the plain name when no full name is known.
    pub fn full_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }

    /// Returns the project owning the repository, if any.
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// Returns the display name of the owning project, if any.
    pub fn project_name(&self) -> Option<&str> {
        self.project.as_ref().map(Project::name)
    }
}
