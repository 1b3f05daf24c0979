//! Seams between repository filters and the navigator that drives discovery.
//!
//! A navigator enumerates the repositories of an organization and, for each
//! one, asks the filters registered in its [`NavigatorContext`] whether the
//! repository should be skipped. Filters look repositories up through the
//! [`NavigatorRequest`] they are handed.

use crate::{CandidateRepository, FilterResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod tests;

/// A predicate deciding whether a discovered repository is skipped.
///
/// Navigators may evaluate filters for many repositories concurrently, so
/// implementations must be `Send + Sync`.
pub trait SourceFilter: Send + Sync {
    /// Returns `true` if the named repository must be excluded.
    ///
    /// # Errors
    ///
    /// Returns an error if the decision cannot be made, for example when the
    /// request does not know the repository. Errors are never treated as an
    /// include or exclude decision.
    fn is_excluded(
        &self,
        request: &dyn NavigatorRequest,
        repository_name: &str,
    ) -> FilterResult<bool>;
}

/// The in-flight discovery request, as seen by filters.
pub trait NavigatorRequest {
    /// Looks up a discovered repository by name.
    fn repository(&self, name: &str) -> Option<&CandidateRepository>;
}

/// A configurable extension that contributes behaviour to a navigator.
///
/// Traits are configured once and then asked to decorate the context of
/// every discovery run.
pub trait NavigatorTrait {
    /// The stable identifier used for this trait in configuration files.
    fn symbol(&self) -> &'static str;

    /// A human-readable name for this trait.
    fn display_name(&self) -> &'static str;

    /// Registers this trait's filters (or other behaviour) on `context`.
    fn decorate_context(&self, context: &mut NavigatorContext);
}

/// The filters that apply to one discovery run.
///
/// # Examples
///
/// ```rust
/// use scm_filters::{CandidateRepository, NavigatorContext, RepositoryCatalog};
///
/// let context = NavigatorContext::new();
/// let catalog = RepositoryCatalog::new(vec![CandidateRepository::new("api", None)]);
///
/// // Without filters nothing is excluded.
/// assert!(!context.is_excluded(&catalog, "api")?);
/// # Ok::<(), scm_filters::FilterError>(())
/// ```
#[derive(Clone, Default)]
pub struct NavigatorContext {
    filters: Vec<Arc<dyn SourceFilter>>,
}

impl NavigatorContext {
    /// Creates a context with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a filter. Filters are evaluated in registration order.
    pub fn with_filter(&mut self, filter: impl SourceFilter + 'static) -> &mut Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Returns the registered filters.
    pub fn filters(&self) -> &[Arc<dyn SourceFilter>] {
        &self.filters
    }

    /// Returns `true` if any registered filter excludes the repository.
    ///
    /// Evaluation stops at the first filter that excludes the repository or
    /// fails.
    pub fn is_excluded(
        &self,
        request: &dyn NavigatorRequest,
        repository_name: &str,
    ) -> FilterResult<bool> {
        for (index, filter) in self.filters.iter().enumerate() {
            if filter.is_excluded(request, repository_name)? {
                trace!(
                    repository = repository_name,
                    filter_index = index,
                    "Repository excluded by filter"
                );
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl fmt::Debug for NavigatorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigatorContext")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// An in-memory set of discovered repositories.
///
/// Serves as the [`NavigatorRequest`] for a discovery run over a known list
/// of repositories. Repository names are unique; when the same name is
/// given twice the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct RepositoryCatalog {
    repositories: Vec<CandidateRepository>,
    index: HashMap<String, usize>,
}

impl RepositoryCatalog {
    /// Creates a catalog from the repositories a navigator discovered.
    pub fn new(repositories: Vec<CandidateRepository>) -> Self {
        let mut kept = Vec::with_capacity(repositories.len());
        let mut index = HashMap::with_capacity(repositories.len());

        for repository in repositories {
            if index.contains_key(repository.name()) {
                warn!(
                    repository = repository.name(),
                    "Ignoring duplicate repository in catalog"
                );
                continue;
            }
            index.insert(repository.name().to_string(), kept.len());
            kept.push(repository);
        }

        Self {
            repositories: kept,
            index,
        }
    }

    /// Returns all repositories in discovery order.
    pub fn repositories(&self) -> &[CandidateRepository] {
        &self.repositories
    }

    /// Returns the number of distinct repositories in the catalog.
    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    /// Returns `true` if the catalog holds no repositories.
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Splits the catalog into included and excluded repositories.
    ///
    /// Both lists keep discovery order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a filter.
    pub fn partition(
        &self,
        context: &NavigatorContext,
    ) -> FilterResult<(Vec<&CandidateRepository>, Vec<&CandidateRepository>)> {
        let mut included = Vec::new();
        let mut excluded = Vec::new();

        for repository in &self.repositories {
            if context.is_excluded(self, repository.name())? {
                excluded.push(repository);
            } else {
                included.push(repository);
            }
        }

        debug!(
            included = included.len(),
            excluded = excluded.len(),
            "Applied navigator filters"
        );
        Ok((included, excluded))
    }

    /// Returns the repositories no filter excludes, in discovery order.
    pub fn included_repositories(
        &self,
        context: &NavigatorContext,
    ) -> FilterResult<Vec<&CandidateRepository>> {
        self.partition(context).map(|(included, _)| included)
    }
}

impl NavigatorRequest for RepositoryCatalog {
    fn repository(&self, name: &str) -> Option<&CandidateRepository> {
        self.index
            .get(name)
            .and_then(|&position| self.repositories.get(position))
    }
}
