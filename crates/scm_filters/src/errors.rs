//! Filter error types.
//!
//! Errors raised while building filters from configuration and while
//! applying them to the repositories a navigator discovers.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while configuring or applying repository filters.
///
/// An invalid pattern is a deterministic input error: callers surface it to
/// the user instead of retrying. Errors raised while filtering are never
/// turned into an include or exclude decision.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The supplied string is not a valid regular expression.
    ///
    /// `reason` carries the regex engine's syntax error unmodified.
    #[error("Invalid regular expression '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The navigator request could not resolve a repository by name.
    #[error("Repository not found in navigator request: {name}")]
    RepositoryNotFound { name: String },

    #[error("Filter configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Failed to access filter configuration file: {path} - {reason}")]
    ConfigAccess { path: String, reason: String },

    #[error("Failed to parse filter configuration: {reason}")]
    ConfigParse { reason: String },
}

/// Result type alias for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;
