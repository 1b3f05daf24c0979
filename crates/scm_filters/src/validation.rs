//! Configuration-time validation of filter settings.
//!
//! Validation results are meant for display next to the field being edited.
//! They never influence how a configured filter behaves at discovery time.

use regex::Regex;
use std::fmt;
use tracing::debug;

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;

/// Outcome of validating a single form field.
///
/// # Examples
///
/// ```rust
/// use scm_filters::{check_regex, FormValidation};
///
/// assert_eq!(check_regex("team-.*"), FormValidation::Ok);
///
/// let result = check_regex("team-(");
/// assert!(!result.is_ok());
/// assert!(result.message().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValidation {
    /// The value is acceptable.
    Ok,
    /// The value is rejected; the message is shown to the user as is.
    Error(String),
}

impl FormValidation {
    /// Returns `true` if the value passed validation.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns the error message, if validation failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok => None,
            Self::Error(message) => Some(message),
        }
    }
}

impl fmt::Display for FormValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Error(message) => write!(f, "ERROR: {}", message),
        }
    }
}

/// Checks that `value` compiles as a regular expression.
///
/// The syntax error reported by the regex engine is passed through
/// unmodified.
pub fn check_regex(value: &str) -> FormValidation {
    match Regex::new(value) {
        Ok(_) => FormValidation::Ok,
        Err(e) => {
            debug!(pattern = value, "Rejected regular expression");
            FormValidation::Error(e.to_string())
        }
    }
}
