use std::io;

use scm_filters::FilterError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the scm-filters CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// A filter could not be configured or applied.
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Failed to read the repository listing.
    ///
    /// This error wraps the underlying I/O error together with the path
    /// that was being read.
    #[error("Failed to read repository listing {path}: {source}")]
    LoadRepositories { path: String, source: io::Error },

    /// The repository listing is not valid JSON for a list of repositories.
    #[error("Failed to parse repository listing: {0}")]
    ParseRepositories(serde_json::Error),

    /// Refused to overwrite an existing configuration file.
    #[error("Configuration file already exists: {path} (use --force to replace it)")]
    ConfigExists { path: String },

    /// Failed to write results to the output stream.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
