//! Command implementations for the scm-filters CLI.
//!
//! Commands write their results to the supplied output stream so they can
//! be exercised without a terminal.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use clap::Args;
use scm_filters::{
    check_regex, CandidateRepository, FilterConfig, ProjectNameRegexFilter, RepositoryCatalog,
    TraitConfig,
};
use tracing::{debug, info};

use crate::errors::Error;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// Arguments for the `filter` command.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Path to the TOML filter configuration
    #[arg(short, long)]
    pub config: PathBuf,

    /// Path to a JSON array of discovered repositories
    #[arg(short, long)]
    pub repositories: PathBuf,

    /// Also list the repositories that were excluded
    #[arg(long)]
    pub show_excluded: bool,
}

/// Arguments for the `init` command.
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Path of the TOML filter configuration to create
    #[arg(short, long)]
    pub config: PathBuf,

    /// Regular expression that project names must match
    #[arg(long)]
    pub project_regex: String,

    /// Replace the configuration file if it already exists
    #[arg(long)]
    pub force: bool,
}

/// Validates a regular expression and reports the outcome.
///
/// Returns `true` if the expression is valid.
pub fn check_regex_cmd(value: &str, out: &mut impl Write) -> Result<bool, Error> {
    let validation = check_regex(value);
    writeln!(out, "{}", validation)?;
    Ok(validation.is_ok())
}

/// Reads the list of discovered repositories from a JSON file.
pub fn load_repositories(path: &Path) -> Result<Vec<CandidateRepository>, Error> {
    debug!("Loading repository listing from {:?}", path);

    let content = fs::read_to_string(path).map_err(|e| Error::LoadRepositories {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(Error::ParseRepositories)
}

/// Applies the configured filters to the repository listing.
///
/// Prints the full names of the repositories that pass every filter, one
/// per line, in listing order.
pub fn filter_cmd(args: &FilterArgs, out: &mut impl Write) -> Result<(), Error> {
    let config = FilterConfig::load(&args.config)?;
    let catalog = RepositoryCatalog::new(load_repositories(&args.repositories)?);
    if catalog.is_empty() {
        info!("Repository listing is empty");
    } else {
        debug!(repositories = catalog.len(), "Loaded repository listing");
    }

    let (included, excluded) = catalog.partition(&config.build_context())?;
    info!(
        included = included.len(),
        excluded = excluded.len(),
        "Filtered repository listing"
    );

    for repository in &included {
        writeln!(out, "{}", repository.full_name())?;
    }

    if args.show_excluded {
        for repository in &excluded {
            writeln!(out, "excluded: {}", repository.full_name())?;
        }
    }

    Ok(())
}

/// Writes a filter configuration holding a single project name filter.
pub fn init_cmd(args: &InitArgs, out: &mut impl Write) -> Result<(), Error> {
    if args.config.exists() && !args.force {
        return Err(Error::ConfigExists {
            path: args.config.display().to_string(),
        });
    }

    let filter = ProjectNameRegexFilter::try_new(args.project_regex.as_str())?;
    let config = FilterConfig {
        traits: vec![TraitConfig::ProjectNameRegexFilter(filter)],
    };
    config.save(&args.config)?;

    writeln!(out, "Wrote {}", args.config.display())?;
    Ok(())
}
