//! Filter configuration files.
//!
//! A configuration lists the navigator traits to apply, in order, each one
//! identified by its symbol:
//!
//! ```toml
//! [[traits]]
//! symbol = "projectNameRegexFilter"
//! regex = "team-.*"
//! ```
//!
//! Regular expressions are compiled while the configuration is parsed, so a
//! configuration that loads successfully only contains valid filters.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    FilterError, FilterResult, NavigatorContext, NavigatorTrait, ProjectNameRegexFilter,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// A configured navigator trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "symbol")]
pub enum TraitConfig {
    /// Keep only repositories whose project name matches a regular expression.
    #[serde(rename = "projectNameRegexFilter")]
    ProjectNameRegexFilter(ProjectNameRegexFilter),
}

impl TraitConfig {
    /// Returns the configured trait.
    pub fn as_navigator_trait(&self) -> &dyn NavigatorTrait {
        match self {
            Self::ProjectNameRegexFilter(filter) => filter,
        }
    }
}

/// The navigator traits configured for a discovery run.
///
/// # Examples
///
/// ```rust
/// use scm_filters::FilterConfig;
///
/// let config = FilterConfig::from_toml_str(r#"
/// [[traits]]
/// symbol = "projectNameRegexFilter"
/// regex = "team-.*"
/// "#)?;
///
/// assert_eq!(config.traits.len(), 1);
/// assert_eq!(config.build_context().filters().len(), 1);
/// # Ok::<(), scm_filters::FilterError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Traits in the order they decorate the navigator context
    #[serde(default)]
    pub traits: Vec<TraitConfig>,
}

impl FilterConfig {
    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - `FilterError::ConfigNotFound` if the file does not exist
    /// - `FilterError::ConfigAccess` if the file cannot be read
    /// - `FilterError::ConfigParse` if the content is not a valid
    ///   configuration, including when a regular expression does not compile
    pub fn load(path: &Path) -> FilterResult<Self> {
        debug!("Loading filter configuration from {:?}", path);

        if !path.exists() {
            return Err(FilterError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| FilterError::ConfigAccess {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(
            traits = config.traits.len(),
            "Loaded filter configuration from {:?}", path
        );
        Ok(config)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> FilterResult<Self> {
        toml::from_str(content).map_err(|e| FilterError::ConfigParse {
            reason: e.to_string(),
        })
    }

    /// Writes the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> FilterResult<()> {
        debug!("Saving filter configuration to {:?}", path);

        let content = toml::to_string_pretty(self).map_err(|e| FilterError::ConfigParse {
            reason: e.to_string(),
        })?;

        let access_error = |e: std::io::Error| FilterError::ConfigAccess {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(access_error)?;
        }
        fs::write(path, content).map_err(access_error)?;

        info!("Filter configuration saved to {:?}", path);
        Ok(())
    }

    /// Builds the navigator context for a discovery run.
    ///
    /// Each configured trait decorates the context in configuration order.
    pub fn build_context(&self) -> NavigatorContext {
        let mut context = NavigatorContext::new();
        for config in &self.traits {
            let navigator_trait = config.as_navigator_trait();
            debug!(symbol = navigator_trait.symbol(), "Decorating navigator context");
            navigator_trait.decorate_context(&mut context);
        }
        context
    }
}
