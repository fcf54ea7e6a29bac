use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;
use thiserror::Error;

use crate::manifest::MANIFEST_FILE_NAME;
use crate::release::TagOrdering;
use crate::release::github::DEFAULT_BASE_URL;
use crate::version::TagPrefix;

// =============================================================================
// Environment variables
// =============================================================================

pub const ENV_API_URL: &str = "GITHUB_API_URL";
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_MODULE_NAME: &str = "MODULE_NAME";
pub const ENV_MODULE_PATH: &str = "MODULE_PATH";
pub const ENV_WORKSPACE: &str = "GITHUB_WORKSPACE";
pub const ENV_OUTPUT: &str = "GITHUB_OUTPUT";
pub const ENV_TAG_ORDERING: &str = "TAG_ORDERING";

/// Timeout for the releases request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid repository {0:?}: expected owner/repo")]
    InvalidRepository(String),

    #[error("Invalid tag ordering {0:?}: expected lexicographic or numeric")]
    InvalidTagOrdering(String),
}

/// Run configuration, built once at startup
#[derive(Debug)]
pub struct Config {
    /// GitHub API base URL
    pub api_url: String,
    /// Repository in `owner/repo` form whose releases are listed
    pub repository: String,
    pub token: SecretString,
    pub tag_prefix: TagPrefix,
    pub manifest_path: PathBuf,
    /// File the `new-version` output is appended to
    pub github_output: Option<PathBuf>,
    pub tag_ordering: TagOrdering,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from a variable lookup
    ///
    /// Empty values are treated as unset, matching how Actions passes
    /// unset inputs.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let repository = require(ENV_REPOSITORY)?;
        if !is_valid_repository(&repository) {
            return Err(ConfigError::InvalidRepository(repository));
        }

        let token = SecretString::from(require(ENV_TOKEN)?);

        let module_dir = match get(ENV_MODULE_PATH) {
            Some(path) => path,
            None => require(ENV_WORKSPACE)?,
        };

        let tag_ordering = match get(ENV_TAG_ORDERING) {
            Some(value) => TagOrdering::from_str(&value, true)
                .map_err(|_| ConfigError::InvalidTagOrdering(value))?,
            None => TagOrdering::default(),
        };

        Ok(Self {
            api_url: get(ENV_API_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            repository,
            token,
            tag_prefix: TagPrefix::new(get(ENV_MODULE_NAME)),
            manifest_path: PathBuf::from(module_dir).join(MANIFEST_FILE_NAME),
            github_output: get(ENV_OUTPUT).map(PathBuf::from),
            tag_ordering,
            fetch_timeout: Duration::from_millis(FETCH_TIMEOUT_MS),
        })
    }

    /// Apply command-line overrides on top of the environment values
    pub fn with_overrides(
        mut self,
        manifest_path: Option<PathBuf>,
        tag_ordering: Option<TagOrdering>,
    ) -> Self {
        if let Some(path) = manifest_path {
            self.manifest_path = path;
        }
        if let Some(ordering) = tag_ordering {
            self.tag_ordering = ordering;
        }
        self
    }
}

fn is_valid_repository(repository: &str) -> bool {
    matches!(
        repository.split_once('/'),
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
    )
}
