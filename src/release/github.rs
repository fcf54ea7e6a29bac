//! GitHub Releases API lister implementation

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::release::error::RegistryError;
use crate::release::lister::ReleaseLister;

/// Default base URL for GitHub API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Versioned media type for the REST API
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

const USER_AGENT: &str = concat!("release-check/", env!("CARGO_PKG_VERSION"));

/// Response from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Lister implementation for GitHub Releases API
pub struct GitHubReleases {
    client: reqwest::Client,
    base_url: String,
    token: SecretString,
}

impl GitHubReleases {
    /// Creates a new lister for the given API base URL
    pub fn new(
        base_url: &str,
        token: SecretString,
        timeout: Duration,
    ) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait::async_trait]
impl ReleaseLister for GitHubReleases {
    async fn list_release_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        // Single page only; the API default page size applies
        let url = format!("{}/repos/{}/releases", self.base_url, repository);
        debug!("Fetching releases from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", ACCEPT_HEADER)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repository.to_string()));
        }

        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            == Some("0");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && rate_limit_exhausted)
        {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            warn!("GitHub API rejected credentials with status {}", status);
            return Err(RegistryError::Unauthorized {
                repository: repository.to_string(),
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let releases: Vec<Release> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(releases.into_iter().map(|r| r.tag_name).collect())
    }
}
