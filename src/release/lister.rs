//! Lister trait for fetching existing release tags

#[cfg(test)]
use mockall::automock;

use crate::release::error::RegistryError;

/// Trait for fetching the release tags of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseLister: Send + Sync {
    /// Fetches the tag names of all releases of a repository
    ///
    /// # Arguments
    /// * `repository` - The repository in `owner/repo` form
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names in the order the API returned them
    /// * `Err(RegistryError)` - If the fetch fails
    async fn list_release_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError>;
}
