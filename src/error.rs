use thiserror::Error;

use crate::manifest::ManifestError;
use crate::release::RegistryError;
use crate::version::VersionError;

/// Any failure that aborts a release check
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Failed to list releases: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid release tag: {0}")]
    Tag(#[from] VersionError),
}
