use std::path::PathBuf;

use thiserror::Error;

use crate::version::VersionError;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    #[error("Invalid syntax: {0}")]
    Syntax(String),

    #[error("Manifest must be a single dict literal, found {0}")]
    NotADictionary(String),

    #[error("Manifest has no 'version' key")]
    MissingVersion,

    #[error("Manifest 'version' must be a string literal, found {0}")]
    VersionNotString(String),

    #[error("Invalid manifest version {raw:?}: {source}")]
    InvalidVersion {
        raw: String,
        #[source]
        source: VersionError,
    },
}
