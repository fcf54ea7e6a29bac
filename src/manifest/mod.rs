//! Manifest layer
//! - error.rs: ManifestError
//! - python.rs: `__manifest__.py` dict literal parser

pub mod error;
pub mod python;

use std::path::Path;

use tracing::debug;

use crate::version::Version;

pub use error::ManifestError;
pub use python::PythonManifestParser;

/// File name of the module manifest inside a module directory
pub const MANIFEST_FILE_NAME: &str = "__manifest__.py";

/// Read the manifest at `path` and return its declared version
pub fn read_manifest_version(path: &Path) -> Result<Version, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = PythonManifestParser::new().parse_version(&content)?;
    debug!("Manifest {} declares version {:?}", path.display(), raw);

    raw.parse::<Version>()
        .map_err(|source| ManifestError::InvalidVersion { raw, source })
}
