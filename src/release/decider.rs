//! New release decision

use tracing::debug;

use crate::version::{TagPrefix, Version, VersionError};

/// Outcome of comparing the manifest version with the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The manifest version is newer; carries the tag to create
    NewRelease(String),
    /// Nothing to release
    UpToDate,
}

impl Decision {
    pub fn new_tag(&self) -> Option<&str> {
        match self {
            Decision::NewRelease(tag) => Some(tag),
            Decision::UpToDate => None,
        }
    }
}

/// Decide whether `current` warrants a new release
///
/// With no prior release, any non-zero version is released.
pub fn decide(
    current: &Version,
    latest: Option<&str>,
    prefix: &TagPrefix,
) -> Result<Decision, VersionError> {
    let baseline = match latest {
        Some(tag) => prefix.parse(tag)?,
        None => current.zero_like(),
    };
    debug!("Comparing {} against {}", current, baseline);

    if *current > baseline {
        Ok(Decision::NewRelease(prefix.format(current)))
    } else {
        Ok(Decision::UpToDate)
    }
}
