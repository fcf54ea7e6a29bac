//! Release tag naming
//!
//! Tags take the form `[<module>-]v<version>`, e.g. `v12.0.1.2.3` or
//! `mymod-v12.0.1.2.3`. The same prefix is used for searching existing
//! releases and for naming the new one.

use crate::version::error::VersionError;
use crate::version::number::Version;

/// Marker between the optional module prefix and the version
const VERSION_MARKER: char = 'v';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPrefix {
    module_name: Option<String>,
}

impl TagPrefix {
    pub fn new(module_name: Option<String>) -> Self {
        Self {
            module_name: module_name.filter(|name| !name.is_empty()),
        }
    }

    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    /// `[<module>-]`
    fn module_part(&self) -> String {
        self.module_name
            .as_ref()
            .map(|name| format!("{}-", name))
            .unwrap_or_default()
    }

    /// `[<module>-]v`, the start shared by every tag of this module
    pub fn tag_start(&self) -> String {
        format!("{}{}", self.module_part(), VERSION_MARKER)
    }

    /// Prefix every tag of the given major version starts with
    ///
    /// This is a plain string prefix: `v1` also matches `v10.0.0`.
    pub fn filter_prefix(&self, major: u64) -> String {
        format!("{}{}", self.tag_start(), major)
    }

    /// Full tag name for a version
    pub fn format(&self, version: &Version) -> String {
        format!("{}{}", self.tag_start(), version)
    }

    /// Strip the module prefix and version marker, then parse the remainder
    ///
    /// The marker is matched case-insensitively (`V12.0` is accepted).
    pub fn parse(&self, tag: &str) -> Result<Version, VersionError> {
        let module_part = self.module_part();
        let rest = tag
            .strip_prefix(module_part.as_str())
            .ok_or_else(|| VersionError::PrefixMismatch {
                tag: tag.to_string(),
                prefix: module_part.clone(),
            })?;
        let rest = rest
            .strip_prefix(VERSION_MARKER)
            .or_else(|| rest.strip_prefix(VERSION_MARKER.to_ascii_uppercase()))
            .unwrap_or(rest);

        rest.parse()
    }
}
