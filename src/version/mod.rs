//! Version layer
//!
//! This module provides the numeric version model read from manifests and the
//! tag naming rules used to match it against existing releases.
//!
//! # Modules
//!
//! - [`number`]: `Version`, an arbitrary-arity sequence of numeric segments
//! - [`tag`]: `TagPrefix`, building and stripping `[<module>-]v<version>` tags
//! - [`error`]: Error type for version and tag parsing

pub mod error;
pub mod number;
pub mod tag;

pub use error::VersionError;
pub use number::Version;
pub use tag::TagPrefix;
