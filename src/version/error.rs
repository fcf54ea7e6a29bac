use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,

    #[error("Invalid segment {segment:?} in version {input:?}")]
    InvalidSegment { input: String, segment: String },

    #[error("Tag {tag:?} does not start with prefix {prefix:?}")]
    PrefixMismatch { tag: String, prefix: String },
}
