//! Latest matching release tag selection

use clap::ValueEnum;
use tracing::debug;

use crate::version::TagPrefix;

/// How candidate tags are ordered when picking the latest one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TagOrdering {
    /// Plain string ordering over tags sharing the `[<module>-]v<major>` prefix.
    ///
    /// `v12.0.1.9.0` sorts after `v12.0.1.10.0`, and `v1` also matches `v10.x`.
    #[default]
    Lexicographic,
    /// Segment-wise numeric ordering over tags whose major equals the current one
    Numeric,
}

/// Pick the latest existing tag for the current major version
///
/// Returns `None` when no tag matches.
pub fn select_latest(
    tags: &[String],
    prefix: &TagPrefix,
    major: u64,
    ordering: TagOrdering,
) -> Option<String> {
    match ordering {
        TagOrdering::Lexicographic => select_lexicographic(tags, prefix, major),
        TagOrdering::Numeric => select_numeric(tags, prefix, major),
    }
}

fn select_lexicographic(tags: &[String], prefix: &TagPrefix, major: u64) -> Option<String> {
    let filter = prefix.filter_prefix(major);

    let mut candidates: Vec<&String> = tags.iter().filter(|tag| tag.starts_with(&filter)).collect();
    candidates.sort();
    debug!("Tags matching {:?}: {:?}", filter, candidates);

    candidates.last().map(|tag| tag.to_string())
}

fn select_numeric(tags: &[String], prefix: &TagPrefix, major: u64) -> Option<String> {
    // Same `[<module>-]v` start the lexicographic filter requires
    let start = prefix.tag_start();

    let mut candidates: Vec<_> = tags
        .iter()
        .filter(|tag| tag.starts_with(&start))
        .filter_map(|tag| match prefix.parse(tag) {
            Ok(version) => Some((version, tag)),
            Err(e) => {
                debug!("Skipping tag {:?}: {}", tag, e);
                None
            }
        })
        .filter(|(version, _)| version.major() == major)
        .collect();
    candidates.sort();
    debug!("Tags with major version {}: {:?}", major, candidates);

    candidates.last().map(|(_, tag)| tag.to_string())
}
