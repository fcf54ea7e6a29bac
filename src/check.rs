//! Release check pipeline
//!
//! Manifest → release tags → latest match → decision.

use tracing::info;

use crate::config::Config;
use crate::error::CheckError;
use crate::manifest::read_manifest_version;
use crate::release::{Decision, ReleaseLister, decide, select_latest};

/// Run one release check against `lister`
pub async fn run_check<L>(config: &Config, lister: &L) -> Result<Decision, CheckError>
where
    L: ReleaseLister + ?Sized,
{
    let current = read_manifest_version(&config.manifest_path)?;
    info!(
        "Manifest {} declares version {}",
        config.manifest_path.display(),
        current
    );

    let tags = lister.list_release_tags(&config.repository).await?;
    info!("Found {} releases in {}", tags.len(), config.repository);

    let latest = select_latest(
        &tags,
        &config.tag_prefix,
        current.major(),
        config.tag_ordering,
    );
    match &latest {
        Some(tag) => info!("Latest matching release is {}", tag),
        None => info!(
            "No release matches {}",
            config.tag_prefix.filter_prefix(current.major())
        ),
    }

    let decision = decide(&current, latest.as_deref(), &config.tag_prefix)?;
    match &decision {
        Decision::NewRelease(tag) => info!("New release needed: {}", tag),
        Decision::UpToDate => info!("No new release needed"),
    }

    Ok(decision)
}
