use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use release_check::check::run_check;
use release_check::config::Config;
use release_check::logging::{self, LogFormat};
use release_check::output::OutputEmitter;
use release_check::release::{GitHubReleases, TagOrdering};

#[derive(Parser)]
#[command(name = "release-check")]
#[command(
    version,
    about = "Decide whether a module manifest version needs a new release tag"
)]
struct Cli {
    /// Manifest file to read instead of $MODULE_PATH/__manifest__.py
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Ordering used to pick the latest existing tag (overrides $TAG_ORDERING)
    #[arg(long, value_enum)]
    tag_ordering: Option<TagOrdering>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_format);

    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()
        .context("Invalid configuration")?
        .with_overrides(cli.manifest, cli.tag_ordering);

    let lister = GitHubReleases::new(
        &config.api_url,
        config.token.clone(),
        config.fetch_timeout,
    )?;

    let decision = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run_check(&config, &lister))?;

    OutputEmitter::new(config.github_output.clone())
        .emit(&decision, &mut std::io::stdout().lock())
        .context("Failed to write new-version output")?;

    info!("Release check finished");
    Ok(())
}
