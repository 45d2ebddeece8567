mod check;
mod cli;
mod config;
mod drivers;
mod harness;
mod http;
mod logger;
mod metrics;
mod payload;
mod preflight;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::{Config, RunSettings};
use drivers::{PullRequestDriver, TeamDriver};
use harness::Options;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_level)?;

    let config = Config::load(cli.config.as_deref())
        .await
        .context("Cannot load config file")?;

    let settings = match cli.command {
        Command::Team => config.team(),
        Command::PullRequest => config.pull_request(),
    };
    let options = options(&cli, settings).context("Invalid run options")?;

    let base_url = cli.base_url.as_deref().unwrap_or(&config.base_url);
    let client = http::Client::new(base_url);
    log::info!("Target {}", client.base_url());

    if !cli.skip_preflight {
        preflight::health(&client).await;
    }

    let summary = match cli.command {
        Command::Team => harness::run(TeamDriver, client, options).await,
        Command::PullRequest => harness::run(PullRequestDriver, client, options).await,
    }
    .context("Load run aborted")?;

    for line in summary.to_string().lines() {
        log::info!("{}", line);
    }

    if !summary.checks_passed() {
        log::warn!("Some checks failed");
    }

    Ok(())
}

fn options(cli: &Cli, settings: RunSettings) -> Result<Options, harness::Error> {
    let vus = cli.vus.unwrap_or(settings.vus);
    let duration = cli
        .duration
        .map(Duration::from_secs)
        .unwrap_or(settings.duration);

    Options::new(vus, duration)
}
