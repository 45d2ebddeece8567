use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Synthetic load driver for the pr-review service.
#[derive(Parser, Debug, Clone)]
#[command(name = "pr-review-load", version)]
pub struct Cli {
    /// Config file, defaults to ./pr-review-load.yaml when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "info")]
    pub log_level: log::Level,

    /// Service base url, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Number of virtual workers, overrides the config file
    #[arg(long, global = true)]
    pub vus: Option<usize>,

    /// Run duration in seconds, overrides the config file
    #[arg(long, global = true)]
    pub duration: Option<u64>,

    /// Skip the health probe before the run
    #[arg(long, global = true, default_value_t = false)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create random teams and read them back
    Team,
    /// Create pull requests for one author set up before the run
    PullRequest,
}
