use serde::{Deserialize, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const DEFAULT_CONFIG_FILE_NAME: &str = "pr-review-load.yaml";

const TEAM_DEFAULT_VUS: usize = 100;
const PULL_REQUEST_DEFAULT_VUS: usize = 10;
const DEFAULT_DURATION_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("Cannot parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        cause: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub team: DriverConfig,
    #[serde(default)]
    pub pull_request: DriverConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: Config::default_base_url(),
            team: DriverConfig::default(),
            pull_request: DriverConfig::default(),
        }
    }
}

impl Config {
    /// Loads `path`, or the default config file when no path is given. Only
    /// the default file may be missing, in which case built-in values apply.
    pub async fn load(path: Option<&Path>) -> Result<Config, Error> {
        match path {
            Some(path) => Config::read(path).await,
            None => Config::read_or_default(Path::new(DEFAULT_CONFIG_FILE_NAME)).await,
        }
    }

    async fn read_or_default(path: &Path) -> Result<Config, Error> {
        match Config::read(path).await {
            Err(Error::Read { cause, .. }) if cause.kind() == ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", path.display());
                Ok(Config::default())
            }
            other => other,
        }
    }

    async fn read(path: &Path) -> Result<Config, Error> {
        let config_string = tokio::fs::read_to_string(path)
            .await
            .map_err(|cause| Error::Read {
                path: path.to_owned(),
                cause,
            })?;

        serde_yaml::from_str::<Config>(&config_string).map_err(|cause| Error::Parse {
            path: path.to_owned(),
            cause,
        })
    }

    pub fn team(&self) -> RunSettings {
        self.team.settings(TEAM_DEFAULT_VUS)
    }

    pub fn pull_request(&self) -> RunSettings {
        self.pull_request.settings(PULL_REQUEST_DEFAULT_VUS)
    }

    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_owned()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    pub vus: Option<usize>,
    pub duration_secs: Option<u64>,
}

impl DriverConfig {
    fn settings(&self, default_vus: usize) -> RunSettings {
        RunSettings {
            vus: self.vus.unwrap_or(default_vus),
            duration: Duration::from_secs(self.duration_secs.unwrap_or(DEFAULT_DURATION_SECS)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub vus: usize,
    pub duration: Duration,
}
