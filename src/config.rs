//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "fact_guess.toml";

/// Where facts come from and where logs go.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Remote trivia endpoint returning `{"text": ..., "number": ...}`.
    #[serde(default = "default_api_url")]
    api_url: String,

    /// Remote endpoint for the random trivia panel, same payload shape.
    #[serde(default = "default_trivia_url")]
    trivia_url: String,

    /// Local JSON array of trivia used when the remote source fails.
    #[serde(default = "default_cache_path")]
    cache_path: PathBuf,

    /// Timeout for the remote request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,

    /// File the terminal UI writes logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_api_url() -> String {
    "http://numbersapi.com/random/math?json".to_string()
}

fn default_trivia_url() -> String {
    "http://numbersapi.com/random/trivia?json".to_string()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("mathfacts.json")
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_log_file() -> PathBuf {
    PathBuf::from("fact_guess.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            trivia_url: default_trivia_url(),
            cache_path: default_cache_path(),
            request_timeout_secs: default_request_timeout_secs(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            api_url = %config.api_url,
            cache_path = %config.cache_path.display(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the given file, or [`DEFAULT_CONFIG_FILE`] if it exists, or defaults.
    ///
    /// An explicitly given path that cannot be loaded is an error; a missing
    /// default file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
