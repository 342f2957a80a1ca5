//! Process configuration
//!
//! Read once at startup. Library code never looks at the environment; the
//! binary builds a `Config` and passes the pieces down explicitly.

use crate::github::{DEFAULT_REPOS_PER_PAGE, GitHubClient, GitHubResult};
use log::warn;
use std::fmt;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub github_token: Option<String>,
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub repos_per_page: u8,
}

// Hand-written so the token never ends up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_url", &self.api_url)
            .field("repos_per_page", &self.repos_per_page)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            repos_per_page: DEFAULT_REPOS_PER_PAGE,
        }
    }
}

impl Config {
    /// Loads `.env` from the working directory (if any), then reads the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = load_dotenv(Path::new(".env")) {
            warn!("Ignoring unreadable .env file: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` when `PORT` or `GITHUB_REPOS_PER_PAGE` does not parse
    /// or is out of range.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => defaults.port,
        };

        let repos_per_page = match get("GITHUB_REPOS_PER_PAGE") {
            Some(raw) => raw
                .parse::<u8>()
                .ok()
                .filter(|n| (1..=100).contains(n))
                .ok_or(ConfigError::Invalid {
                    key: "GITHUB_REPOS_PER_PAGE",
                    expected: "between 1 and 100",
                    value: raw,
                })?,
            None => defaults.repos_per_page,
        };

        Ok(Self {
            github_token: get("GITHUB_TOKEN"),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            api_url: get("GITHUB_API_URL").unwrap_or(defaults.api_url),
            repos_per_page,
        })
    }

    /// `host:port` to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the shared GitHub client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::ClientSetup` for an unusable API URL.
    pub fn github_client(&self) -> GitHubResult<GitHubClient> {
        let mut builder = GitHubClient::builder()
            .base_uri(self.api_url.clone())
            .repos_per_page(self.repos_per_page);

        match &self.github_token {
            Some(token) => builder = builder.personal_token(token.clone()),
            None => warn!("GITHUB_TOKEN is not set; GitHub requests will be unauthenticated"),
        }

        builder.build()
    }
}

/// Loads variables from a dotenv file; variables already set are left alone.
///
/// Returns `Ok(false)` when the file does not exist.
///
/// # Errors
///
/// Any other `dotenvy::Error`: unreadable file or a malformed line.
pub fn load_dotenv(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
