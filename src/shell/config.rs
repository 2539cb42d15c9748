// Service configuration.
//
// Responsibilities
// - Load an optional `.env` file, then read settings from environment variables.
// - Fall back to defaults for anything not set. Reject values that do not parse.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "CRAFT_PROJECTS_BIND_ADDR";
pub const DATA_FILE_VAR: &str = "CRAFT_PROJECTS_DATA_FILE";
pub const CONFIRMATION_TTL_VAR: &str = "CRAFT_PROJECTS_CONFIRMATION_TTL_SECS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATA_FILE: &str = "projects.json";
const DEFAULT_CONFIRMATION_TTL_SECS: u64 = 300;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// `None` keeps the collection in memory only.
    pub data_file: Option<PathBuf>,
    pub confirmation_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        let data_file = match lookup(DATA_FILE_VAR) {
            None => Some(PathBuf::from(DEFAULT_DATA_FILE)),
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(PathBuf::from(raw.trim())),
        };

        let confirmation_ttl = match lookup(CONFIRMATION_TTL_VAR) {
            None => Duration::from_secs(DEFAULT_CONFIRMATION_TTL_SECS),
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| ConfigError::Invalid {
                    var: CONFIRMATION_TTL_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
        };

        Ok(Self {
            bind_addr,
            data_file,
            confirmation_ttl,
        })
    }
}

/// Loads `path` into the process environment. A missing file is not an error.
pub fn load_dotenv_from(path: &Path) -> Result<(), dotenvy::Error> {
    match dotenvy::from_path(path) {
        Err(e) if e.not_found() => Ok(()),
        other => other,
    }
}
