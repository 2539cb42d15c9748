// Two-step confirmation for destructive operations.
//
// Purpose
// - Stage a destructive action (clear all, wholesale replace) and only run it once the caller
//   comes back with the token handed out in the first step.
//
// Responsibilities
// - Tokens are single use and expire after a configured time to live.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

pub mod in_memory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfirmationError {
    #[error("unknown or already used confirmation token")]
    Unknown,

    #[error("confirmation token expired")]
    Expired,

    #[error("malformed confirmation token: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationToken(Uuid);

impl ConfirmationToken {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for ConfirmationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ConfirmationToken {
    type Err = ConfirmationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| ConfirmationError::Malformed(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedConfirmation {
    pub confirmation_token: ConfirmationToken,
    pub expires_at: DateTime<Utc>,
}
