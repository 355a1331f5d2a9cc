//! CLI command implementations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use soapbox_config::AppConfig;

pub mod doctor;
pub mod extract;
pub mod factcheck;

/// Command failures, each mapped to a distinct process exit code.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("failed to read input: {0}")]
    InputUnreadable(String),

    #[error("no statements parsed from input")]
    NoStatements,

    #[error("{0}")]
    Other(String),
}

impl CommandError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Exit code: 2 missing/unreadable input, 3 zero statements, 1 else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputNotFound(_) | Self::InputUnreadable(_) => 2,
            Self::NoStatements => 3,
            Self::Other(_) => 1,
        }
    }
}

/// Load config from an explicit path when given, else from
/// ~/.soapbox/config.toml. Environment overrides apply on both paths.
pub(crate) fn load_config(config_path: Option<&Path>) -> Result<AppConfig, CommandError> {
    match config_path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .map_err(|e| CommandError::other(format!("invalid configuration: {e}")))
}
