//! Configuration errors raised before the TUI starts.

use thiserror::Error;

use crate::models::TargetParseError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid release target: {0}")]
    InvalidTarget(#[from] TargetParseError),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid value for {variable}: {message}")]
    InvalidValue { variable: String, message: String },

    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidTarget(_) => "E_CFG_TARGET",
            ConfigError::MissingArgument(_) => "E_CFG_MISSING",
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
            ConfigError::UnknownFlag(_) => "E_CFG_FLAG",
        }
    }
}
