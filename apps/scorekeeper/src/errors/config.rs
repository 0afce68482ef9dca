use thiserror::Error;

use crate::errors::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Configuration error: {detail}")]
    Invalid { detail: String },
}

impl ConfigError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::Invalid {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::ConfigError
    }
}
