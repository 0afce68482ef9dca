//! Persistence failures.
//!
//! None of these ever reach a store caller: the store logs them and keeps
//! serving in-memory state.

use thiserror::Error;

use crate::errors::ErrorCode;

/// Failure reported by a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {detail}")]
    Unavailable { detail: String },
    #[error("invalid storage key: {key:?}")]
    InvalidKey { key: String },
}

impl StorageError {
    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::Unavailable {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored snapshot is unreadable: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("stored snapshot is inconsistent: {detail}")]
    Inconsistent { detail: String },
}

impl PersistError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PersistError::Storage(StorageError::Io(_)) => ErrorCode::StorageIo,
            PersistError::Storage(
                StorageError::Unavailable { .. } | StorageError::InvalidKey { .. },
            ) => ErrorCode::StorageUnavailable,
            PersistError::Serialize(_) => ErrorCode::SnapshotSerialize,
            PersistError::Corrupt(_) | PersistError::Inconsistent { .. } => {
                ErrorCode::SnapshotCorrupt
            }
        }
    }
}
