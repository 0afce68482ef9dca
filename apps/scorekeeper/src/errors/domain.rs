//! Round entry errors.
//!
//! These are reported before any state is touched; a failed submission
//! leaves the store exactly as it was.

use thiserror::Error;

use crate::domain::calls::CallType;
use crate::domain::teams::TeamId;
use crate::errors::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("points for team {team} cannot be empty")]
    EmptyPoints { team: TeamId },
    #[error("points for team {team} must be between -25 and 125, got {points}")]
    OutOfRange { team: TeamId, points: i32 },
    #[error("points for team {team} must be a multiple of 5, got {points}")]
    NotMultipleOfStep { team: TeamId, points: i32 },
    #[error("{call} for team {team} must be marked successful or failed")]
    IncompleteCalls { team: TeamId, call: CallType },
}

impl RoundError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RoundError::EmptyPoints { .. } => ErrorCode::EmptyPoints,
            RoundError::OutOfRange { .. } => ErrorCode::PointsOutOfRange,
            RoundError::NotMultipleOfStep { .. } => ErrorCode::PointsNotMultipleOfStep,
            RoundError::IncompleteCalls { .. } => ErrorCode::IncompleteCalls,
        }
    }
}

/// Outcome of a rejected round submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] RoundError),
    /// Soft check: resubmit with `force = true` to accept anyway.
    #[error("points add up to {sum}, expected 100")]
    SumMismatch { sum: i32 },
}

impl SubmitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmitError::Invalid(err) => err.code(),
            SubmitError::SumMismatch { .. } => ErrorCode::PointsSumMismatch,
        }
    }

    /// Whether the caller may override this rejection.
    pub fn is_confirmable(&self) -> bool {
        matches!(self, SubmitError::SumMismatch { .. })
    }
}
