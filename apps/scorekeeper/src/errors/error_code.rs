//! Stable error codes surfaced to the presentation layer and in logs.
//!
//! All codes are SCREAMING_SNAKE_CASE. Add new codes here; never pass
//! ad-hoc strings as error codes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round entry validation
    /// A team's points were left blank or could not be parsed
    EmptyPoints,
    /// Points outside [-25, 125]
    PointsOutOfRange,
    /// Points not a multiple of 5
    PointsNotMultipleOfStep,
    /// A Tichu or Grand Tichu has no outcome yet
    IncompleteCalls,
    /// Points do not add up to 100 (confirmable)
    PointsSumMismatch,

    // Persistence
    /// Backing store could not be reached
    StorageUnavailable,
    /// Backing store I/O failure
    StorageIo,
    /// Snapshot could not be encoded
    SnapshotSerialize,
    /// Stored snapshot could not be decoded or is inconsistent
    SnapshotCorrupt,

    // Configuration
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyPoints => "EMPTY_POINTS",
            Self::PointsOutOfRange => "POINTS_OUT_OF_RANGE",
            Self::PointsNotMultipleOfStep => "POINTS_NOT_MULTIPLE_OF_STEP",
            Self::IncompleteCalls => "INCOMPLETE_CALLS",
            Self::PointsSumMismatch => "POINTS_SUM_MISMATCH",

            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::StorageIo => "STORAGE_IO",
            Self::SnapshotSerialize => "SNAPSHOT_SERIALIZE",
            Self::SnapshotCorrupt => "SNAPSHOT_CORRUPT",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
