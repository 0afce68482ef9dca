#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod persistence;
pub mod store;
pub mod telemetry;


// Re-exports for public API
pub use config::StoreConfig;
pub use domain::{
    compute_adjusted_points, Call, CallType, DraftPreview, GameSnapshot, GameState, GameStats,
    Phase, Round, RoundDraft, RoundId, RoundPoints, Team, TeamId, Teams,
};
pub use errors::{ConfigError, ErrorCode, PersistError, RoundError, StorageError, SubmitError};
pub use persistence::{FileKv, KeyValueStore, MemoryKv};
pub use store::{GameStore, LoadOutcome};
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
