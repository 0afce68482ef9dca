//! Domain layer: pure scoring rules and game state.

pub mod calls;
pub mod draft;
pub mod eligibility;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod teams;
pub mod validation;

#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use calls::{Call, CallType};
pub use draft::{DraftPreview, RoundDraft};
pub use eligibility::{is_call_blocked, is_failed_only, is_success_blocked};
pub use round::{Round, RoundId};
pub use scoring::{compute_adjusted_points, RoundPoints};
pub use snapshot::GameSnapshot;
pub use state::{GameState, Phase};
pub use stats::GameStats;
pub use teams::{Team, TeamId, Teams};
pub use validation::{parse_points, validate_round, SumCheck};
