//! The single owner of game state.
//!
//! Every mutation happens in memory first and then schedules a snapshot
//! write; reads never wait on persistence. Construct inside a tokio runtime
//! (the snapshot writer is spawned on it).

#[cfg(test)]
mod tests_store;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::domain::calls::Call;
use crate::domain::draft::RoundDraft;
use crate::domain::round::Round;
use crate::domain::scoring::RoundPoints;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{GameState, Phase};
use crate::domain::stats::{running_totals, GameStats};
use crate::domain::teams::{Team, TeamId, Teams};
use crate::domain::validation::{validate_round, SumCheck};
use crate::errors::domain::{RoundError, SubmitError};
use crate::persistence::{load_snapshot, KeyValueStore, MemoryKv, SnapshotWriter};

/// What `load_game` found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A snapshot was decoded and replaced the in-memory state.
    Restored { rounds: usize },
    /// Nothing stored under the key; state untouched.
    Missing,
    /// Storage failed or the blob was unusable; state untouched.
    Discarded,
}

pub struct GameStore {
    state: GameState,
    kv: Arc<dyn KeyValueStore>,
    storage_key: String,
    writer: SnapshotWriter,
}

impl GameStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, config: &StoreConfig) -> Self {
        let writer = SnapshotWriter::spawn(kv.clone(), config.storage_key.clone());
        Self {
            state: GameState::default(),
            kv,
            storage_key: config.storage_key.clone(),
            writer,
        }
    }

    /// Store backed by process-local memory with the default key.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKv::new()), &StoreConfig::default())
    }

    // ---- queries ----

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn teams(&self) -> &Teams {
        &self.state.teams
    }

    pub fn team(&self, team: TeamId) -> &Team {
        self.state.teams.get(team)
    }

    pub fn winning_score(&self) -> i32 {
        self.state.winning_score
    }

    pub fn rounds(&self) -> &[Round] {
        &self.state.rounds
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn winning_team(&self) -> Option<TeamId> {
        self.state.winning_team()
    }

    /// Sum of the team's adjusted points over all stored rounds.
    pub fn total_score(&self, team: TeamId) -> i32 {
        self.state.total(team)
    }

    pub fn leader(&self) -> Option<TeamId> {
        self.state.leader()
    }

    pub fn stats(&self) -> GameStats {
        GameStats::from_rounds(&self.state.rounds)
    }

    pub fn running_totals(&self) -> Vec<RoundPoints> {
        running_totals(&self.state.rounds)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // ---- actions ----

    /// Any string is accepted, including an empty one.
    pub fn set_team_name(&mut self, team: TeamId, name: impl Into<String>) {
        let name = name.into();
        debug!(team = %team, name = %name, "team renamed");
        self.state.set_team_name(team, name);
        self.save_game();
    }

    /// Replace the threshold without re-evaluating past rounds.
    pub fn set_winning_score(&mut self, score: i32) {
        debug!(score, "winning score changed");
        self.state.set_winning_score(score);
        self.save_game();
    }

    /// Append a round without validation. Remains usable after game over.
    pub fn add_round(&mut self, raw_a: i32, raw_b: i32, calls: Vec<Call>) -> &Round {
        let was_over = self.state.is_game_over();
        let round = self.state.append_round(raw_a, raw_b, calls);
        info!(
            round_id = round.id,
            raw_a,
            raw_b,
            team_a_points = round.team_a_points,
            team_b_points = round.team_b_points,
            calls = round.calls.len(),
            "round added"
        );

        if let (false, Phase::GameOver { winner }) = (was_over, self.state.phase) {
            let totals = self.state.totals();
            info!(
                winner = %winner,
                team_a_total = totals.team_a,
                team_b_total = totals.team_b,
                winning_score = self.state.winning_score,
                "game over"
            );
        }

        self.save_game();
        let last = self.state.rounds.len() - 1;
        &self.state.rounds[last]
    }

    /// Validate then append.
    ///
    /// Hard validation failures and an unconfirmed sum mismatch leave the
    /// store untouched. `force` accepts a sum other than 100/0.
    pub fn submit_round(
        &mut self,
        raw_a: Option<i32>,
        raw_b: Option<i32>,
        calls: Vec<Call>,
        force: bool,
    ) -> Result<&Round, SubmitError> {
        let check = validate_round(raw_a, raw_b, &calls).inspect_err(|err| {
            debug!(code = %err.code(), error = %err, "round rejected");
        })?;

        if let SumCheck::Mismatch { sum } = check {
            if !force {
                debug!(sum, "round needs confirmation");
                return Err(SubmitError::SumMismatch { sum });
            }
            warn!(sum, "round submitted with unbalanced points");
        }

        let a = raw_a.ok_or(RoundError::EmptyPoints { team: TeamId::A })?;
        let b = raw_b.ok_or(RoundError::EmptyPoints { team: TeamId::B })?;
        Ok(self.add_round(a, b, calls))
    }

    pub fn submit_draft(&mut self, draft: &RoundDraft, force: bool) -> Result<&Round, SubmitError> {
        self.submit_round(
            draft.team_a_points,
            draft.team_b_points,
            draft.calls.clone(),
            force,
        )
    }

    /// Remove the latest round and reopen the game. No-op when empty.
    pub fn undo_last_round(&mut self) -> Option<Round> {
        let removed = self.state.undo_last_round()?;
        info!(round_id = removed.id, "round undone");
        self.save_game();
        Some(removed)
    }

    /// Factory defaults: names, threshold, rounds.
    pub fn reset_game(&mut self) {
        info!("game reset");
        self.state.reset();
        self.save_game();
    }

    /// Clear rounds but keep team names and threshold.
    pub fn start_new_game(&mut self) {
        info!(rounds = self.state.rounds.len(), "new game started");
        self.state.start_new_game();
        self.save_game();
    }

    // ---- persistence ----

    /// Schedule a snapshot of the current state. Never blocks or fails.
    pub fn save_game(&mut self) {
        self.writer.schedule(self.snapshot());
    }

    /// Replace in-memory state with the stored snapshot, if one is usable.
    pub async fn load_game(&mut self) -> LoadOutcome {
        match load_snapshot(self.kv.as_ref(), &self.storage_key).await {
            Ok(Some(state)) => {
                let rounds = state.rounds.len();
                self.state = state;
                info!(key = %self.storage_key, rounds, "game state restored");
                LoadOutcome::Restored { rounds }
            }
            Ok(None) => {
                debug!(key = %self.storage_key, "no saved game state");
                LoadOutcome::Missing
            }
            Err(err) => {
                warn!(
                    key = %self.storage_key,
                    code = %err.code(),
                    error = %err,
                    "failed to load game state, keeping current state"
                );
                LoadOutcome::Discarded
            }
        }
    }

    /// Wait for every scheduled save to be attempted.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    /// Flush pending saves and stop the writer.
    pub async fn shutdown(self) {
        self.writer.shutdown().await;
    }
}
