//! Flat, restorable snapshot of a game.
//!
//! Wire shape: `{ teams, winningScore, rounds, isGameOver, winningTeam }`.
//! There is no version field; anything that does not decode into this shape,
//! or decodes into an inconsistent game, is rejected.

use serde::{Deserialize, Serialize};

use crate::domain::round::Round;
use crate::domain::scoring::RoundPoints;
use crate::domain::state::{GameState, Phase};
use crate::domain::teams::{TeamId, Teams};
use crate::errors::persist::PersistError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub teams: Teams,
    pub winning_score: i32,
    pub rounds: Vec<Round>,
    pub is_game_over: bool,
    pub winning_team: Option<TeamId>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            teams: state.teams.clone(),
            winning_score: state.winning_score,
            rounds: state.rounds.clone(),
            is_game_over: state.is_game_over(),
            winning_team: state.winning_team(),
        }
    }
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string(self).map_err(PersistError::Serialize)
    }

    pub fn from_json(data: &str) -> Result<Self, PersistError> {
        serde_json::from_str(data).map_err(PersistError::Corrupt)
    }

    /// Rebuild a `GameState`, rejecting snapshots that break its invariants.
    pub fn into_state(self) -> Result<GameState, PersistError> {
        if !self.teams.is_consistent() {
            return Err(inconsistent("team ids do not match their slots"));
        }
        if self.winning_score <= 0 {
            return Err(inconsistent(format!(
                "winning score must be positive, got {}",
                self.winning_score
            )));
        }

        let phase = match (self.is_game_over, self.winning_team) {
            (false, None) => Phase::InProgress,
            (true, Some(winner)) => Phase::GameOver { winner },
            (over, team) => {
                return Err(inconsistent(format!(
                    "isGameOver={over} does not agree with winningTeam={team:?}"
                )))
            }
        };

        let state = GameState {
            teams: self.teams,
            winning_score: self.winning_score,
            rounds: self.rounds,
            phase,
        };
        if !state.has_sequential_ids() {
            return Err(inconsistent("round ids are not 1..=n"));
        }
        if state
            .rounds
            .iter()
            .try_fold(RoundPoints::default(), |acc, r| acc.checked_add(r.points()))
            .is_none()
        {
            return Err(inconsistent("cumulative points overflow"));
        }
        Ok(state)
    }
}

fn inconsistent(detail: impl Into<String>) -> PersistError {
    PersistError::Inconsistent {
        detail: detail.into(),
    }
}
