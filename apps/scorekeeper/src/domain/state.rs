use crate::domain::calls::Call;
use crate::domain::round::{Round, RoundId};
use crate::domain::rules::DEFAULT_WINNING_SCORE;
use crate::domain::scoring::{compute_adjusted_points, total_points, RoundPoints};
use crate::domain::teams::{TeamId, Teams};

/// Game progression. `GameOver` is entered only when a round is appended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    InProgress,
    GameOver { winner: TeamId },
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub teams: Teams,
    /// Cumulative adjusted total that ends the game.
    pub winning_score: i32,
    /// Committed rounds; `rounds[i].id == i + 1`.
    pub rounds: Vec<Round>,
    pub phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            teams: Teams::default(),
            winning_score: DEFAULT_WINNING_SCORE,
            rounds: Vec::new(),
            phase: Phase::InProgress,
        }
    }
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winning_team(&self) -> Option<TeamId> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            Phase::InProgress => None,
        }
    }

    pub fn next_round_id(&self) -> RoundId {
        self.rounds.len() as RoundId + 1
    }

    /// Totals recomputed from every stored round.
    pub fn totals(&self) -> RoundPoints {
        total_points(self.rounds.iter().map(Round::points))
    }

    pub fn total(&self, team: TeamId) -> i32 {
        self.totals().get(team)
    }

    /// Team currently ahead, `None` when level.
    pub fn leader(&self) -> Option<TeamId> {
        let totals = self.totals();
        match totals.team_a.cmp(&totals.team_b) {
            std::cmp::Ordering::Greater => Some(TeamId::A),
            std::cmp::Ordering::Less => Some(TeamId::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Adjust, append with the next id, then re-evaluate the win condition.
    pub fn append_round(&mut self, raw_a: i32, raw_b: i32, calls: Vec<Call>) -> &Round {
        let adjusted = compute_adjusted_points(raw_a, raw_b, &calls);
        let id = self.next_round_id();
        self.rounds.push(Round::new(id, adjusted, calls));
        self.phase = evaluate_phase(self.totals(), self.winning_score);
        &self.rounds[self.rounds.len() - 1]
    }

    /// Drop the most recent round and reopen the game. `None` when empty.
    ///
    /// The phase is cleared without re-checking earlier rounds.
    pub fn undo_last_round(&mut self) -> Option<Round> {
        let removed = self.rounds.pop()?;
        self.phase = Phase::InProgress;
        Some(removed)
    }

    /// Clear rounds, keep team names and threshold.
    pub fn start_new_game(&mut self) {
        self.rounds.clear();
        self.phase = Phase::InProgress;
    }

    /// Back to factory defaults.
    pub fn reset(&mut self) {
        *self = GameState::default();
    }

    pub fn set_team_name(&mut self, team: TeamId, name: impl Into<String>) {
        self.teams.get_mut(team).name = name.into();
    }

    /// Replace the threshold. Past rounds are not re-evaluated.
    pub fn set_winning_score(&mut self, score: i32) {
        self.winning_score = score;
    }

    pub fn has_sequential_ids(&self) -> bool {
        self.rounds
            .iter()
            .enumerate()
            .all(|(i, r)| r.id as usize == i + 1)
    }
}

/// Team A is checked first, so it wins when both cross together.
pub fn evaluate_phase(totals: RoundPoints, winning_score: i32) -> Phase {
    TeamId::ALL
        .into_iter()
        .find(|team| totals.get(*team) >= winning_score)
        .map_or(Phase::InProgress, |winner| Phase::GameOver { winner })
}
