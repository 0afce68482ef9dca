//! Derived statistics over the round history.

use serde::Serialize;

use crate::domain::calls::CallType;
use crate::domain::round::Round;
use crate::domain::rules::ROUNDS_PER_GAME;
use crate::domain::scoring::RoundPoints;
use crate::domain::teams::TeamId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BidRecord {
    pub declared: u32,
    pub successful: u32,
}

impl BidRecord {
    /// Success rate in percent; 0.0 when nothing was declared.
    pub fn success_rate(&self) -> f64 {
        if self.declared == 0 {
            0.0
        } else {
            f64::from(self.successful) / f64::from(self.declared) * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub tichu: BidRecord,
    pub grand_tichu: BidRecord,
    pub one_two_finishes: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub team_a: TeamStats,
    pub team_b: TeamStats,
    /// Rounds grouped into games of `ROUNDS_PER_GAME`, last one partial.
    pub games_played: usize,
}

impl GameStats {
    pub fn from_rounds(rounds: &[Round]) -> Self {
        let mut stats = GameStats {
            games_played: games_played(rounds.len()),
            ..GameStats::default()
        };
        for call in rounds.iter().flat_map(|r| r.calls.iter()) {
            let team = stats.get_mut(call.team_id);
            let record = match call.call_type {
                CallType::Tichu => &mut team.tichu,
                CallType::GrandTichu => &mut team.grand_tichu,
                CallType::OneTwo => {
                    team.one_two_finishes += 1;
                    continue;
                }
            };
            record.declared += 1;
            if call.successful == Some(true) {
                record.successful += 1;
            }
        }
        stats
    }

    pub fn get(&self, team: TeamId) -> &TeamStats {
        match team {
            TeamId::A => &self.team_a,
            TeamId::B => &self.team_b,
        }
    }

    fn get_mut(&mut self, team: TeamId) -> &mut TeamStats {
        match team {
            TeamId::A => &mut self.team_a,
            TeamId::B => &mut self.team_b,
        }
    }
}

/// `ceil(rounds / ROUNDS_PER_GAME)`; zero for an empty history.
pub fn games_played(rounds: usize) -> usize {
    rounds.div_ceil(ROUNDS_PER_GAME)
}

/// Cumulative (A, B) totals after each round, in round order.
pub fn running_totals(rounds: &[Round]) -> Vec<RoundPoints> {
    rounds
        .iter()
        .scan(RoundPoints::default(), |acc, round| {
            acc.add(TeamId::A, round.team_a_points);
            acc.add(TeamId::B, round.team_b_points);
            Some(*acc)
        })
        .collect()
}

/// How many round prefixes left `team` at or above `winning_score`.
pub fn rounds_at_or_above(rounds: &[Round], team: TeamId, winning_score: i32) -> usize {
    running_totals(rounds)
        .iter()
        .filter(|totals| totals.get(team) >= winning_score)
        .count()
}
