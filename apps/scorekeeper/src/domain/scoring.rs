use serde::{Deserialize, Serialize};

use crate::domain::calls::{Call, CallType};
use crate::domain::teams::TeamId;

/// A pair of per-team point values for one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPoints {
    pub team_a: i32,
    pub team_b: i32,
}

impl RoundPoints {
    pub const fn new(team_a: i32, team_b: i32) -> Self {
        Self { team_a, team_b }
    }

    pub fn get(&self, team: TeamId) -> i32 {
        match team {
            TeamId::A => self.team_a,
            TeamId::B => self.team_b,
        }
    }

    /// Saturates at the `i32` bounds.
    pub fn add(&mut self, team: TeamId, delta: i32) {
        match team {
            TeamId::A => self.team_a = self.team_a.saturating_add(delta),
            TeamId::B => self.team_b = self.team_b.saturating_add(delta),
        }
    }

    pub fn sum(&self) -> i32 {
        self.team_a.saturating_add(self.team_b)
    }

    /// Component-wise difference `self - base`.
    pub fn delta_from(&self, base: RoundPoints) -> RoundPoints {
        RoundPoints::new(
            self.team_a.saturating_sub(base.team_a),
            self.team_b.saturating_sub(base.team_b),
        )
    }

    /// Component-wise sum, `None` on overflow.
    pub fn checked_add(&self, other: RoundPoints) -> Option<RoundPoints> {
        Some(RoundPoints::new(
            self.team_a.checked_add(other.team_a)?,
            self.team_b.checked_add(other.team_b)?,
        ))
    }
}

/// Signed adjustment a single call contributes to its declaring team.
///
/// 1-2 always pays out; bids pay on success, cost on failure, and do
/// nothing while pending.
pub fn call_adjustment(call: &Call) -> i32 {
    match (call.call_type, call.successful) {
        (CallType::OneTwo, _) => CallType::OneTwo.bonus(),
        (t, Some(true)) => t.bonus(),
        (t, Some(false)) => -t.bonus(),
        (_, None) => 0,
    }
}

/// Apply every call to the raw trick points.
///
/// Calls are additive and independent; combination legality is the
/// caller's concern (see `eligibility`).
pub fn compute_adjusted_points(raw_a: i32, raw_b: i32, calls: &[Call]) -> RoundPoints {
    let mut adjusted = RoundPoints::new(raw_a, raw_b);
    for call in calls {
        adjusted.add(call.team_id, call_adjustment(call));
    }
    adjusted
}

/// Cumulative totals over the given rounds' adjusted points, saturating at
/// the `i32` bounds.
pub fn total_points<I>(rounds: I) -> RoundPoints
where
    I: IntoIterator<Item = RoundPoints>,
{
    rounds.into_iter().fold(RoundPoints::default(), |mut acc, p| {
        acc.add(TeamId::A, p.team_a);
        acc.add(TeamId::B, p.team_b);
        acc
    })
}
