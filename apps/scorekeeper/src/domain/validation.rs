use crate::domain::calls::Call;
use crate::domain::rules::{is_balanced_sum, valid_points_range, POINTS_STEP};
use crate::domain::teams::TeamId;
use crate::errors::domain::RoundError;

/// Result of the non-fatal sum check on an otherwise valid round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumCheck {
    /// Raw points add up to 100 (or 0).
    Balanced,
    /// Raw points add up to something else; needs explicit confirmation.
    Mismatch { sum: i32 },
}

impl SumCheck {
    pub fn is_balanced(&self) -> bool {
        matches!(self, SumCheck::Balanced)
    }
}

/// Parse a raw points entry. Blank or non-numeric input yields `None`.
pub fn parse_points(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i32>().ok()
}

/// Check a round before it is committed.
///
/// Hard failures are checked in order (empty, range, step, pending calls),
/// team A before team B within each check.
pub fn validate_round(
    raw_a: Option<i32>,
    raw_b: Option<i32>,
    calls: &[Call],
) -> Result<SumCheck, RoundError> {
    let team_a = raw_a.ok_or(RoundError::EmptyPoints { team: TeamId::A })?;
    let team_b = raw_b.ok_or(RoundError::EmptyPoints { team: TeamId::B })?;
    let raw = [(TeamId::A, team_a), (TeamId::B, team_b)];

    let range = valid_points_range();
    if let Some(&(team, points)) = raw.iter().find(|(_, p)| !range.contains(p)) {
        return Err(RoundError::OutOfRange { team, points });
    }

    if let Some(&(team, points)) = raw.iter().find(|(_, p)| p % POINTS_STEP != 0) {
        return Err(RoundError::NotMultipleOfStep { team, points });
    }

    if let Some(call) = TeamId::ALL
        .iter()
        .find_map(|team| calls.iter().find(|c| c.team_id == *team && c.is_pending()))
    {
        return Err(RoundError::IncompleteCalls {
            team: call.team_id,
            call: call.call_type,
        });
    }

    if is_balanced_sum(team_a, team_b) {
        Ok(SumCheck::Balanced)
    } else {
        Ok(SumCheck::Mismatch {
            sum: team_a + team_b,
        })
    }
}
