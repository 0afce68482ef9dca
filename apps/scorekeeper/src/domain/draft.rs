//! The round currently being entered, before it is submitted.

use crate::domain::calls::{find_call, Call, CallType};
use crate::domain::eligibility::{is_call_blocked, is_failed_only, is_success_blocked};
use crate::domain::rules::complement_points;
use crate::domain::scoring::{compute_adjusted_points, RoundPoints};
use crate::domain::teams::TeamId;
use crate::domain::validation::{validate_round, SumCheck};
use crate::errors::domain::RoundError;

/// Live preview of what the draft would record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftPreview {
    pub raw: RoundPoints,
    pub adjusted: RoundPoints,
    /// `adjusted - raw` per team.
    pub delta: RoundPoints,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundDraft {
    pub team_a_points: Option<i32>,
    pub team_b_points: Option<i32>,
    pub calls: Vec<Call>,
    /// Fill the other team's points with the complement on every edit.
    pub sync_points: bool,
}

impl Default for RoundDraft {
    fn default() -> Self {
        Self {
            team_a_points: Some(0),
            team_b_points: Some(0),
            calls: Vec::new(),
            sync_points: true,
        }
    }
}

impl RoundDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self, team: TeamId) -> Option<i32> {
        match team {
            TeamId::A => self.team_a_points,
            TeamId::B => self.team_b_points,
        }
    }

    fn points_mut(&mut self, team: TeamId) -> &mut Option<i32> {
        match team {
            TeamId::A => &mut self.team_a_points,
            TeamId::B => &mut self.team_b_points,
        }
    }

    /// Set one team's entry; `None` clears it.
    pub fn set_points(&mut self, team: TeamId, value: Option<i32>) {
        *self.points_mut(team) = value;
        if let (true, Some(v)) = (self.sync_points, value) {
            *self.points_mut(team.opponent()) = Some(complement_points(v));
        }
    }

    /// Quick split; bypasses syncing.
    pub fn apply_preset(&mut self, team_a: i32, team_b: i32) {
        self.team_a_points = Some(team_a);
        self.team_b_points = Some(team_b);
    }

    pub fn raw_sum(&self) -> Option<i32> {
        Some(self.team_a_points?.saturating_add(self.team_b_points?))
    }

    pub fn is_selected(&self, team: TeamId, call_type: CallType) -> bool {
        find_call(&self.calls, team, call_type).is_some()
    }

    pub fn outcome(&self, team: TeamId, call_type: CallType) -> Option<bool> {
        find_call(&self.calls, team, call_type).and_then(|c| c.successful)
    }

    /// Add a pending call, or remove it if already declared.
    ///
    /// Returns `false` when a new declaration is blocked and nothing changed.
    pub fn toggle_call(&mut self, team: TeamId, call_type: CallType) -> bool {
        if let Some(pos) = self.calls.iter().position(|c| c.matches(team, call_type)) {
            self.calls.remove(pos);
            return true;
        }
        if is_call_blocked(team, call_type, &self.calls) {
            return false;
        }
        self.calls.push(Call::pending(call_type, team));
        true
    }

    /// Record a bid outcome. Ignored for 1-2, for undeclared calls, and for
    /// successes the current call set rules out.
    pub fn set_outcome(&mut self, team: TeamId, call_type: CallType, successful: bool) -> bool {
        if !call_type.is_bid() {
            return false;
        }
        if successful && is_success_blocked(team, call_type, &self.calls) {
            return false;
        }
        match self.calls.iter_mut().find(|c| c.matches(team, call_type)) {
            Some(call) => {
                call.successful = Some(successful);
                true
            }
            None => false,
        }
    }

    pub fn is_blocked(&self, team: TeamId, call_type: CallType) -> bool {
        is_call_blocked(team, call_type, &self.calls)
    }

    pub fn is_failed_only(&self, team: TeamId, call_type: CallType) -> bool {
        is_failed_only(team, call_type, &self.calls)
    }

    /// Adjusted points with blank entries counted as zero.
    pub fn preview(&self) -> DraftPreview {
        let raw = RoundPoints::new(
            self.team_a_points.unwrap_or(0),
            self.team_b_points.unwrap_or(0),
        );
        let adjusted = compute_adjusted_points(raw.team_a, raw.team_b, &self.calls);
        DraftPreview {
            raw,
            adjusted,
            delta: adjusted.delta_from(raw),
        }
    }

    pub fn validate(&self) -> Result<SumCheck, RoundError> {
        validate_round(self.team_a_points, self.team_b_points, &self.calls)
    }

    /// Back to a blank entry; the sync preference is kept.
    pub fn clear(&mut self) {
        *self = Self {
            sync_points: self.sync_points,
            ..Self::default()
        };
    }
}
