use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::rules::{GRAND_TICHU_BONUS, ONE_TWO_BONUS, TICHU_BONUS};
use crate::domain::teams::TeamId;

/// Special declarations that move points outside of trick counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallType {
    Tichu,
    GrandTichu,
    /// Double victory: both partners go out first and second.
    OneTwo,
}

impl CallType {
    pub const ALL: [CallType; 3] = [CallType::Tichu, CallType::GrandTichu, CallType::OneTwo];

    /// Points won on success (or lost on failure for bids).
    pub const fn bonus(self) -> i32 {
        match self {
            CallType::Tichu => TICHU_BONUS,
            CallType::GrandTichu => GRAND_TICHU_BONUS,
            CallType::OneTwo => ONE_TWO_BONUS,
        }
    }

    /// Tichu and Grand Tichu need a success/failure outcome; 1-2 does not.
    pub const fn is_bid(self) -> bool {
        matches!(self, CallType::Tichu | CallType::GrandTichu)
    }

    /// The other bid type, if this is a bid.
    pub const fn sibling_bid(self) -> Option<CallType> {
        match self {
            CallType::Tichu => Some(CallType::GrandTichu),
            CallType::GrandTichu => Some(CallType::Tichu),
            CallType::OneTwo => None,
        }
    }
}

impl Display for CallType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CallType::Tichu => write!(f, "Tichu"),
            CallType::GrandTichu => write!(f, "Grand Tichu"),
            CallType::OneTwo => write!(f, "1-2"),
        }
    }
}

/// A declaration made by one team in one round.
///
/// `successful` is `None` while a bid is pending and is ignored for 1-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    #[serde(rename = "type")]
    pub call_type: CallType,
    pub team_id: TeamId,
    pub successful: Option<bool>,
}

impl Call {
    pub const fn new(call_type: CallType, team_id: TeamId, successful: Option<bool>) -> Self {
        Self {
            call_type,
            team_id,
            successful,
        }
    }

    pub const fn tichu(team_id: TeamId, successful: bool) -> Self {
        Self::new(CallType::Tichu, team_id, Some(successful))
    }

    pub const fn grand_tichu(team_id: TeamId, successful: bool) -> Self {
        Self::new(CallType::GrandTichu, team_id, Some(successful))
    }

    pub const fn one_two(team_id: TeamId) -> Self {
        Self::new(CallType::OneTwo, team_id, None)
    }

    /// Freshly declared call with no outcome yet.
    pub const fn pending(call_type: CallType, team_id: TeamId) -> Self {
        Self::new(call_type, team_id, None)
    }

    pub fn is_pending(&self) -> bool {
        self.call_type.is_bid() && self.successful.is_none()
    }

    pub fn is_successful_bid(&self) -> bool {
        self.call_type.is_bid() && self.successful == Some(true)
    }

    pub fn matches(&self, team_id: TeamId, call_type: CallType) -> bool {
        self.team_id == team_id && self.call_type == call_type
    }
}

pub fn find_call(calls: &[Call], team_id: TeamId, call_type: CallType) -> Option<&Call> {
    calls.iter().find(|c| c.matches(team_id, call_type))
}
