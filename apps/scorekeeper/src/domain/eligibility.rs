//! Which declarations may still be made for the round being entered.
//!
//! Pure functions over the in-progress call list; recomputed on every change.
//!
//! - A team with a successful Tichu cannot newly declare Grand Tichu (and vice
//!   versa). A failed bid does not stop the other from being attempted.
//! - Once a team has a successful bid, the opponent's bids can only fail and
//!   the opponent cannot claim a 1-2.
//! - A team whose other bid succeeded, or whose opponent holds the 1-2, can
//!   only fail a bid.
//! - Only one team can claim the 1-2.

use crate::domain::calls::{find_call, Call, CallType};
use crate::domain::teams::TeamId;

fn has_successful_bid(calls: &[Call], team: TeamId) -> bool {
    calls
        .iter()
        .any(|c| c.team_id == team && c.is_successful_bid())
}

/// True when `team` may not newly declare `call_type`.
///
/// A call already in the list is never blocked, so it can still be removed
/// or resolved.
pub fn is_call_blocked(team: TeamId, call_type: CallType, calls: &[Call]) -> bool {
    if find_call(calls, team, call_type).is_some() {
        return false;
    }

    let opponent = team.opponent();
    match call_type {
        CallType::OneTwo => {
            find_call(calls, opponent, CallType::OneTwo).is_some()
                || has_successful_bid(calls, opponent)
        }
        bid => bid
            .sibling_bid()
            .and_then(|sibling| find_call(calls, team, sibling))
            .is_some_and(Call::is_successful_bid),
    }
}

/// True when `team`'s `call_type` bid can only be recorded as failed.
pub fn is_failed_only(team: TeamId, call_type: CallType, calls: &[Call]) -> bool {
    call_type.is_bid() && has_successful_bid(calls, team.opponent())
}

/// True when `team`'s `call_type` bid may not be marked successful.
///
/// Holds when the opponent already went out first (a successful bid or a
/// 1-2), or when the team's other bid already succeeded.
pub fn is_success_blocked(team: TeamId, call_type: CallType, calls: &[Call]) -> bool {
    if !call_type.is_bid() {
        return false;
    }
    let sibling_succeeded = call_type
        .sibling_bid()
        .and_then(|sibling| find_call(calls, team, sibling))
        .is_some_and(Call::is_successful_bid);

    sibling_succeeded
        || is_failed_only(team, call_type, calls)
        || find_call(calls, team.opponent(), CallType::OneTwo).is_some()
}
