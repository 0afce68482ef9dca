use serde::{Deserialize, Serialize};

use crate::domain::calls::Call;
use crate::domain::scoring::RoundPoints;
use crate::domain::teams::TeamId;

/// 1-based, gapless position of a round within a game.
pub type RoundId = u32;

/// A committed round. Points are the adjusted (post-call) values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: RoundId,
    pub team_a_points: i32,
    pub team_b_points: i32,
    pub calls: Vec<Call>,
}

impl Round {
    pub fn new(id: RoundId, adjusted: RoundPoints, calls: Vec<Call>) -> Self {
        Self {
            id,
            team_a_points: adjusted.team_a,
            team_b_points: adjusted.team_b,
            calls,
        }
    }

    pub fn points(&self) -> RoundPoints {
        RoundPoints::new(self.team_a_points, self.team_b_points)
    }

    pub fn points_for(&self, team: TeamId) -> i32 {
        self.points().get(team)
    }
}
