use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// One of the two fixed partnerships at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    /// Both teams in evaluation order (A first).
    pub const ALL: [TeamId; 2] = [TeamId::A, TeamId::B];

    #[inline]
    pub fn opponent(self) -> TeamId {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }

    pub fn default_name(self) -> &'static str {
        match self {
            TeamId::A => "Team A",
            TeamId::B => "Team B",
        }
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TeamId::A => write!(f, "A"),
            TeamId::B => write!(f, "B"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn with_default_name(id: TeamId) -> Self {
        Self {
            id,
            name: id.default_name().to_string(),
        }
    }
}

/// Both teams keyed by id, serialized as `{ "A": {..}, "B": {..} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    #[serde(rename = "A")]
    pub a: Team,
    #[serde(rename = "B")]
    pub b: Team,
}

impl Teams {
    pub fn get(&self, id: TeamId) -> &Team {
        match id {
            TeamId::A => &self.a,
            TeamId::B => &self.b,
        }
    }

    pub fn get_mut(&mut self, id: TeamId) -> &mut Team {
        match id {
            TeamId::A => &mut self.a,
            TeamId::B => &mut self.b,
        }
    }

    /// Stored ids must match the slot they live in.
    pub fn is_consistent(&self) -> bool {
        self.a.id == TeamId::A && self.b.id == TeamId::B
    }
}

impl Default for Teams {
    fn default() -> Self {
        Self {
            a: Team::with_default_name(TeamId::A),
            b: Team::with_default_name(TeamId::B),
        }
    }
}
