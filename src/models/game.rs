//! Match (game), Team and TournamentResult for 2v2 padel games.

use crate::models::player::PlayerName;
use serde::{Deserialize, Serialize};

/// One side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn opponent(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::One => write!(f, "team 1"),
            Team::Two => write!(f, "team 2"),
        }
    }
}

/// A single doubles match with its final game score.
///
/// Team sizes and scores are not enforced by the type: submissions come straight from a form
/// and are checked by the scoring engine before anything is applied.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    /// Team 1 player names (exactly 2 in a valid match).
    pub team_1: Vec<PlayerName>,
    /// Team 2 player names.
    pub team_2: Vec<PlayerName>,
    /// Games won by team 1.
    pub score_1: i32,
    /// Games won by team 2.
    pub score_2: i32,
}

impl GameMatch {
    pub fn new(
        team_1: [&str; 2],
        team_2: [&str; 2],
        score_1: i32,
        score_2: i32,
    ) -> Self {
        Self {
            team_1: team_1.iter().map(|s| s.to_string()).collect(),
            team_2: team_2.iter().map(|s| s.to_string()).collect(),
            score_1,
            score_2,
        }
    }

    pub fn players(&self, team: Team) -> &[PlayerName] {
        match team {
            Team::One => &self.team_1,
            Team::Two => &self.team_2,
        }
    }

    pub fn score(&self, team: Team) -> i32 {
        match team {
            Team::One => self.score_1,
            Team::Two => self.score_2,
        }
    }

    /// All four players, team 1 first.
    pub fn all_players(&self) -> impl Iterator<Item = &PlayerName> {
        self.team_1.iter().chain(self.team_2.iter())
    }
}

/// All matches of one tournament, submitted and scored together.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub matches: Vec<GameMatch>,
}

impl TournamentResult {
    pub fn new(matches: Vec<GameMatch>) -> Self {
        Self { matches }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
