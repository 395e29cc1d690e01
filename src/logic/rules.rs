//! Scoring rules: placement points table and the policies fixed per installation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Points by finishing position in one tournament (1st, 2nd, ...). Positions past the end score 0.
pub const PLACEMENT_POINTS: [u32; 4] = [10, 6, 4, 2];

/// Highest game score the result form accepts for one team.
pub const DEFAULT_MAX_SCORE: u32 = 10;

/// Points for a 0-based position in the standings.
pub fn placement_points(position: usize) -> u32 {
    PLACEMENT_POINTS.get(position).copied().unwrap_or(0)
}

/// What to do with a match where both teams won the same number of games.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EqualScorePolicy {
    /// The match is invalid and the whole tournament is rejected.
    #[default]
    Reject,
    /// Team 2 is credited with the win.
    SecondTeamWins,
}

/// What to do with a match that names a player who is not on the roster.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RosterPolicy {
    /// Reject the tournament with `UnknownPlayer`.
    #[default]
    Strict,
    /// Add the player with zeroed stats before scoring.
    AutoRegister,
}

/// Error for policy names that don't parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownPolicy(pub String);

impl std::fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown policy: {}", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for EqualScorePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(EqualScorePolicy::Reject),
            "second-team-wins" | "second_team_wins" => Ok(EqualScorePolicy::SecondTeamWins),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl FromStr for RosterPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(RosterPolicy::Strict),
            "auto-register" | "auto_register" => Ok(RosterPolicy::AutoRegister),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Rules applied to every tournament. Chosen once (from config), never per call.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub equal_scores: EqualScorePolicy,
    pub roster: RosterPolicy,
    /// Upper bound for a team's game score; `None` disables the check.
    pub max_score: Option<u32>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            equal_scores: EqualScorePolicy::default(),
            roster: RosterPolicy::default(),
            max_score: Some(DEFAULT_MAX_SCORE),
        }
    }
}
