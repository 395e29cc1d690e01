//! Player and PlayerStats data structures.

use serde::{Deserialize, Serialize};

/// Players are identified by their (roster-unique) name.
pub type PlayerName = String;

/// Cumulative statistics of a player across all recorded tournaments.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Placement points collected over all tournaments.
    pub points: u32,
    pub tournaments_played: u32,
    pub tournaments_won: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub games_won: u32,
    pub games_lost: u32,
}

impl PlayerStats {
    /// Average placement points per tournament played (0 before the first tournament).
    pub fn points_per_tournament(&self) -> f64 {
        if self.tournaments_played == 0 {
            0.0
        } else {
            f64::from(self.points) / f64::from(self.tournaments_played)
        }
    }

    pub fn matches_played(&self) -> u32 {
        self.matches_won + self.matches_lost
    }

    pub fn games_played(&self) -> u32 {
        self.games_won + self.games_lost
    }
}

/// A player on the roster together with their cumulative stats.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: PlayerName,
    pub stats: PlayerStats,
}

impl Player {
    /// Create a new player with the given name. All stats start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: PlayerStats::default(),
        }
    }

    /// Case-insensitive name comparison (roster names are unique ignoring ASCII case).
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
