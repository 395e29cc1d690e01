//! Round-robin fixtures: four players, three matches, everyone partners everyone once.

use crate::models::{GameMatch, PlayerName, StatsTable};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Players in one round-robin tournament.
pub const ROUND_ROBIN_PLAYERS: usize = 4;

/// Errors that can occur while building fixtures.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FixtureError {
    /// Not enough players on the roster to draw a tournament.
    NotEnoughPlayers { found: usize },
    /// A round robin needs exactly four players.
    WrongNumberOfPlayers(usize),
    DuplicatePlayer(String),
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::NotEnoughPlayers { found } => write!(
                f,
                "Need at least {} players for a tournament (have {})",
                ROUND_ROBIN_PLAYERS, found
            ),
            FixtureError::WrongNumberOfPlayers(n) => write!(
                f,
                "A round robin needs exactly {} players (got {})",
                ROUND_ROBIN_PLAYERS, n
            ),
            FixtureError::DuplicatePlayer(name) => {
                write!(f, "{} is listed more than once", name)
            }
        }
    }
}

impl std::error::Error for FixtureError {}

/// A scheduled match that hasn't been played yet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub team_1: [PlayerName; 2],
    pub team_2: [PlayerName; 2],
}

impl Fixture {
    /// The played match with its final score.
    pub fn with_scores(&self, score_1: i32, score_2: i32) -> GameMatch {
        GameMatch {
            team_1: self.team_1.to_vec(),
            team_2: self.team_2.to_vec(),
            score_1,
            score_2,
        }
    }
}

/// The three matches of a four-player round robin:
/// (A,B) v (C,D), (A,C) v (B,D), (A,D) v (B,C).
pub fn round_robin_fixtures<S: AsRef<str>>(players: &[S]) -> Result<Vec<Fixture>, FixtureError> {
    if players.len() != ROUND_ROBIN_PLAYERS {
        return Err(FixtureError::WrongNumberOfPlayers(players.len()));
    }
    let mut seen = HashSet::new();
    for p in players {
        let name = p.as_ref().trim();
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(FixtureError::DuplicatePlayer(name.to_string()));
        }
    }

    let name = |i: usize| players[i].as_ref().trim().to_string();
    Ok([(1, 2, 3), (2, 1, 3), (3, 1, 2)]
        .into_iter()
        .map(|(partner, b1, b2)| Fixture {
            team_1: [name(0), name(partner)],
            team_2: [name(b1), name(b2)],
        })
        .collect())
}

/// Shuffle the roster and schedule a round robin for the first four players drawn.
pub fn draw_fixtures<R: Rng + ?Sized>(
    table: &StatsTable,
    rng: &mut R,
) -> Result<Vec<Fixture>, FixtureError> {
    if table.len() < ROUND_ROBIN_PLAYERS {
        return Err(FixtureError::NotEnoughPlayers { found: table.len() });
    }
    let mut names: Vec<&str> = table.players().iter().map(|p| p.name.as_str()).collect();
    names.shuffle(rng);
    round_robin_fixtures(&names[..ROUND_ROBIN_PLAYERS])
}
