//! Match validation. Every match of a tournament is checked before any stats change.

use crate::logic::rules::{EqualScorePolicy, ScoringRules};
use crate::models::{GameMatch, Team};
use std::collections::HashSet;

/// Why a submitted match can't be scored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidMatch {
    /// A team doesn't have exactly two players.
    WrongTeamSize { team: Team, size: usize },
    /// A player slot was left blank.
    BlankPlayerName,
    /// The same player appears twice in one match.
    DuplicatePlayer(String),
    NegativeScore { team: Team, score: i32 },
    ScoreAboveMaximum { team: Team, score: i32, max: u32 },
    /// Both teams have the same score and equal scores are rejected.
    EqualScores,
}

impl std::fmt::Display for InvalidMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMatch::WrongTeamSize { team, size } => {
                write!(f, "{} has {} players, expected 2", team, size)
            }
            InvalidMatch::BlankPlayerName => write!(f, "A player name is blank"),
            InvalidMatch::DuplicatePlayer(name) => {
                write!(f, "{} appears more than once in the match", name)
            }
            InvalidMatch::NegativeScore { team, score } => {
                write!(f, "{} has a negative score ({})", team, score)
            }
            InvalidMatch::ScoreAboveMaximum { team, score, max } => {
                write!(f, "{} score {} is above the maximum of {}", team, score, max)
            }
            InvalidMatch::EqualScores => write!(f, "Both teams have the same score"),
        }
    }
}

impl std::error::Error for InvalidMatch {}

/// A validated match: who won and the games each team took.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatchOutcome {
    pub winner: Team,
    pub games_1: u32,
    pub games_2: u32,
}

impl MatchOutcome {
    /// Games won by `team`.
    pub fn games(&self, team: Team) -> u32 {
        match team {
            Team::One => self.games_1,
            Team::Two => self.games_2,
        }
    }
}

/// Check one match against the rules and decide its winner.
pub fn validate_match(m: &GameMatch, rules: &ScoringRules) -> Result<MatchOutcome, InvalidMatch> {
    for team in [Team::One, Team::Two] {
        let size = m.players(team).len();
        if size != 2 {
            return Err(InvalidMatch::WrongTeamSize { team, size });
        }
    }

    let mut seen = HashSet::new();
    for name in m.all_players() {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidMatch::BlankPlayerName);
        }
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(InvalidMatch::DuplicatePlayer(name.to_string()));
        }
    }

    let games_1 = checked_score(m, Team::One, rules.max_score)?;
    let games_2 = checked_score(m, Team::Two, rules.max_score)?;

    let winner = if games_1 > games_2 {
        Team::One
    } else if games_2 > games_1 {
        Team::Two
    } else {
        match rules.equal_scores {
            EqualScorePolicy::Reject => return Err(InvalidMatch::EqualScores),
            EqualScorePolicy::SecondTeamWins => Team::Two,
        }
    };

    Ok(MatchOutcome {
        winner,
        games_1,
        games_2,
    })
}

fn checked_score(m: &GameMatch, team: Team, max: Option<u32>) -> Result<u32, InvalidMatch> {
    let score = m.score(team);
    let games = u32::try_from(score).map_err(|_| InvalidMatch::NegativeScore { team, score })?;
    match max {
        Some(max) if games > max => Err(InvalidMatch::ScoreAboveMaximum { team, score, max }),
        _ => Ok(games),
    }
}
