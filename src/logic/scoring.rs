//! Scoring a finished tournament into the cumulative statistics table.

use crate::logic::placement::{assign_placements, Placement, TournamentLine};
use crate::logic::rules::{RosterPolicy, ScoringRules};
use crate::logic::validation::{validate_match, InvalidMatch, MatchOutcome};
use crate::models::{PlayerStats, RosterError, StatsTable, Team, TournamentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Errors that reject a tournament submission. Nothing is applied when one is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoringError {
    /// The tournament has no matches.
    EmptyTournament,
    /// Match at `index` (0-based) is malformed.
    InvalidMatch { index: usize, reason: InvalidMatch },
    /// A match names a player who is not on the roster (strict roster policy).
    UnknownPlayer(String),
    /// Auto-registering a new player failed.
    Roster(RosterError),
    /// A player's statistics would exceed the largest storable count.
    CounterOverflow(String),
}

impl std::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringError::EmptyTournament => write!(f, "A tournament needs at least one match"),
            ScoringError::InvalidMatch { index, reason } => {
                write!(f, "Match {}: {}", index + 1, reason)
            }
            ScoringError::UnknownPlayer(name) => write!(f, "Unknown player: {}", name),
            ScoringError::Roster(e) => write!(f, "{}", e),
            ScoringError::CounterOverflow(name) => {
                write!(f, "Statistics of {} are too large to record", name)
            }
        }
    }
}

impl std::error::Error for ScoringError {}

impl From<RosterError> for ScoringError {
    fn from(e: RosterError) -> Self {
        ScoringError::Roster(e)
    }
}

/// Summary of one scored tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    /// Participants in finishing order.
    pub standings: Vec<Placement>,
}

impl TournamentReport {
    /// Everyone who finished first (more than one on a tie).
    pub fn winners(&self) -> impl Iterator<Item = &Placement> {
        self.standings.iter().filter(|p| p.rank == 1)
    }
}

/// Apply one tournament to the statistics table.
///
/// The input table is left untouched; the updated copy is returned together with the
/// tournament's standings. Steps:
/// 1. Validate every match (team sizes, distinct players, scores) and resolve its winner.
/// 2. Check players against the roster (or register them, per `rules.roster`).
/// 3. Sum each participant's matches and games for this tournament.
/// 4. Rank participants and assign placement points.
/// 5. Fold everything into the cumulative stats: +1 tournament played for every participant,
///    +1 tournament won for every participant ranked first.
///
/// Submitting the same tournament twice counts it twice.
pub fn apply_tournament(
    table: &StatsTable,
    result: &TournamentResult,
    rules: &ScoringRules,
) -> Result<(StatsTable, TournamentReport), ScoringError> {
    if result.is_empty() {
        return Err(ScoringError::EmptyTournament);
    }

    let outcomes = result
        .matches
        .iter()
        .enumerate()
        .map(|(index, m)| {
            validate_match(m, rules).map_err(|reason| ScoringError::InvalidMatch { index, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut updated = table.clone();
    resolve_players(&mut updated, result, rules.roster)?;

    let lines = tournament_lines(&updated, result, &outcomes)?;
    let standings = assign_placements(lines);

    for placement in &standings {
        let name = &placement.line.name;
        let player = updated
            .get_mut(name)
            .ok_or_else(|| ScoringError::UnknownPlayer(name.clone()))?;
        player.stats = with_placement(&player.stats, placement)
            .ok_or_else(|| ScoringError::CounterOverflow(name.clone()))?;
    }

    let report = TournamentReport {
        id: Uuid::new_v4(),
        recorded_at: Utc::now(),
        standings,
    };
    log::info!(
        "Recorded tournament {} ({} matches, {} players); winners: {}",
        report.id,
        result.matches.len(),
        report.standings.len(),
        report
            .winners()
            .map(|p| p.line.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok((updated, report))
}

/// `stats` with one tournament's placement added, or `None` if a counter would overflow.
fn with_placement(stats: &PlayerStats, placement: &Placement) -> Option<PlayerStats> {
    let line = &placement.line;
    let won = u32::from(placement.rank == 1);
    Some(PlayerStats {
        points: stats.points.checked_add(placement.points)?,
        tournaments_played: stats.tournaments_played.checked_add(1)?,
        tournaments_won: stats.tournaments_won.checked_add(won)?,
        matches_won: stats.matches_won.checked_add(line.matches_won)?,
        matches_lost: stats.matches_lost.checked_add(line.matches_lost)?,
        games_won: stats.games_won.checked_add(line.games_won)?,
        games_lost: stats.games_lost.checked_add(line.games_lost)?,
    })
}

/// Make sure every player named in `result` is on the roster.
fn resolve_players(
    table: &mut StatsTable,
    result: &TournamentResult,
    policy: RosterPolicy,
) -> Result<(), ScoringError> {
    for name in result.matches.iter().flat_map(|m| m.all_players()) {
        if table.contains(name) {
            continue;
        }
        match policy {
            RosterPolicy::Strict => {
                return Err(ScoringError::UnknownPlayer(name.trim().to_string()));
            }
            RosterPolicy::AutoRegister => {
                log::info!("Registering new player {}", name.trim());
                table.register_player(name)?;
            }
        }
    }
    Ok(())
}

/// One line per participant in order of first appearance, keyed by roster name.
fn tournament_lines(
    table: &StatsTable,
    result: &TournamentResult,
    outcomes: &[MatchOutcome],
) -> Result<Vec<TournamentLine>, ScoringError> {
    let mut lines: Vec<TournamentLine> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();

    for (m, outcome) in result.matches.iter().zip(outcomes) {
        log::debug!(
            "{:?} {} - {} {:?}: {} wins",
            m.team_1,
            outcome.games_1,
            outcome.games_2,
            m.team_2,
            outcome.winner
        );
        for team in [Team::One, Team::Two] {
            let won = outcome.winner == team;
            let games_for = outcome.games(team);
            let games_against = outcome.games(team.opponent());
            for name in m.players(team) {
                let roster_name = &table
                    .get(name)
                    .ok_or_else(|| ScoringError::UnknownPlayer(name.trim().to_string()))?
                    .name;
                let idx = *index_of.entry(roster_name.clone()).or_insert_with(|| {
                    lines.push(TournamentLine::new(roster_name.clone()));
                    lines.len() - 1
                });
                lines[idx].record_match(won, games_for, games_against)?;
            }
        }
    }
    Ok(lines)
}
