//! Tournament standings: order participants and hand out placement points.

use crate::logic::rules::placement_points;
use crate::logic::scoring::ScoringError;
use crate::models::PlayerName;
use serde::{Deserialize, Serialize};

/// One participant's results within a single tournament.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentLine {
    pub name: PlayerName,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub games_won: u32,
    pub games_lost: u32,
}

impl TournamentLine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record one match: the team's games go to `games_won`, the opponent's to `games_lost`.
    /// The line is left unchanged if any total would overflow.
    pub fn record_match(
        &mut self,
        won: bool,
        games_for: u32,
        games_against: u32,
    ) -> Result<(), ScoringError> {
        let (won, lost) = if won { (1, 0) } else { (0, 1) };
        let totals = (
            self.matches_won.checked_add(won),
            self.matches_lost.checked_add(lost),
            self.games_won.checked_add(games_for),
            self.games_lost.checked_add(games_against),
        );
        match totals {
            (Some(matches_won), Some(matches_lost), Some(games_won), Some(games_lost)) => {
                self.matches_won = matches_won;
                self.matches_lost = matches_lost;
                self.games_won = games_won;
                self.games_lost = games_lost;
                Ok(())
            }
            _ => Err(ScoringError::CounterOverflow(self.name.clone())),
        }
    }

    /// Standings key, compared descending.
    pub fn sort_key(&self) -> (u32, u32) {
        (self.matches_won, self.games_won)
    }
}

/// A participant's finishing position and the points it earned.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// 1-based rank; tied participants share the rank of the first tied position.
    pub rank: usize,
    pub points: u32,
    #[serde(flatten)]
    pub line: TournamentLine,
}

/// Rank the lines by matches won, then games won (both descending).
///
/// Participants with identical keys share a rank and get the points of the first position of
/// their group; the next group starts after the whole tie (10, 10, 4, 2 for a tie at the top).
/// Ties keep the order the lines were given in.
pub fn assign_placements(mut lines: Vec<TournamentLine>) -> Vec<Placement> {
    lines.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

    let mut placements = Vec::with_capacity(lines.len());
    let mut position = 0;
    let mut lines = lines.into_iter().peekable();
    while let Some(first) = lines.next() {
        let key = first.sort_key();
        let points = placement_points(position);
        let mut group = vec![first];
        while let Some(next) = lines.next_if(|l| l.sort_key() == key) {
            group.push(next);
        }
        let group_size = group.len();
        placements.extend(group.into_iter().map(|line| Placement {
            rank: position + 1,
            points,
            line,
        }));
        position += group_size;
    }
    placements
}
