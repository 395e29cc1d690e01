//! Data structures for padel tournaments: players, matches, the statistics table.

mod game;
mod player;
mod table;

pub use game::{GameMatch, Team, TournamentResult};
pub use player::{Player, PlayerName, PlayerStats};
pub use table::{RosterError, StatsTable};
