//! StatsTable: the roster and every player's cumulative statistics.

use crate::models::player::{Player, PlayerStats};
use serde::{Deserialize, Serialize};

/// Errors that can occur while editing the roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// Player names must contain at least one non-whitespace character.
    EmptyName,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName(String),
    /// No player with this name on the roster.
    PlayerNotFound(String),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::EmptyName => write!(f, "Player name must not be empty"),
            RosterError::DuplicatePlayerName(name) => {
                write!(f, "A player named {} already exists", name)
            }
            RosterError::PlayerNotFound(name) => write!(f, "Player {} not found", name),
        }
    }
}

impl std::error::Error for RosterError {}

/// Every known player with their stats, in roster (registration) order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatsTable {
    players: Vec<Player>,
}

impl StatsTable {
    /// Empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster with the given players, all stats zero.
    pub fn with_players<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for name in names {
            table.register_player(name.as_ref())?;
        }
        Ok(table)
    }

    /// The four placeholder players a fresh installation starts with.
    pub fn placeholder() -> Self {
        Self {
            players: (1..=4).map(|i| Player::new(format!("Player {i}"))).collect(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by name (trimmed, case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.is_named(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Stats of a player, if they are on the roster.
    pub fn stats(&self, name: &str) -> Option<&PlayerStats> {
        self.get(name).map(|p| &p.stats)
    }

    /// Add a player with zeroed stats. Names are trimmed and must be unique (case-insensitive).
    pub fn register_player(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(name) {
            return Err(RosterError::DuplicatePlayerName(name.to_string()));
        }
        self.players.push(Player::new(name));
        Ok(())
    }

    /// Insert a player row as-is (used when loading a stored table).
    pub fn insert_player(&mut self, player: Player) -> Result<(), RosterError> {
        let name = player.name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(name) {
            return Err(RosterError::DuplicatePlayerName(name.to_string()));
        }
        self.players.push(Player {
            name: name.to_string(),
            stats: player.stats,
        });
        Ok(())
    }

    /// Rename a player in place; their stats stay attached to the new name.
    /// Changing only the capitalisation of a name is allowed.
    pub fn rename_player(&mut self, old: &str, new: &str) -> Result<(), RosterError> {
        let new = new.trim();
        if new.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.is_named(old))
            .ok_or_else(|| RosterError::PlayerNotFound(old.trim().to_string()))?;
        let clash = self
            .players
            .iter()
            .enumerate()
            .any(|(i, p)| i != idx && p.is_named(new));
        if clash {
            return Err(RosterError::DuplicatePlayerName(new.to_string()));
        }
        self.players[idx].name = new.to_string();
        Ok(())
    }

    /// Zero every player's stats; the roster itself is kept.
    pub fn reset_all(&mut self) {
        for p in &mut self.players {
            p.stats = PlayerStats::default();
        }
    }

    /// Ranking snapshot: players by points, highest first. Equal points keep roster order.
    pub fn ranking(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.stats.points.cmp(&a.stats.points));
        ranked
    }
}
