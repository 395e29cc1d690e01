//! Padel tournament ranking: library with models, scoring logic and CSV storage.

pub mod config;
pub mod logic;
pub mod models;
pub mod storage;

pub use config::{Config, ConfigError};
pub use logic::{
    apply_tournament, assign_placements, draw_fixtures, placement_points, round_robin_fixtures,
    validate_match, EqualScorePolicy, Fixture, FixtureError, InvalidMatch, MatchOutcome,
    Placement, RosterPolicy, ScoringError, ScoringRules, TournamentLine, TournamentReport,
    PLACEMENT_POINTS,
};
pub use models::{
    GameMatch, Player, PlayerName, PlayerStats, RosterError, StatsTable, Team, TournamentResult,
};
pub use storage::{load_table, read_table, save_table, write_table, StorageError};
