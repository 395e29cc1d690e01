//! Tournament business logic: validation, scoring, placement points, fixtures.

mod placement;
mod round_robin;
mod rules;
mod scoring;
mod validation;

pub use placement::{assign_placements, Placement, TournamentLine};
pub use round_robin::{
    draw_fixtures, round_robin_fixtures, Fixture, FixtureError, ROUND_ROBIN_PLAYERS,
};
pub use rules::{
    placement_points, EqualScorePolicy, RosterPolicy, ScoringRules, UnknownPolicy,
    DEFAULT_MAX_SCORE, PLACEMENT_POINTS,
};
pub use scoring::{apply_tournament, ScoringError, TournamentReport};
pub use validation::{validate_match, InvalidMatch, MatchOutcome};
