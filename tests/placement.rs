//! Integration tests for tournament standings and placement points.

use padel_ranking::{
    assign_placements, placement_points, ScoringError, TournamentLine, PLACEMENT_POINTS,
};

fn line(name: &str, matches_won: u32, games_won: u32) -> TournamentLine {
    TournamentLine {
        matches_won,
        games_won,
        ..TournamentLine::new(name)
    }
}

fn summary(lines: Vec<TournamentLine>) -> Vec<(String, usize, u32)> {
    assign_placements(lines)
        .into_iter()
        .map(|p| (p.line.name, p.rank, p.points))
        .collect()
}

#[test]
fn points_table_pads_with_zeros() {
    assert_eq!(PLACEMENT_POINTS, [10, 6, 4, 2]);
    assert_eq!(placement_points(0), 10);
    assert_eq!(placement_points(3), 2);
    assert_eq!(placement_points(4), 0);
    assert_eq!(placement_points(100), 0);
}

#[test]
fn orders_by_match_wins_then_games_won() {
    let standings = summary(vec![
        line("A", 1, 20),
        line("B", 3, 10),
        line("C", 1, 25),
        line("D", 2, 5),
    ]);
    assert_eq!(
        standings,
        [
            ("B".to_string(), 1, 10),
            ("D".to_string(), 2, 6),
            ("C".to_string(), 3, 4),
            ("A".to_string(), 4, 2),
        ]
    );
}

#[test]
fn tie_groups_share_points_and_advance_by_group_size() {
    let standings = summary(vec![
        line("A", 2, 15),
        line("B", 3, 18),
        line("C", 2, 15),
        line("D", 2, 15),
        line("E", 0, 4),
    ]);
    assert_eq!(
        standings,
        [
            ("B".to_string(), 1, 10),
            ("A".to_string(), 2, 6),
            ("C".to_string(), 2, 6),
            ("D".to_string(), 2, 6),
            ("E".to_string(), 5, 0),
        ]
    );
}

#[test]
fn tie_for_last_beyond_the_table_scores_nothing() {
    let standings = summary(vec![
        line("A", 3, 18),
        line("B", 2, 15),
        line("C", 2, 14),
        line("D", 1, 9),
        line("E", 0, 3),
        line("F", 0, 3),
    ]);
    let points: Vec<u32> = standings.iter().map(|(_, _, p)| *p).collect();
    assert_eq!(points, [10, 6, 4, 2, 0, 0]);
    let ranks: Vec<usize> = standings.iter().map(|(_, r, _)| *r).collect();
    assert_eq!(ranks, [1, 2, 3, 4, 5, 5]);
}

#[test]
fn everyone_tied_gets_first_place_points() {
    let standings = summary(vec![line("A", 1, 6), line("B", 1, 6), line("C", 1, 6), line("D", 1, 6)]);
    assert!(standings.iter().all(|(_, rank, points)| *rank == 1 && *points == 10));
}

#[test]
fn no_lines_no_placements() {
    assert!(assign_placements(Vec::new()).is_empty());
}

#[test]
fn record_match_accumulates() {
    let mut l = TournamentLine::new("A");
    l.record_match(true, 6, 2).unwrap();
    l.record_match(false, 3, 6).unwrap();
    assert_eq!(l.matches_won, 1);
    assert_eq!(l.matches_lost, 1);
    assert_eq!(l.games_won, 9);
    assert_eq!(l.games_lost, 8);
    assert_eq!(l.sort_key(), (1, 9));
}

#[test]
fn record_match_leaves_line_unchanged_on_overflow() {
    let mut l = TournamentLine {
        games_won: u32::MAX - 1,
        ..TournamentLine::new("A")
    };
    assert_eq!(
        l.record_match(true, 2, 0),
        Err(ScoringError::CounterOverflow("A".into()))
    );
    assert_eq!(l.matches_won, 0);
    assert_eq!(l.games_won, u32::MAX - 1);
}
