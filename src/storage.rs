//! CSV persistence of the statistics table.
//!
//! One row per player with the columns
//! `Player, Points, Tournaments Played, Tournaments Won, Matches Won, Matches Lost,
//! Games Won, Games Lost, Ratio Points/Tournaments`. The file is read fully and rewritten fully.

use crate::models::{Player, PlayerStats, RosterError, StatsTable};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Column headers of the stored table, in order.
pub const COLUMNS: [&str; 9] = [
    "Player",
    "Points",
    "Tournaments Played",
    "Tournaments Won",
    "Matches Won",
    "Matches Lost",
    "Games Won",
    "Games Lost",
    "Ratio Points/Tournaments",
];

/// Errors while reading or writing the stored table.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// The file contains a row the roster can't accept (blank or repeated name).
    Roster(RosterError),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
            StorageError::Csv(e) => write!(f, "CSV error: {}", e),
            StorageError::Roster(e) => write!(f, "Invalid table: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Csv(e) => Some(e),
            StorageError::Roster(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<csv::Error> for StorageError {
    fn from(e: csv::Error) -> Self {
        StorageError::Csv(e)
    }
}

impl From<RosterError> for StorageError {
    fn from(e: RosterError) -> Self {
        StorageError::Roster(e)
    }
}

/// One CSV row. Counters are read leniently ("3" and "3.0" both work) since spreadsheet
/// tools like to write whole numbers as floats.
#[derive(Debug, Serialize, Deserialize)]
struct StatsRow {
    #[serde(rename = "Player")]
    player: String,
    #[serde(rename = "Points", deserialize_with = "count")]
    points: u32,
    #[serde(rename = "Tournaments Played", deserialize_with = "count")]
    tournaments_played: u32,
    #[serde(rename = "Tournaments Won", deserialize_with = "count")]
    tournaments_won: u32,
    #[serde(rename = "Matches Won", deserialize_with = "count")]
    matches_won: u32,
    #[serde(rename = "Matches Lost", deserialize_with = "count")]
    matches_lost: u32,
    #[serde(rename = "Games Won", deserialize_with = "count")]
    games_won: u32,
    #[serde(rename = "Games Lost", deserialize_with = "count")]
    games_lost: u32,
    /// Written for readers of the file; recomputed from the counters on load.
    #[serde(rename = "Ratio Points/Tournaments", default)]
    ratio: f64,
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!(
            "expected a whole non-negative number, got {}",
            value
        )));
    }
    Ok(value as u32)
}

impl From<&Player> for StatsRow {
    fn from(p: &Player) -> Self {
        let s = &p.stats;
        Self {
            player: p.name.clone(),
            points: s.points,
            tournaments_played: s.tournaments_played,
            tournaments_won: s.tournaments_won,
            matches_won: s.matches_won,
            matches_lost: s.matches_lost,
            games_won: s.games_won,
            games_lost: s.games_lost,
            ratio: s.points_per_tournament(),
        }
    }
}

impl From<StatsRow> for Player {
    fn from(row: StatsRow) -> Self {
        Player {
            name: row.player,
            stats: PlayerStats {
                points: row.points,
                tournaments_played: row.tournaments_played,
                tournaments_won: row.tournaments_won,
                matches_won: row.matches_won,
                matches_lost: row.matches_lost,
                games_won: row.games_won,
                games_lost: row.games_lost,
            },
        }
    }
}

/// Parse a table from CSV. Unknown columns (e.g. an exported index column) are ignored.
pub fn read_table<R: Read>(reader: R) -> Result<StatsTable, StorageError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut table = StatsTable::new();
    for row in csv_reader.deserialize::<StatsRow>() {
        table.insert_player(Player::from(row?))?;
    }
    Ok(table)
}

/// Write the table as CSV in roster order, header included even when the table is empty.
pub fn write_table<W: Write>(table: &StatsTable, writer: W) -> Result<(), StorageError> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(COLUMNS)?;
    for player in table.players() {
        csv_writer.serialize(StatsRow::from(player))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Load the table from `path`. A missing file means nothing has been recorded yet.
pub fn load_table(path: &Path) -> Result<StatsTable, StorageError> {
    if !path.exists() {
        log::info!("{} not found, starting with an empty table", path.display());
        return Ok(StatsTable::new());
    }
    let table = read_table(fs::File::open(path)?)?;
    log::info!("Loaded {} player(s) from {}", table.len(), path.display());
    Ok(table)
}

/// Rewrite `path` with the whole table. Writes a sibling temp file first and renames it over
/// the old one, so a failed write leaves the previous table in place and no temp file behind.
pub fn save_table(table: &StatsTable, path: &Path) -> Result<(), StorageError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);
    let saved = fs::File::create(tmp)
        .map_err(StorageError::from)
        .and_then(|file| write_table(table, file))
        .and_then(|()| fs::rename(tmp, path).map_err(StorageError::from));
    if let Err(e) = saved {
        if tmp.is_file() {
            if let Err(rm) = fs::remove_file(tmp) {
                log::warn!("Could not remove {}: {}", tmp.display(), rm);
            }
        }
        return Err(e);
    }
    log::debug!("Saved {} player(s) to {}", table.len(), path.display());
    Ok(())
}
