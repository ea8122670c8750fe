//! CSV input from the roster/results collaborator.
//!
//! Roster files have a `name` column. Results files have
//! `home,away,home_score,away_score` and an optional `winner` column; teams are
//! referenced by name.

use crate::logic::record_result;
use crate::models::{League, LeagueError, TeamId};
use serde::Deserialize;
use std::io;

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
}

/// One reported result, as read from CSV.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct ResultRow {
    pub home: String,
    pub away: String,
    pub home_score: i64,
    pub away_score: i64,
    #[serde(default)]
    pub winner: Option<String>,
}

/// Team names in file order. Blank names are skipped.
pub fn read_roster<R: io::Read>(reader: R) -> Result<Vec<String>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut names = Vec::new();
    for row in rdr.deserialize() {
        let row: RosterRow = row?;
        if !row.name.is_empty() {
            names.push(row.name);
        }
    }
    Ok(names)
}

pub fn read_results<R: io::Read>(reader: R) -> Result<Vec<ResultRow>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize().collect()
}

/// Record each row against the league's pending fixture between the two teams, in order.
/// Stops at the first row that cannot be applied; earlier rows stay recorded.
pub fn apply_results(league: &mut League, rows: &[ResultRow]) -> Result<usize, LeagueError> {
    for row in rows {
        let home = team_id_by_name(league, &row.home)?;
        let away = team_id_by_name(league, &row.away)?;
        let winner = match row.winner.as_deref().filter(|w| !w.is_empty()) {
            Some(name) => Some(team_id_by_name(league, name)?),
            None => None,
        };
        let m = league
            .pending_match_between(home, away)
            .ok_or_else(|| LeagueError::NoPendingFixture {
                home: row.home.clone(),
                away: row.away.clone(),
            })?;

        // The row names home first; flip scores when the fixture has them the other way.
        let (home_score, away_score) = if m.home_team_id == Some(home) {
            (row.home_score, row.away_score)
        } else {
            (row.away_score, row.home_score)
        };
        let match_id = m.id;
        record_result(league, match_id, home_score, away_score, winner)?;
    }
    Ok(rows.len())
}

fn team_id_by_name(league: &League, name: &str) -> Result<TeamId, LeagueError> {
    league
        .team_by_name(name)
        .map(|t| t.id)
        .ok_or_else(|| LeagueError::UnknownTeamName(name.to_string()))
}
