//! Round-robin standings.

use crate::models::{League, LeagueError, Match, StandingRow, Team};
use std::collections::HashMap;

/// Standings table for a round-robin league.
pub fn compute_standings(league: &League) -> Result<Vec<StandingRow>, LeagueError> {
    if league.format.is_elimination() {
        return Err(LeagueError::StandingsUnavailable(league.format));
    }
    Ok(standings_table(&league.teams, &league.matches))
}

/// Fold completed round-robin matches into one row per team and rank them.
///
/// Order: wins, then score difference, then points scored, all descending. Remaining
/// ties keep roster order (the sort is stable). Bracket matches are ignored, and matches
/// referencing a team no longer on the roster are skipped.
pub fn standings_table(teams: &[Team], matches: &[Match]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = teams
        .iter()
        .map(|t| StandingRow::new(t.id, t.name.clone()))
        .collect();
    let index: HashMap<_, _> = teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

    for m in matches
        .iter()
        .filter(|m| m.is_completed() && m.position().is_none())
    {
        let (Some(home), Some(away), Some(home_score), Some(away_score)) =
            (m.home_team_id, m.away_team_id, m.home_score, m.away_score)
        else {
            continue;
        };
        let (Some(&h), Some(&a)) = (index.get(&home), index.get(&away)) else {
            log::warn!("Skipping '{}' in standings: team no longer in league", m.name);
            continue;
        };
        rows[h].add_result(home_score, away_score);
        rows[a].add_result(away_score, home_score);
    }

    for row in &mut rows {
        row.diff = row.points_for as i64 - row.points_against as i64;
    }

    rows.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.diff.cmp(&a.diff))
            .then(b.points_for.cmp(&a.points_for))
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.position = i + 1;
    }
    rows
}
