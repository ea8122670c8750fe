//! Schedule generation: turn the roster into dated fixtures for the league's format.

use crate::logic::advancement::advance;
use crate::logic::bracket::{bye_match_name, match_name};
use crate::logic::pairing;
use crate::models::{League, LeagueError, Match, MatchStatus, Slot, TeamId};
use chrono::{Duration, NaiveDate};

/// Date of a 0-based round: one week per round from the season start.
pub fn round_date(season_start: NaiveDate, round_index: usize) -> NaiveDate {
    let weeks = i64::try_from(round_index).unwrap_or(i64::MAX);
    Duration::try_weeks(weeks)
        .and_then(|offset| season_start.checked_add_signed(offset))
        .unwrap_or(NaiveDate::MAX)
}

/// Generate the first schedule for a league. Fails if fixtures already exist; use
/// [`regenerate_schedule`] to replace them.
pub fn generate_schedule(league: &mut League) -> Result<(), LeagueError> {
    if !league.matches.is_empty() {
        return Err(LeagueError::ScheduleExists);
    }
    replace_schedule(league)
}

/// Discard every fixture of the league and generate a fresh schedule from the current roster.
///
/// The new fixtures are built in full before the old ones are dropped, so on error the
/// existing schedule is kept and there is never a moment with no fixtures.
pub fn regenerate_schedule(league: &mut League) -> Result<(), LeagueError> {
    replace_schedule(league)
}

fn replace_schedule(league: &mut League) -> Result<(), LeagueError> {
    let fixtures = if league.format.is_elimination() {
        elimination_fixtures(league)?
    } else {
        round_robin_fixtures(league)?
    };
    let discarded = std::mem::replace(&mut league.matches, fixtures).len();

    if league.format.is_elimination() {
        advance_byes(league);
    }

    log::info!(
        "Generated {} schedule for '{}': {} teams, {} matches ({} discarded)",
        league.format,
        league.name,
        league.teams.len(),
        league.matches.len(),
        discarded
    );
    Ok(())
}

fn round_robin_fixtures(league: &League) -> Result<Vec<Match>, LeagueError> {
    let rounds = pairing::round_robin(&league.team_ids())?;

    let mut fixtures = Vec::new();
    for (round_index, round) in rounds.iter().enumerate() {
        let date = round_date(league.season_start, round_index);
        for &(home, away) in round {
            let mut m = Match::new(league.id, date);
            m.home_team_id = Some(home);
            m.away_team_id = Some(away);
            m.name = match_name(league.team_name(home), league.team_name(away));
            fixtures.push(m);
        }
    }
    Ok(fixtures)
}

fn elimination_fixtures(league: &League) -> Result<Vec<Match>, LeagueError> {
    let rounds = pairing::elimination(&league.team_ids())?;

    let mut fixtures = Vec::new();
    for (round_index, round) in rounds.iter().enumerate() {
        let date = round_date(league.season_start, round_index);
        for (match_index, &(home, away)) in round.iter().enumerate() {
            let mut m = Match::new(league.id, date);
            m.round_number = Some(round_index as u32 + 1);
            m.match_index = Some(match_index as u32);
            m.home_team_id = home.team();
            m.away_team_id = away.team();
            let name = match (home, away) {
                (Slot::Team(t), Slot::Bye) | (Slot::Bye, Slot::Team(t)) => {
                    m.winner_id = Some(t);
                    m.status = MatchStatus::Completed;
                    bye_match_name(league.team_name(t).unwrap_or_default())
                }
                _ => match_name(
                    home.team().and_then(|t| league.team_name(t)),
                    away.team().and_then(|t| league.team_name(t)),
                ),
            };
            m.name = name;
            fixtures.push(m);
        }
    }
    Ok(fixtures)
}

/// Push every round-1 bye winner into round 2.
fn advance_byes(league: &mut League) {
    let byes: Vec<(TeamId, u32, u32)> = league
        .matches
        .iter()
        .filter(|m| m.is_completed() && m.round_number == Some(1))
        .filter_map(|m| {
            let (round, index) = m.position()?;
            Some((m.winner_id?, round, index))
        })
        .collect();

    for (winner, round, index) in byes {
        advance(league, winner, round, index);
    }
}
