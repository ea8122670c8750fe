//! Integration tests for round-robin schedules and result entry.

use chrono::NaiveDate;
use league_scheduler::{
    generate_schedule, record_result, regenerate_schedule, League, LeagueError, MatchStatus,
    ScheduleFormat,
};
use std::collections::BTreeSet;

fn season(n: usize) -> League {
    let names: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
    let start = NaiveDate::from_ymd_opt(2025, 9, 6).unwrap();
    let mut league =
        League::with_teams("Sunday League", ScheduleFormat::RoundRobin, start, &names[..]).unwrap();
    generate_schedule(&mut league).unwrap();
    league
}

#[test]
fn generate_requires_two_teams() {
    let start = NaiveDate::from_ymd_opt(2025, 9, 6).unwrap();
    let mut league = League::with_teams("Solo", ScheduleFormat::RoundRobin, start, &["Only"]).unwrap();
    assert_eq!(
        generate_schedule(&mut league),
        Err(LeagueError::NotEnoughTeams { required: 2, found: 1 })
    );
    assert!(league.matches.is_empty());
}

#[test]
fn generate_twice_is_rejected() {
    let mut league = season(4);
    assert_eq!(generate_schedule(&mut league), Err(LeagueError::ScheduleExists));
    assert_eq!(league.matches.len(), 6);
}

#[test]
fn round_robin_fixtures_are_dated_weekly() {
    let league = season(4);
    assert_eq!(league.matches.len(), 6);
    assert!(league.matches.iter().all(|m| m.position().is_none()));

    let dates: BTreeSet<NaiveDate> = league.matches.iter().map(|m| m.date).collect();
    let expected: BTreeSet<NaiveDate> = [6, 13, 20]
        .iter()
        .map(|&d| NaiveDate::from_ymd_opt(2025, 9, d).unwrap())
        .collect();
    assert_eq!(dates, expected);
}

#[test]
fn odd_season_has_n_rounds() {
    let league = season(5);
    assert_eq!(league.matches.len(), 10);
    let dates: BTreeSet<NaiveDate> = league.matches.iter().map(|m| m.date).collect();
    assert_eq!(dates.len(), 5);
}

#[test]
fn higher_score_wins() {
    let mut league = season(2);
    let m = league.matches[0].clone();

    let winner = record_result(&mut league, m.id, 1, 4, None).unwrap();
    assert_eq!(winner, m.away_team_id);

    let m = league.find_match(m.id).unwrap();
    assert_eq!(m.status, MatchStatus::Completed);
    assert_eq!((m.home_score, m.away_score), (Some(1), Some(4)));
    assert_eq!(m.winner_id, m.away_team_id);
}

#[test]
fn equal_scores_are_a_tie() {
    let mut league = season(2);
    let id = league.matches[0].id;
    assert_eq!(record_result(&mut league, id, 2, 2, None), Ok(None));
    let m = league.find_match(id).unwrap();
    assert!(m.is_completed());
    assert_eq!(m.winner_id, None);
}

#[test]
fn explicit_winner_takes_precedence() {
    let mut league = season(2);
    let m = league.matches[0].clone();
    let winner = record_result(&mut league, m.id, 5, 0, m.away_team_id).unwrap();
    assert_eq!(winner, m.away_team_id);
}

#[test]
fn invalid_results_leave_match_untouched() {
    let mut league = season(4);
    let m = league.matches[0].clone();
    let outsider = league
        .teams
        .iter()
        .map(|t| t.id)
        .find(|&t| !m.involves(t))
        .unwrap();

    assert_eq!(
        record_result(&mut league, m.id, -1, 2, None),
        Err(LeagueError::NegativeScore { home: -1, away: 2 })
    );
    assert!(matches!(
        record_result(&mut league, m.id, i64::MAX, 2, None),
        Err(LeagueError::ScoreOutOfRange { .. })
    ));
    assert_eq!(
        record_result(&mut league, m.id, 3, 2, Some(outsider)),
        Err(LeagueError::WinnerNotInMatch(outsider))
    );
    assert_eq!(league.find_match(m.id), Some(&m));
}

#[test]
fn completed_match_cannot_be_recorded_again() {
    let mut league = season(2);
    let id = league.matches[0].id;
    record_result(&mut league, id, 1, 0, None).unwrap();
    let after_first = league.matches.clone();

    assert_eq!(
        record_result(&mut league, id, 0, 1, None),
        Err(LeagueError::MatchAlreadyCompleted(id))
    );
    assert_eq!(league.matches, after_first);
}

#[test]
fn unknown_match_is_rejected() {
    let mut league = season(2);
    let id = uuid::Uuid::new_v4();
    assert_eq!(
        record_result(&mut league, id, 1, 0, None),
        Err(LeagueError::MatchNotFound(id))
    );
}

#[test]
fn regenerate_with_too_few_teams_keeps_schedule() {
    let mut league = season(2);
    let before = league.matches.clone();
    let t1 = league.teams[1].id;
    league.remove_team(t1).unwrap();

    assert!(regenerate_schedule(&mut league).is_err());
    assert_eq!(league.matches, before);
}

#[test]
fn team_names_are_unique_and_trimmed() {
    let start = NaiveDate::from_ymd_opt(2025, 9, 6).unwrap();
    let mut league = League::new("Names", ScheduleFormat::RoundRobin, start);
    league.add_team("  Rovers ").unwrap();
    assert_eq!(league.teams[0].name, "Rovers");
    assert_eq!(league.add_team("ROVERS"), Err(LeagueError::DuplicateTeamName));
    assert_eq!(league.add_team("   "), Err(LeagueError::EmptyTeamName));
}
