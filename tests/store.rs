//! Integration tests for the per-league store.

use chrono::NaiveDate;
use league_scheduler::{
    generate_schedule, League, LeagueError, LeagueStore, ScheduleFormat, StoreError,
};
use std::sync::Arc;
use std::thread;

fn cup(n: usize) -> League {
    let names: Vec<String> = (0..n).map(|i| format!("Team {i}")).collect();
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let mut league =
        League::with_teams("Cup", ScheduleFormat::SingleElimination, start, &names[..]).unwrap();
    generate_schedule(&mut league).unwrap();
    league
}

#[test]
fn unknown_league_is_reported() {
    let store = LeagueStore::new();
    let id = uuid::Uuid::new_v4();
    assert_eq!(store.snapshot(id).unwrap_err(), StoreError::UnknownLeague(id));
    assert!(store.is_empty());
}

#[test]
fn concurrent_sibling_results_both_reach_next_round() {
    let store = Arc::new(LeagueStore::new());
    let league = cup(16);
    let league_id = store.insert(league.clone()).unwrap();

    let handles: Vec<_> = league
        .bracket_round(1)
        .into_iter()
        .map(|m| {
            let store = Arc::clone(&store);
            let match_id = m.id;
            thread::spawn(move || store.record_result(league_id, match_id, 2, 1, None))
        })
        .collect();
    for h in handles {
        h.join().unwrap().unwrap();
    }

    let after = store.snapshot(league_id).unwrap();
    for m in after.bracket_round(2) {
        assert!(m.home_team_id.is_some() && m.away_team_id.is_some(), "{}", m.name);
    }
}

#[test]
fn league_errors_pass_through() {
    let store = LeagueStore::new();
    let league = cup(4);
    let final_id = league.match_at(2, 0).unwrap().id;
    let league_id = store.insert(league).unwrap();

    assert_eq!(
        store.record_result(league_id, final_id, 1, 0, None),
        Err(StoreError::League(LeagueError::UnresolvedSlot(final_id)))
    );
    assert!(matches!(
        store.standings(league_id),
        Err(StoreError::League(LeagueError::StandingsUnavailable(_)))
    ));
}

#[test]
fn regenerate_and_remove() {
    let store = LeagueStore::new();
    let league = cup(4);
    let old: Vec<_> = league.matches.iter().map(|m| m.id).collect();
    let league_id = store.insert(league).unwrap();

    store.regenerate(league_id).unwrap();
    let fresh = store.snapshot(league_id).unwrap();
    assert_eq!(fresh.matches.len(), 3);
    assert!(fresh.matches.iter().all(|m| !old.contains(&m.id)));

    assert_eq!(store.len(), 1);
    assert!(store.remove(league_id).unwrap());
    assert!(!store.remove(league_id).unwrap());
}
