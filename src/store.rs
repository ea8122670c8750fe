//! In-memory league store that serializes mutations per league.
//!
//! Each league sits behind its own mutex, so a result entry (with its advancement
//! read-then-write) or a regeneration runs exclusively for that league while other
//! leagues proceed in parallel.

use crate::logic::{compute_standings, record_result, regenerate_schedule};
use crate::models::{League, LeagueError, LeagueId, MatchId, StandingRow, TeamId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    UnknownLeague(LeagueId),
    /// A thread panicked while holding a lock.
    Poisoned,
    League(LeagueError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::UnknownLeague(id) => write!(f, "No league {}", id),
            StoreError::Poisoned => write!(f, "lock error"),
            StoreError::League(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<LeagueError> for StoreError {
    fn from(e: LeagueError) -> Self {
        StoreError::League(e)
    }
}

#[derive(Debug, Default)]
pub struct LeagueStore {
    leagues: RwLock<HashMap<LeagueId, Arc<Mutex<League>>>>,
}

impl LeagueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a league.
    pub fn insert(&self, league: League) -> Result<LeagueId, StoreError> {
        let id = league.id;
        let mut g = self.leagues.write().map_err(|_| StoreError::Poisoned)?;
        g.insert(id, Arc::new(Mutex::new(league)));
        Ok(id)
    }

    pub fn remove(&self, id: LeagueId) -> Result<bool, StoreError> {
        let mut g = self.leagues.write().map_err(|_| StoreError::Poisoned)?;
        Ok(g.remove(&id).is_some())
    }

    pub fn len(&self) -> usize {
        self.leagues.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` with exclusive access to one league.
    pub fn with_league<T, F>(&self, id: LeagueId, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut League) -> T,
    {
        let entry = {
            let g = self.leagues.read().map_err(|_| StoreError::Poisoned)?;
            g.get(&id).cloned().ok_or(StoreError::UnknownLeague(id))?
        };
        let mut league = entry.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut league))
    }

    /// A copy of the league as it is now.
    pub fn snapshot(&self, id: LeagueId) -> Result<League, StoreError> {
        self.with_league(id, |league| league.clone())
    }

    pub fn record_result(
        &self,
        id: LeagueId,
        match_id: MatchId,
        home_score: i64,
        away_score: i64,
        winner: Option<TeamId>,
    ) -> Result<Option<TeamId>, StoreError> {
        self.with_league(id, |league| {
            record_result(league, match_id, home_score, away_score, winner)
        })?
        .map_err(StoreError::from)
    }

    pub fn regenerate(&self, id: LeagueId) -> Result<(), StoreError> {
        self.with_league(id, regenerate_schedule)?
            .map_err(StoreError::from)
    }

    pub fn standings(&self, id: LeagueId) -> Result<Vec<StandingRow>, StoreError> {
        self.with_league(id, |league| compute_standings(league))?
            .map_err(StoreError::from)
    }
}
