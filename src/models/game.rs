//! Match (fixture) and the slot markers used while building brackets.

use crate::models::league::LeagueId;
use crate::models::team::TeamId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Lifecycle of a match. There is no transition out of `Completed`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Completed,
}

/// One side of a generated elimination pairing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot<T> {
    Team(T),
    /// Filled later by advancement.
    Tbd,
    /// Padding up to the bracket size; the opponent advances automatically.
    Bye,
}

impl<T: Copy> Slot<T> {
    pub fn team(&self) -> Option<T> {
        match self {
            Slot::Team(t) => Some(*t),
            Slot::Tbd | Slot::Bye => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }
}

/// A single fixture. Elimination matches carry `(round_number, match_index)`;
/// round-robin matches leave both unset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub league_id: LeagueId,
    /// 1-based bracket round (elimination only).
    pub round_number: Option<u32>,
    /// 0-based position within the round (elimination only).
    pub match_index: Option<u32>,
    pub home_team_id: Option<TeamId>,
    pub away_team_id: Option<TeamId>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// None if not yet played, a tie, or a bye.
    pub winner_id: Option<TeamId>,
    pub status: MatchStatus,
    /// Display label, e.g. "Sharks vs TBD".
    pub name: String,
    pub date: NaiveDate,
}

impl Match {
    pub fn new(league_id: LeagueId, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            league_id,
            round_number: None,
            match_index: None,
            home_team_id: None,
            away_team_id: None,
            home_score: None,
            away_score: None,
            winner_id: None,
            status: MatchStatus::Scheduled,
            name: String::new(),
            date,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Bracket coordinates, if this is an elimination match.
    pub fn position(&self) -> Option<(u32, u32)> {
        self.round_number.zip(self.match_index)
    }

    /// Whether the given team occupies either slot.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == Some(team_id) || self.away_team_id == Some(team_id)
    }
}
