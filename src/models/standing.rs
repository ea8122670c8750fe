//! StandingRow: one line of a round-robin table.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Aggregated round-robin record for one team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    /// 1-based table position.
    pub position: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points_for: u64,
    pub points_against: u64,
    /// `points_for - points_against`.
    pub diff: i64,
}

impl StandingRow {
    /// Empty row for a team that has not played yet.
    pub fn new(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            position: 0,
            team_id,
            team_name: team_name.into(),
            played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            points_for: 0,
            points_against: 0,
            diff: 0,
        }
    }

    /// Fold one played match into this row, seen from this team's side.
    pub fn add_result(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.points_for += u64::from(scored);
        self.points_against += u64::from(conceded);
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Less => self.losses += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
        }
    }
}
