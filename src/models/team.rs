//! Team data structure.

use crate::models::league::LeagueId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in fixtures and standings lookups).
pub type TeamId = Uuid;

/// A team registered in a league.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub league_id: LeagueId,
    pub name: String,
}

impl Team {
    /// Create a new team with a fresh id.
    pub fn new(league_id: LeagueId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            league_id,
            name: name.into(),
        }
    }
}
