//! League scheduling engine: fixture generation, bracket advancement and standings.

pub mod config;
pub mod import;
pub mod logic;
pub mod models;
pub mod store;

pub use config::Config;
pub use logic::{
    advance, compute_standings, generate_schedule, record_result, regenerate_schedule,
    standings_table,
};
pub use models::{
    League, LeagueError, LeagueId, Match, MatchId, MatchStatus, ScheduleFormat, Slot,
    StandingRow, Team, TeamId,
};
pub use store::{LeagueStore, StoreError};
