//! Data structures for the scheduler: teams, matches, leagues, standings.

mod game;
mod league;
mod standing;
mod team;

pub use game::{Match, MatchId, MatchStatus, Slot};
pub use league::{League, LeagueError, LeagueId, ScheduleFormat};
pub use standing::StandingRow;
pub use team::{Team, TeamId};
