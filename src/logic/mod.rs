//! Scheduling engine: pairing, bracket addressing, advancement, results, standings.

pub mod bracket;
pub mod pairing;

mod advancement;
mod results;
mod schedule;
mod standings;

pub use advancement::advance;
pub use results::record_result;
pub use schedule::{generate_schedule, regenerate_schedule, round_date};
pub use standings::{compute_standings, standings_table};
