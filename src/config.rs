//! Configuration for the scheduling CLI, read from the environment.
//!
//! - `LEAGUE_NAME` (default "League")
//! - `LEAGUE_FORMAT`: round_robin | single_elimination | double_elimination (default round_robin)
//! - `SEASON_START`: YYYY-MM-DD (default today)
//! - `SHUFFLE_SEED`: if set, the roster is drawn in a seeded random order before generation

use crate::models::ScheduleFormat;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub league_name: String,
    pub format: ScheduleFormat,
    pub season_start: NaiveDate,
    pub shuffle_seed: Option<u64>,
}

fn default_league_name() -> String {
    "League".to_string()
}

fn default_season_start() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            league_name: default_league_name(),
            format: ScheduleFormat::default(),
            season_start: default_season_start(),
            shuffle_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let league_name = lookup("LEAGUE_NAME")
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(default_league_name);

        let format = match lookup("LEAGUE_FORMAT") {
            Some(raw) => raw.parse::<ScheduleFormat>().unwrap_or_else(|e| {
                log::warn!("{}; using {}", e, ScheduleFormat::default());
                ScheduleFormat::default()
            }),
            None => ScheduleFormat::default(),
        };

        let season_start = match lookup("SEASON_START") {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).unwrap_or_else(|_| {
                log::warn!("Invalid SEASON_START '{}'; using today", raw);
                default_season_start()
            }),
            None => default_season_start(),
        };

        let shuffle_seed = lookup("SHUFFLE_SEED").and_then(|raw| match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("Invalid SHUFFLE_SEED '{}'; keeping roster order", raw);
                None
            }
        });

        Self {
            league_name,
            format,
            season_start,
            shuffle_seed,
        }
    }
}
