//! Generate a league schedule from a CSV roster, apply reported results, print JSON.
//! Run with: cargo run --bin schedule -- roster.csv [results.csv]
//! Format, season start, league name and draw seed come from the environment
//! (LEAGUE_FORMAT, SEASON_START, LEAGUE_NAME, SHUFFLE_SEED).

use league_scheduler::import::{apply_results, read_results, read_roster};
use league_scheduler::{compute_standings, generate_schedule, Config, League, StandingRow};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};

#[derive(Serialize)]
struct Output<'a> {
    league: &'a League,
    #[serde(skip_serializing_if = "Option::is_none")]
    standings: Option<Vec<StandingRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    champion: Option<&'a str>,
}

fn usage() -> String {
    "usage: schedule <roster.csv> [results.csv]".to_string()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let roster_path = args.next().ok_or_else(usage)?;
    let results_path = args.next();

    let config = Config::from_env();
    log::info!(
        "Scheduling '{}' ({}) from {}",
        config.league_name,
        config.format,
        config.season_start
    );

    let names = read_roster(File::open(&roster_path)?)?;
    let mut league = League::with_teams(
        config.league_name.as_str(),
        config.format,
        config.season_start,
        &names[..],
    )?;
    if let Some(seed) = config.shuffle_seed {
        league.shuffle_teams(&mut StdRng::seed_from_u64(seed));
        log::info!("Drew roster order with seed {}", seed);
    }
    generate_schedule(&mut league)?;

    if let Some(path) = results_path {
        let rows = read_results(File::open(&path)?)?;
        let applied = apply_results(&mut league, &rows)?;
        log::info!("Applied {} result(s) from {}", applied, path);
    }

    let standings = if league.format.is_elimination() {
        None
    } else {
        Some(compute_standings(&league)?)
    };
    let champion = league.champion().and_then(|id| league.team_name(id));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(
        &mut out,
        &Output {
            league: &league,
            standings,
            champion,
        },
    )?;
    writeln!(out)?;
    Ok(())
}
