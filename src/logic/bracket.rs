//! Bracket addressing. Matches are flat records keyed by `(round_number, match_index)`;
//! the edge to the next match is computed here rather than stored.

use serde::{Deserialize, Serialize};

/// Label for a slot whose team is not known yet.
pub const TBD_LABEL: &str = "TBD";

/// Which side of a match a team occupies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSide {
    Home,
    Away,
}

/// Downstream coordinates a winner feeds into.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NextSlot {
    pub round: u32,
    pub index: u32,
    pub side: SlotSide,
}

/// Where the winner of `(round, index)` plays next. Siblings `2k` and `2k + 1`
/// both feed match `k` of the following round, even index on the home side.
pub fn next_slot(round: u32, index: u32) -> NextSlot {
    NextSlot {
        round: round + 1,
        index: index / 2,
        side: if index % 2 == 0 {
            SlotSide::Home
        } else {
            SlotSide::Away
        },
    }
}

/// Next power of two at or above the team count.
pub fn bracket_size(team_count: usize) -> usize {
    team_count.max(1).next_power_of_two()
}

/// Number of rounds in a bracket for `team_count` entrants (the final included).
pub fn round_count(team_count: usize) -> u32 {
    bracket_size(team_count).trailing_zeros()
}

/// Matches in a given 1-based round.
pub fn matches_in_round(team_count: usize, round: u32) -> usize {
    bracket_size(team_count) >> round
}

/// "Home vs Away", with unknown sides shown as TBD.
pub fn match_name(home: Option<&str>, away: Option<&str>) -> String {
    format!(
        "{} vs {}",
        home.unwrap_or(TBD_LABEL),
        away.unwrap_or(TBD_LABEL)
    )
}

pub fn bye_match_name(team: &str) -> String {
    format!("{} (bye)", team)
}
