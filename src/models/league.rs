//! League, ScheduleFormat and LeagueError.

use crate::models::game::{Match, MatchId};
use crate::models::team::{Team, TeamId};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Errors that can occur during scheduling and result entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// Fewer teams than a schedule needs (at least 2).
    NotEnoughTeams { required: usize, found: usize },
    /// Team name is empty after trimming.
    EmptyTeamName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    TeamNotFound(TeamId),
    MatchNotFound(MatchId),
    /// A slot is still TBD; results can only be recorded once both teams are known.
    UnresolvedSlot(MatchId),
    NegativeScore { home: i64, away: i64 },
    /// Score too large to store.
    ScoreOutOfRange { home: i64, away: i64 },
    MatchAlreadyCompleted(MatchId),
    /// The explicit winner is not one of the two teams in the match.
    WinnerNotInMatch(TeamId),
    /// An elimination match ended level with no explicit winner.
    TiedEliminationMatch(MatchId),
    /// Standings exist only for round-robin leagues.
    StandingsUnavailable(ScheduleFormat),
    UnknownFormat(String),
    /// Fixtures already exist; regenerate instead.
    ScheduleExists,
    UnknownTeamName(String),
    /// No unplayed fixture between the two named teams.
    NoPendingFixture { home: String, away: String },
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::NotEnoughTeams { required, found } => {
                write!(f, "Need at least {} teams to generate a schedule (found {})", required, found)
            }
            LeagueError::EmptyTeamName => write!(f, "Team name must not be empty"),
            LeagueError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            LeagueError::TeamNotFound(_) => write!(f, "Team not found"),
            LeagueError::MatchNotFound(_) => write!(f, "Match not found"),
            LeagueError::UnresolvedSlot(_) => {
                write!(f, "Cannot record a result before both teams are known")
            }
            LeagueError::NegativeScore { home, away } => {
                write!(f, "Scores must not be negative (got {}-{})", home, away)
            }
            LeagueError::ScoreOutOfRange { home, away } => {
                write!(f, "Scores are out of range (got {}-{})", home, away)
            }
            LeagueError::MatchAlreadyCompleted(_) => write!(f, "Match already has a result"),
            LeagueError::WinnerNotInMatch(_) => write!(f, "Winner is not playing in this match"),
            LeagueError::TiedEliminationMatch(_) => {
                write!(f, "Elimination matches cannot end in a tie without a declared winner")
            }
            LeagueError::StandingsUnavailable(format) => {
                write!(f, "Standings are not available for {} leagues", format)
            }
            LeagueError::UnknownFormat(s) => write!(f, "Unknown schedule format '{}'", s),
            LeagueError::ScheduleExists => {
                write!(f, "A schedule already exists; regenerate it instead")
            }
            LeagueError::UnknownTeamName(name) => write!(f, "No team named '{}'", name),
            LeagueError::NoPendingFixture { home, away } => {
                write!(f, "No unplayed match between {} and {}", home, away)
            }
        }
    }
}

impl std::error::Error for LeagueError {}

/// Unique identifier for a league.
pub type LeagueId = Uuid;

/// How the league's fixtures are generated.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleFormat {
    #[default]
    RoundRobin,
    SingleElimination,
    /// Generates the same winners bracket as single elimination.
    DoubleElimination,
}

impl ScheduleFormat {
    pub fn is_elimination(self) -> bool {
        matches!(
            self,
            ScheduleFormat::SingleElimination | ScheduleFormat::DoubleElimination
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleFormat::RoundRobin => "round_robin",
            ScheduleFormat::SingleElimination => "single_elimination",
            ScheduleFormat::DoubleElimination => "double_elimination",
        }
    }
}

impl std::fmt::Display for ScheduleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleFormat {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "round_robin" => Ok(ScheduleFormat::RoundRobin),
            "single_elimination" => Ok(ScheduleFormat::SingleElimination),
            "double_elimination" => Ok(ScheduleFormat::DoubleElimination),
            _ => Err(LeagueError::UnknownFormat(s.to_string())),
        }
    }
}

/// A league: its roster, format, season start and the flat list of fixtures.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub format: ScheduleFormat,
    /// Round dates are stamped at weekly offsets from here.
    pub season_start: NaiveDate,
    /// Registration order; standings fall back to it for residual ties.
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
}

impl League {
    /// Create an empty league with no teams and no fixtures.
    pub fn new(name: impl Into<String>, format: ScheduleFormat, season_start: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            season_start,
            teams: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Create a league and register the given team names in order.
    pub fn with_teams<S: AsRef<str>>(
        name: impl Into<String>,
        format: ScheduleFormat,
        season_start: NaiveDate,
        team_names: &[S],
    ) -> Result<Self, LeagueError> {
        let mut league = Self::new(name, format, season_start);
        for team_name in team_names {
            league.add_team(team_name.as_ref())?;
        }
        Ok(league)
    }

    /// Register a team. Names must be non-empty and unique (case-insensitive).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, LeagueError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(LeagueError::EmptyTeamName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(LeagueError::DuplicateTeamName);
        }
        let team = Team::new(self.id, name_trimmed);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team from the roster. Fixtures that already reference it are left alone.
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<Team, LeagueError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(LeagueError::TeamNotFound(team_id))?;
        Ok(self.teams.remove(idx))
    }

    /// Reorder the roster (the draw). Generation follows roster order afterwards.
    pub fn shuffle_teams<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.teams.shuffle(rng);
    }

    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        let name = name.trim();
        self.teams.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn team_name(&self, id: TeamId) -> Option<&str> {
        self.team(id).map(|t| t.name.as_str())
    }

    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn find_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// The unplayed fixture between two teams, in either home/away orientation.
    pub fn pending_match_between(&self, a: TeamId, b: TeamId) -> Option<&Match> {
        self.matches
            .iter()
            .find(|m| !m.is_completed() && m.involves(a) && m.involves(b))
    }

    /// The elimination match at the given bracket coordinates.
    pub fn match_at(&self, round: u32, index: u32) -> Option<&Match> {
        self.matches
            .iter()
            .find(|m| m.position() == Some((round, index)))
    }

    pub fn match_at_mut(&mut self, round: u32, index: u32) -> Option<&mut Match> {
        self.matches
            .iter_mut()
            .find(|m| m.position() == Some((round, index)))
    }

    /// Matches of one bracket round, ordered by match index.
    pub fn bracket_round(&self, round: u32) -> Vec<&Match> {
        let mut round_matches: Vec<&Match> = self
            .matches
            .iter()
            .filter(|m| m.round_number == Some(round))
            .collect();
        round_matches.sort_by_key(|m| m.match_index);
        round_matches
    }

    /// Winner of the final, once an elimination league's last match is decided.
    pub fn champion(&self) -> Option<TeamId> {
        if !self.format.is_elimination() {
            return None;
        }
        let last_round = self.matches.iter().filter_map(|m| m.round_number).max()?;
        self.match_at(last_round, 0)
            .filter(|m| m.is_completed())
            .and_then(|m| m.winner_id)
    }
}
