//! Result entry: the scheduled -> completed transition of a single match.

use crate::logic::advancement::advance;
use crate::models::{League, LeagueError, MatchId, MatchStatus, TeamId};

/// Record a match result and, for elimination leagues, push the winner into the next round.
///
/// Winner resolution: `explicit_winner` if given, otherwise the higher score, otherwise
/// no winner (a tie). Ties are only valid in round-robin play. Everything is validated
/// before the match is touched, so a rejected call leaves the league unchanged.
///
/// Returns the resolved winner.
pub fn record_result(
    league: &mut League,
    match_id: MatchId,
    home_score: i64,
    away_score: i64,
    explicit_winner: Option<TeamId>,
) -> Result<Option<TeamId>, LeagueError> {
    let m = league
        .find_match(match_id)
        .ok_or(LeagueError::MatchNotFound(match_id))?;

    if m.is_completed() {
        return Err(LeagueError::MatchAlreadyCompleted(match_id));
    }
    let (home_id, away_id) = match (m.home_team_id, m.away_team_id) {
        (Some(h), Some(a)) => (h, a),
        _ => return Err(LeagueError::UnresolvedSlot(match_id)),
    };
    let (home, away) = validate_scores(home_score, away_score)?;

    let winner = match explicit_winner {
        Some(w) if w == home_id || w == away_id => Some(w),
        Some(w) => return Err(LeagueError::WinnerNotInMatch(w)),
        None => match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(home_id),
            std::cmp::Ordering::Less => Some(away_id),
            std::cmp::Ordering::Equal => None,
        },
    };

    let position = m.position().filter(|_| league.format.is_elimination());
    if position.is_some() && winner.is_none() {
        return Err(LeagueError::TiedEliminationMatch(match_id));
    }

    let m = league
        .find_match_mut(match_id)
        .ok_or(LeagueError::MatchNotFound(match_id))?;
    m.home_score = Some(home);
    m.away_score = Some(away);
    m.winner_id = winner;
    m.status = MatchStatus::Completed;
    log::debug!("Recorded {} {}-{} (winner: {:?})", m.name, home, away, winner);

    if let (Some((round, index)), Some(w)) = (position, winner) {
        advance(league, w, round, index);
    }
    Ok(winner)
}

fn validate_scores(home: i64, away: i64) -> Result<(u32, u32), LeagueError> {
    if home < 0 || away < 0 {
        return Err(LeagueError::NegativeScore { home, away });
    }
    match (u32::try_from(home), u32::try_from(away)) {
        (Ok(h), Ok(a)) => Ok((h, a)),
        _ => Err(LeagueError::ScoreOutOfRange { home, away }),
    }
}
