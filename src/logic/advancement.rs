//! Winner propagation through an elimination bracket.

use crate::logic::bracket::{match_name, next_slot, SlotSide};
use crate::models::{League, MatchId, TeamId};

/// Write `winner_id` into the downstream slot of the match at `(from_round, from_index)`.
///
/// Returns the id of the match that was written to, or `None` when there is no
/// downstream match (the final) or it has already been played. The write is an
/// overwrite, so calling this twice with the same arguments leaves the same state.
pub fn advance(
    league: &mut League,
    winner_id: TeamId,
    from_round: u32,
    from_index: u32,
) -> Option<MatchId> {
    let next = next_slot(from_round, from_index);
    let idx = league
        .matches
        .iter()
        .position(|m| m.position() == Some((next.round, next.index)))?;

    if league.matches[idx].is_completed() {
        log::warn!(
            "Not advancing into round {} match {}: already completed",
            next.round,
            next.index
        );
        return None;
    }

    let target = &mut league.matches[idx];
    match next.side {
        SlotSide::Home => target.home_team_id = Some(winner_id),
        SlotSide::Away => target.away_team_id = Some(winner_id),
    }
    let (home, away) = (target.home_team_id, target.away_team_id);

    let name = match_name(
        home.and_then(|id| league.team_name(id)),
        away.and_then(|id| league.team_name(id)),
    );
    let target = &mut league.matches[idx];
    target.name = name;

    log::debug!(
        "Advanced {} into round {} match {} ({:?}): {}",
        winner_id,
        next.round,
        next.index,
        next.side,
        target.name
    );
    Some(target.id)
}
