//! Pairing generation: round-robin (circle method) and power-of-two elimination brackets.
//!
//! Both generators are pure and generic over the id type, so they can be driven with
//! team ids, names, or plain integers in tests.

use crate::logic::bracket::bracket_size;
use crate::models::{LeagueError, Slot};

/// Minimum roster size for any schedule.
pub const MIN_TEAMS: usize = 2;

fn check_team_count(found: usize) -> Result<(), LeagueError> {
    if found < MIN_TEAMS {
        return Err(LeagueError::NotEnoughTeams {
            required: MIN_TEAMS,
            found,
        });
    }
    Ok(())
}

/// Round-robin rounds of `(home, away)` pairs.
///
/// 1. If the count is odd, add a bye marker so the working set is even.
/// 2. Fix the first entry, pair position `i` with `len - 1 - i`.
/// 3. Rotate the remaining entries one step and repeat, `len - 1` rounds in total.
///
/// Pairs involving the bye are dropped: the team simply sits that round out.
/// Home/away is whatever the rotation produces and is not rebalanced.
pub fn round_robin<T: Copy>(team_ids: &[T]) -> Result<Vec<Vec<(T, T)>>, LeagueError> {
    check_team_count(team_ids.len())?;

    // None is the bye marker.
    let mut working: Vec<Option<T>> = team_ids.iter().copied().map(Some).collect();
    if working.len() % 2 == 1 {
        working.push(None);
    }

    let n = working.len();
    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let round: Vec<(T, T)> = (0..n / 2)
            .filter_map(|i| match (working[i], working[n - 1 - i]) {
                (Some(home), Some(away)) => Some((home, away)),
                _ => None,
            })
            .collect();
        rounds.push(round);
        working[1..].rotate_right(1);
    }
    Ok(rounds)
}

/// Elimination bracket rounds.
///
/// Round 1 pairs consecutive entries of the roster padded with byes up to the next power
/// of two. Byes are placed at the tail, one per pairing, so that a bye always faces a
/// real team. Every later round is reserved with `Tbd` slots, halving until the final.
pub fn elimination<T: Copy>(team_ids: &[T]) -> Result<Vec<Vec<(Slot<T>, Slot<T>)>>, LeagueError> {
    check_team_count(team_ids.len())?;

    let padded = pad_with_byes(team_ids);
    let first_round: Vec<(Slot<T>, Slot<T>)> = padded
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    let mut matches_in_round = first_round.len() / 2;
    let mut rounds = vec![first_round];
    while matches_in_round >= 1 {
        rounds.push(vec![(Slot::Tbd, Slot::Tbd); matches_in_round]);
        matches_in_round /= 2;
    }
    Ok(rounds)
}

/// Pad to the bracket size. With `b` byes, the last `b` teams each get a bye partner.
fn pad_with_byes<T: Copy>(team_ids: &[T]) -> Vec<Slot<T>> {
    let size = bracket_size(team_ids.len());
    let byes = size - team_ids.len();
    let paired = team_ids.len() - byes;

    let mut padded: Vec<Slot<T>> = Vec::with_capacity(size);
    padded.extend(team_ids[..paired].iter().copied().map(Slot::Team));
    for &id in &team_ids[paired..] {
        padded.push(Slot::Team(id));
        padded.push(Slot::Bye);
    }
    padded
}
