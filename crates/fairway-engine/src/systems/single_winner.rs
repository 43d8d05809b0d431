//! Single winner: the lowest net score on a hole takes the award for their
//! gross tier; nobody else scores.

use fairway_core::player::PlayerId;

use super::{Exchange, HoleInput, HoleOutcome};

pub(super) fn score(input: &HoleInput<'_>) -> HoleOutcome {
    let mut outcome = HoleOutcome::zeroed(input.players);
    let Some(winner) = hole_winner(input) else {
        return outcome;
    };

    let award = input.scoring.award(input.tier_of(winner));
    outcome.points.insert(winner, award);
    outcome.exchanges = input
        .players
        .iter()
        .filter(|p| p.id != winner)
        .map(|p| Exchange {
            winner,
            loser: p.id,
            points: award,
        })
        .collect();

    tracing::trace!(hole = input.hole.number, winner, award, "single winner hole settled");
    outcome
}

/// Strictly lowest net score in roster order. On an exact tie the first
/// tied player in the roster wins alone.
pub fn hole_winner(input: &HoleInput<'_>) -> Option<PlayerId> {
    let mut best: Option<(PlayerId, i32)> = None;
    for player in input.players {
        let net = input.net_of(player.id);
        if best.is_none_or(|(_, lowest)| net < lowest) {
            best = Some((player.id, net));
        }
    }
    best.map(|(id, _)| id)
}
