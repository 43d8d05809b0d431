//! Fighter: every player plays every other player on each hole.
//!
//! Each pair settles independently. The lower net score wins the pair and
//! takes the award for the winner's net tier off the loser, so a hole's
//! points always sum to zero.

use std::cmp::Ordering;

use fairway_core::config::ScoreTier;
use fairway_core::player::PlayerId;

use super::{Exchange, HoleInput, HoleOutcome};

/// How a single pair settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairResult {
    Won(Exchange),
    Halved,
}

pub(super) fn score(input: &HoleInput<'_>) -> HoleOutcome {
    let mut outcome = HoleOutcome::zeroed(input.players);

    for (i, player) in input.players.iter().enumerate() {
        for opponent in &input.players[i + 1..] {
            if let PairResult::Won(exchange) = settle_pair(input, player.id, opponent.id) {
                *outcome.points.entry(exchange.winner).or_insert(0) += exchange.points;
                *outcome.points.entry(exchange.loser).or_insert(0) -= exchange.points;
                outcome.exchanges.push(exchange);
            }
        }
    }

    tracing::trace!(
        hole = input.hole.number,
        pairs = outcome.exchanges.len(),
        "fighter hole settled"
    );
    outcome
}

/// Settle `a` against `b` on a complete hole.
pub fn settle_pair(input: &HoleInput<'_>, a: PlayerId, b: PlayerId) -> PairResult {
    match input.net_of(a).cmp(&input.net_of(b)) {
        Ordering::Less => won(a, b, outright_award(input, a)),
        Ordering::Greater => won(b, a, outright_award(input, b)),
        Ordering::Equal => {
            let hole = input.hole.number;
            let a_receives = input.pairwise.gives_stroke_on(b, a, hole);
            let b_receives = input.pairwise.gives_stroke_on(a, b, hole);
            match (a_receives, b_receives) {
                (true, false) => won(a, b, tie_break_award(input, a)),
                (false, true) => won(b, a, tie_break_award(input, b)),
                // Neither holds a stroke from the other, or (only with
                // reciprocal voor) both do.
                _ => PairResult::Halved,
            }
        }
    }
}

fn won(winner: PlayerId, loser: PlayerId, points: i32) -> PairResult {
    PairResult::Won(Exchange {
        winner,
        loser,
        points,
    })
}

fn outright_award(input: &HoleInput<'_>, winner: PlayerId) -> i32 {
    input.scoring.award(input.net_tier_of(winner))
}

/// A stroke only breaks a tie into points when the receiver's own gross
/// score is better than double bogey.
fn tie_break_award(input: &HoleInput<'_>, winner: PlayerId) -> i32 {
    match input.tier_of(winner) {
        ScoreTier::DoubleOrWorse => 0,
        _ => input.scoring.award(input.net_tier_of(winner)),
    }
}
