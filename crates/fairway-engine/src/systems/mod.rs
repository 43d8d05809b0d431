//! Per-hole point computation for each scoring system.

pub mod fighter;
pub mod single_winner;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fairway_core::config::{ScoreTier, ScoringConfig, ScoringSystemKind};
use fairway_core::course::HoleSpec;
use fairway_core::player::{Player, PlayerId};

use crate::net::GrossScores;
use crate::pairwise::PairwiseStrokes;

/// Everything a scoring system needs to settle one hole.
#[derive(Debug, Clone, Copy)]
pub struct HoleInput<'a> {
    pub hole: &'a HoleSpec,
    pub players: &'a [Player],
    pub gross: &'a GrossScores,
    pub net: &'a BTreeMap<PlayerId, i32>,
    pub pairwise: &'a PairwiseStrokes,
    pub scoring: &'a ScoringConfig,
}

impl HoleInput<'_> {
    fn is_complete(&self) -> bool {
        self.players
            .iter()
            .all(|p| self.net.contains_key(&p.id) && self.gross.contains_key(&p.id))
    }

    fn net_of(&self, player: PlayerId) -> i32 {
        self.net.get(&player).copied().unwrap_or_default()
    }

    /// Tier of `player`'s gross score on this hole.
    fn tier_of(&self, player: PlayerId) -> ScoreTier {
        let gross = self.gross.get(&player).copied().unwrap_or_default();
        ScoreTier::from_gross(gross, self.hole.par)
    }

    /// Tier of `player`'s net score on this hole.
    fn net_tier_of(&self, player: PlayerId) -> ScoreTier {
        ScoreTier::from_diff(self.net_of(player) - i32::from(self.hole.par))
    }
}

/// Points moved from `loser` to `winner` on a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub points: i32,
}

/// Result of scoring one hole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleOutcome {
    /// Points earned by every registered player (0 on an unsettled hole).
    pub points: BTreeMap<PlayerId, i32>,
    /// Pairwise transfers feeding the transaction matrix.
    pub exchanges: Vec<Exchange>,
}

impl HoleOutcome {
    fn zeroed(players: &[Player]) -> Self {
        Self {
            points: players.iter().map(|p| (p.id, 0)).collect(),
            exchanges: Vec::new(),
        }
    }
}

/// Score one hole under `kind`. An incomplete hole is not yet settled and
/// gives everyone zero.
pub fn score_hole(kind: ScoringSystemKind, input: &HoleInput<'_>) -> HoleOutcome {
    if !input.is_complete() {
        return HoleOutcome::zeroed(input.players);
    }
    match kind {
        ScoringSystemKind::Fighter => fighter::score(input),
        ScoringSystemKind::SingleWinner => single_winner::score(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::{default_scoring, make_players};

    #[test]
    fn incomplete_hole_scores_zero_under_both_systems() {
        let players = make_players(3);
        let hole = HoleSpec::new(1, 4, 1);
        let gross: GrossScores = [(1, 3), (2, 5)].into_iter().collect();
        let net: BTreeMap<PlayerId, i32> = [(1, 3), (2, 5)].into_iter().collect();
        let pairwise = PairwiseStrokes::default();
        let scoring = default_scoring();
        let input = HoleInput {
            hole: &hole,
            players: &players,
            gross: &gross,
            net: &net,
            pairwise: &pairwise,
            scoring: &scoring,
        };

        for kind in ScoringSystemKind::ALL {
            let outcome = score_hole(kind, &input);
            assert_eq!(outcome.points.len(), 3);
            assert!(outcome.points.values().all(|&p| p == 0), "{kind}");
            assert!(outcome.exchanges.is_empty(), "{kind}");
        }
    }
}
