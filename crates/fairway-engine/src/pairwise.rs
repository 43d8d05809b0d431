use std::collections::{BTreeMap, BTreeSet};

use fairway_core::course::{HoleNumber, HoleSpec};
use fairway_core::player::{Player, PlayerId};

use crate::allocator::hardest_holes;

/// Which holes each individual giver grants each individual receiver a
/// stroke on, keyed by `(giver, receiver)`.
///
/// Used only to break net-score ties between two players. Unlike
/// [`StrokeAllocation`](crate::allocator::StrokeAllocation) nothing is
/// unioned: a receiver holding a stroke from a third player on this hole
/// does not count as receiving one from the opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairwiseStrokes {
    grants: BTreeMap<(PlayerId, PlayerId), BTreeSet<HoleNumber>>,
}

impl PairwiseStrokes {
    pub fn build(players: &[Player], holes: &[HoleSpec]) -> Self {
        let mut grants = BTreeMap::new();
        for giver in players {
            for (&receiver, &strokes) in &giver.gives_strokes {
                if receiver == giver.id || strokes == 0 {
                    continue;
                }
                let stroke_holes = hardest_holes(holes, usize::from(strokes))
                    .into_iter()
                    .collect();
                grants.insert((giver.id, receiver), stroke_holes);
            }
        }
        Self { grants }
    }

    /// Whether `giver` personally grants `receiver` a stroke on `hole`.
    pub fn gives_stroke_on(&self, giver: PlayerId, receiver: PlayerId, hole: HoleNumber) -> bool {
        self.grants
            .get(&(giver, receiver))
            .is_some_and(|holes| holes.contains(&hole))
    }
}
