use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use fairway_core::course::{HoleNumber, HoleSpec};
use fairway_core::player::{Player, PlayerId};

/// The `count` hardest holes: lowest stroke index first, ties broken by hole
/// number. Clamped to the number of holes available.
pub fn hardest_holes(holes: &[HoleSpec], count: usize) -> Vec<HoleNumber> {
    let mut ranked: Vec<&HoleSpec> = holes.iter().collect();
    ranked.sort_by_key(|h| (h.stroke_index, h.number));
    ranked.into_iter().take(count).map(|h| h.number).collect()
}

/// Per receiving player, the holes on which their gross score is reduced by
/// one stroke.
///
/// Each giver allocates their strokes to the hardest holes independently and
/// the results are unioned, so overlapping allocations collapse: a hole is a
/// stroke hole at most once, whatever the number of givers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeAllocation {
    stroke_holes: BTreeMap<PlayerId, BTreeSet<HoleNumber>>,
}

impl StrokeAllocation {
    pub fn allocate(players: &[Player], holes: &[HoleSpec]) -> Self {
        let stroke_holes = players
            .iter()
            .map(|receiver| {
                let holes_for_receiver: BTreeSet<HoleNumber> = players
                    .iter()
                    .filter(|giver| giver.id != receiver.id)
                    .flat_map(|giver| {
                        let strokes = giver.strokes_given_to(receiver.id);
                        hardest_holes(holes, usize::from(strokes))
                    })
                    .collect();
                (receiver.id, holes_for_receiver)
            })
            .collect();
        Self { stroke_holes }
    }

    pub fn receives_stroke(&self, player: PlayerId, hole: HoleNumber) -> bool {
        self.stroke_holes
            .get(&player)
            .is_some_and(|holes| holes.contains(&hole))
    }

    /// Stroke holes for `player`, ascending. Empty for unknown players.
    pub fn holes_for(&self, player: PlayerId) -> impl Iterator<Item = HoleNumber> + '_ {
        self.stroke_holes
            .get(&player)
            .into_iter()
            .flat_map(|holes| holes.iter().copied())
    }

    /// Number of distinct stroke holes, which can be lower than the total
    /// strokes configured when givers overlap.
    pub fn stroke_hole_count(&self, player: PlayerId) -> usize {
        self.stroke_holes.get(&player).map_or(0, BTreeSet::len)
    }

    pub fn as_map(&self) -> &BTreeMap<PlayerId, BTreeSet<HoleNumber>> {
        &self.stroke_holes
    }
}
