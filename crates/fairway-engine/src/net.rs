use std::collections::BTreeMap;

use fairway_core::course::HoleNumber;
use fairway_core::player::{Player, PlayerId};

use crate::allocator::StrokeAllocation;

/// Gross scores entered on one hole. Absent = not yet played.
pub type GrossScores = BTreeMap<PlayerId, u8>;

/// Net score for one player on one hole, or `None` if no gross score has
/// been entered.
pub fn net_score(gross: Option<u8>, has_stroke: bool) -> Option<i32> {
    gross.map(|g| {
        let g = i32::from(g);
        if has_stroke { g - 1 } else { g }
    })
}

/// Net scores for every player who has a gross score on `hole`.
pub fn net_scores(
    hole: HoleNumber,
    gross: &GrossScores,
    players: &[Player],
    allocation: &StrokeAllocation,
) -> BTreeMap<PlayerId, i32> {
    players
        .iter()
        .filter_map(|p| {
            let has_stroke = allocation.receives_stroke(p.id, hole);
            net_score(gross.get(&p.id).copied(), has_stroke).map(|net| (p.id, net))
        })
        .collect()
}

/// A hole is complete once every registered player has a gross score.
pub fn is_hole_complete(gross: &GrossScores, players: &[Player]) -> bool {
    players.iter().all(|p| gross.contains_key(&p.id))
}
