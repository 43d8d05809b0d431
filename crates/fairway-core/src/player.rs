use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Unique identifier for a player in a round.
pub type PlayerId = u64;

/// Number of voor strokes one player grants another.
pub type StrokeCount = u8;

/// A player registered for a round. Immutable once the round starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Strokes this player gives to each other player (receiver id -> strokes).
    #[serde(default)]
    pub gives_strokes: BTreeMap<PlayerId, StrokeCount>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gives_strokes: BTreeMap::new(),
        }
    }

    /// Builder-style helper for granting `strokes` to `receiver`.
    pub fn giving(mut self, receiver: PlayerId, strokes: StrokeCount) -> Self {
        self.gives_strokes.insert(receiver, strokes);
        self
    }

    /// Strokes this player grants to `receiver` (0 when none are configured).
    pub fn strokes_given_to(&self, receiver: PlayerId) -> StrokeCount {
        self.gives_strokes.get(&receiver).copied().unwrap_or(0)
    }
}

/// A single voor grant, for display alongside the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoorGrant {
    pub giver: PlayerId,
    pub receiver: PlayerId,
    pub strokes: StrokeCount,
}

/// Build a roster from player names and an index-based voor matrix, where
/// `matrix[giver][receiver]` is the number of strokes given.
///
/// Ids are assigned once here (1-based, in name order). Everything downstream
/// works on the id-keyed `gives_strokes` map; missing rows or columns mean
/// no strokes, and the diagonal is ignored.
pub fn roster_from_matrix(names: &[String], matrix: &[Vec<StrokeCount>]) -> Vec<Player> {
    let ids: Vec<PlayerId> = (1..=names.len() as PlayerId).collect();
    names
        .iter()
        .enumerate()
        .map(|(giver_idx, name)| {
            let mut player = Player::new(ids[giver_idx], name.trim());
            if let Some(row) = matrix.get(giver_idx) {
                for (receiver_idx, &strokes) in row.iter().enumerate() {
                    if receiver_idx == giver_idx || strokes == 0 {
                        continue;
                    }
                    if let Some(&receiver) = ids.get(receiver_idx) {
                        player.gives_strokes.insert(receiver, strokes);
                    }
                }
            }
            player
        })
        .collect()
}

/// All non-zero voor grants in roster order.
pub fn voor_summary(players: &[Player]) -> Vec<VoorGrant> {
    players
        .iter()
        .flat_map(|giver| {
            giver
                .gives_strokes
                .iter()
                .filter(|&(_, &strokes)| strokes > 0)
                .map(|(&receiver, &strokes)| VoorGrant {
                    giver: giver.id,
                    receiver,
                    strokes,
                })
        })
        .collect()
}

/// Total configured strokes each player receives, summed over all givers.
///
/// This is the figure shown next to a player's stroke holes; it can exceed
/// the number of stroke holes when givers' allocations overlap.
pub fn strokes_received(players: &[Player]) -> BTreeMap<PlayerId, u32> {
    let mut received: BTreeMap<PlayerId, u32> = players.iter().map(|p| (p.id, 0)).collect();
    for giver in players {
        for (&receiver, &strokes) in &giver.gives_strokes {
            if strokes > 0 {
                *received.entry(receiver).or_insert(0) += u32::from(strokes);
            }
        }
    }
    received
}

/// Look up a player's display name, falling back to `"Unknown"`.
pub fn player_name(players: &[Player], id: PlayerId) -> &str {
    players
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.as_str())
        .unwrap_or("Unknown")
}
