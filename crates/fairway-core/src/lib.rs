pub mod config;
pub mod course;
pub mod player;
pub mod validation;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::config::ScoringConfig;
    use crate::course::{Course, HoleSpec};
    use crate::player::{Player, PlayerId};

    /// Create `n` test players with sequential IDs starting at 1 and no voor.
    pub fn make_players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player::new(i as PlayerId + 1, format!("Player{}", i + 1)))
            .collect()
    }

    /// An 18-hole course of par-4s where stroke index equals hole number.
    pub fn flat_course() -> Vec<HoleSpec> {
        Course::flat("Flat 18", 18, 4).holes
    }

    /// A 9-hole course of par-4s where stroke index equals hole number.
    pub fn nine_holes() -> Vec<HoleSpec> {
        Course::flat("Flat 9", 9, 4).holes
    }

    /// The scoring values used throughout the scenarios: 4 / 2 / 1 / 1.
    pub fn default_scoring() -> ScoringConfig {
        ScoringConfig::default()
    }

    /// Give `strokes` from player `giver` to player `receiver` (1-based ids).
    pub fn grant(players: &mut [Player], giver: PlayerId, receiver: PlayerId, strokes: u8) {
        if let Some(p) = players.iter_mut().find(|p| p.id == giver) {
            p.gives_strokes.insert(receiver, strokes);
        }
    }
}
