//! Folding per-hole results into round-level views: totals, leaderboard,
//! transaction matrix, and per-player statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fairway_core::config::ScoreTier;
use fairway_core::course::{HoleNumber, HoleSpec};
use fairway_core::player::{Player, PlayerId, player_name};

use crate::net::GrossScores;
use crate::systems::{Exchange, HoleOutcome};

/// One hole after scoring: its layout, the entered scores, and what they
/// were worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredHole {
    pub number: HoleNumber,
    pub par: u8,
    pub stroke_index: u8,
    pub gross: GrossScores,
    pub net: BTreeMap<PlayerId, i32>,
    pub points: BTreeMap<PlayerId, i32>,
    pub exchanges: Vec<Exchange>,
    pub complete: bool,
}

impl ScoredHole {
    pub fn new(
        hole: &HoleSpec,
        gross: GrossScores,
        net: BTreeMap<PlayerId, i32>,
        outcome: HoleOutcome,
        complete: bool,
    ) -> Self {
        Self {
            number: hole.number,
            par: hole.par,
            stroke_index: hole.stroke_index,
            gross,
            net,
            points: outcome.points,
            exchanges: outcome.exchanges,
            complete,
        }
    }

    pub fn points_for(&self, player: PlayerId) -> i32 {
        self.points.get(&player).copied().unwrap_or_default()
    }
}

/// Sum of each player's points across `holes`. Every player gets an entry.
pub fn totals(players: &[Player], holes: &[ScoredHole]) -> BTreeMap<PlayerId, i32> {
    players
        .iter()
        .map(|p| (p.id, holes.iter().map(|h| h.points_for(p.id)).sum()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub points: i32,
    pub rank: usize,
}

/// Players by total points, highest first, with standard competition
/// ranking ("1224"). Equal totals keep roster order.
pub fn leaderboard(players: &[Player], totals: &BTreeMap<PlayerId, i32>) -> Vec<LeaderboardEntry> {
    let mut standings: Vec<(PlayerId, i32)> = players
        .iter()
        .map(|p| (p.id, totals.get(&p.id).copied().unwrap_or_default()))
        .collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1));

    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(standings.len());
    for (position, (player_id, points)) in standings.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.points == points => prev.rank,
            _ => position + 1,
        };
        entries.push(LeaderboardEntry {
            player_id,
            name: player_name(players, player_id).to_string(),
            points,
            rank,
        });
    }
    entries
}

/// Net points exchanged between every ordered pair of players.
///
/// `get(a, b)` is what `a` has taken off `b` overall; it is always the
/// negation of `get(b, a)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionMatrix {
    cells: BTreeMap<PlayerId, BTreeMap<PlayerId, i32>>,
}

impl TransactionMatrix {
    /// A zeroed matrix with a cell for every ordered pair of distinct players.
    pub fn new(players: &[Player]) -> Self {
        let cells = players
            .iter()
            .map(|row| {
                let columns = players
                    .iter()
                    .filter(|col| col.id != row.id)
                    .map(|col| (col.id, 0))
                    .collect();
                (row.id, columns)
            })
            .collect();
        Self { cells }
    }

    pub fn from_holes(players: &[Player], holes: &[ScoredHole]) -> Self {
        let mut matrix = Self::new(players);
        for exchange in holes.iter().flat_map(|h| &h.exchanges) {
            matrix.record(exchange);
        }
        matrix
    }

    pub fn record(&mut self, exchange: &Exchange) {
        if exchange.winner == exchange.loser {
            return;
        }
        *self
            .cells
            .entry(exchange.winner)
            .or_default()
            .entry(exchange.loser)
            .or_insert(0) += exchange.points;
        *self
            .cells
            .entry(exchange.loser)
            .or_default()
            .entry(exchange.winner)
            .or_insert(0) -= exchange.points;
    }

    pub fn get(&self, from: PlayerId, against: PlayerId) -> i32 {
        self.cells
            .get(&from)
            .and_then(|row| row.get(&against))
            .copied()
            .unwrap_or_default()
    }

    pub fn is_antisymmetric(&self) -> bool {
        self.cells.iter().all(|(&a, row)| {
            row.iter().all(|(&b, &value)| value == -self.get(b, a))
        })
    }

    pub fn rows(&self) -> &BTreeMap<PlayerId, BTreeMap<PlayerId, i32>> {
        &self.cells
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolePoints {
    pub number: HoleNumber,
    pub points: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub eagles: u32,
    pub birdies: u32,
    pub pars: u32,
    pub bogeys: u32,
    pub worse: u32,
    /// Holes with a gross score entered for this player.
    pub holes_played: u32,
    /// Holes on which this player earned positive points.
    pub holes_won: u32,
    pub best_hole: Option<HolePoints>,
    pub worst_hole: Option<HolePoints>,
    pub total_points: i32,
}

impl PlayerStats {
    fn record(&mut self, hole: &ScoredHole, gross: u8) {
        match ScoreTier::from_gross(gross, hole.par) {
            ScoreTier::EagleOrBetter => self.eagles += 1,
            ScoreTier::Birdie => self.birdies += 1,
            ScoreTier::Par => self.pars += 1,
            ScoreTier::Bogey => self.bogeys += 1,
            ScoreTier::DoubleOrWorse => self.worse += 1,
        }
        self.holes_played += 1;

        let points = hole.points_for(self.player_id);
        self.total_points += points;
        if points > 0 {
            self.holes_won += 1;
        }
        let here = HolePoints {
            number: hole.number,
            points,
        };
        if self.best_hole.is_none_or(|best| points > best.points) {
            self.best_hole = Some(here);
        }
        if self.worst_hole.is_none_or(|worst| points < worst.points) {
            self.worst_hole = Some(here);
        }
    }
}

/// Statistics for each player over the holes they have a score on.
/// Best and worst hole ties keep the earliest hole.
pub fn player_stats(players: &[Player], holes: &[ScoredHole]) -> BTreeMap<PlayerId, PlayerStats> {
    players
        .iter()
        .map(|player| {
            let mut stats = PlayerStats {
                player_id: player.id,
                ..PlayerStats::default()
            };
            for hole in holes {
                if let Some(&gross) = hole.gross.get(&player.id) {
                    stats.record(hole, gross);
                }
            }
            (player.id, stats)
        })
        .collect()
}
