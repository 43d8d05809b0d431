//! The round facade: validated setup, full recomputation over every hole,
//! and the single mutable [`RoundState`] that score entry goes through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fairway_core::config::{ScoringConfig, ScoringSystemKind};
use fairway_core::course::{HoleNumber, HoleSpec};
use fairway_core::player::{Player, PlayerId, strokes_received};
use fairway_core::validation::{
    MAX_SCORE, ScoreAdvisory, ValidationError, ValidationReason, validate_round, validate_score,
};

use crate::aggregate::{
    LeaderboardEntry, PlayerStats, ScoredHole, TransactionMatrix, leaderboard, player_stats,
    totals,
};
use crate::allocator::StrokeAllocation;
use crate::net::{GrossScores, is_hole_complete, net_scores};
use crate::pairwise::PairwiseStrokes;
use crate::systems::{HoleInput, score_hole};

/// Everything fixed at the start of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSetup {
    pub players: Vec<Player>,
    pub holes: Vec<HoleSpec>,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub system: ScoringSystemKind,
}

/// Gross scores entered so far, by hole.
pub type Scorecard = BTreeMap<HoleNumber, GrossScores>;

/// Every derived view of a round, recomputed as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub system: ScoringSystemKind,
    pub holes: Vec<ScoredHole>,
    /// Union stroke holes per receiving player.
    pub stroke_holes: StrokeAllocation,
    /// Configured strokes received per player, summed over givers. Can exceed
    /// the number of stroke holes when givers overlap.
    pub strokes_received: BTreeMap<PlayerId, u32>,
    pub totals: BTreeMap<PlayerId, i32>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub transactions: TransactionMatrix,
    pub statistics: BTreeMap<PlayerId, PlayerStats>,
    pub holes_completed: usize,
    /// First hole still missing a score, or `None` once the round is done.
    pub current_hole: Option<HoleNumber>,
    pub is_complete: bool,
}

/// Immutable, validated round configuration with the stroke allocations
/// derived from it.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    setup: RoundSetup,
    allocation: StrokeAllocation,
    pairwise: PairwiseStrokes,
}

impl RoundEngine {
    pub fn new(mut setup: RoundSetup) -> Result<Self, Vec<ValidationError>> {
        validate_round(&setup.players, &setup.holes, &setup.scoring)?;
        setup.holes.sort_by_key(|h| h.number);

        let allocation = StrokeAllocation::allocate(&setup.players, &setup.holes);
        let pairwise = PairwiseStrokes::build(&setup.players, &setup.holes);
        tracing::info!(
            players = setup.players.len(),
            holes = setup.holes.len(),
            system = %setup.system,
            "round created"
        );
        Ok(Self {
            setup,
            allocation,
            pairwise,
        })
    }

    pub fn setup(&self) -> &RoundSetup {
        &self.setup
    }

    pub fn players(&self) -> &[Player] {
        &self.setup.players
    }

    pub fn holes(&self) -> &[HoleSpec] {
        &self.setup.holes
    }

    pub fn hole(&self, number: HoleNumber) -> Option<&HoleSpec> {
        self.setup.holes.iter().find(|h| h.number == number)
    }

    pub fn allocation(&self) -> &StrokeAllocation {
        &self.allocation
    }

    /// Net scores and points for one hole. Scores from players outside the
    /// roster are ignored.
    pub fn score_hole(&self, hole: &HoleSpec, entered: &GrossScores) -> ScoredHole {
        let players = self.players();
        let gross: GrossScores = entered
            .iter()
            .filter(|(id, _)| players.iter().any(|p| p.id == **id))
            .map(|(&id, &g)| (id, g))
            .collect();
        let net = net_scores(hole.number, &gross, players, &self.allocation);
        let complete = is_hole_complete(&gross, players);
        let outcome = score_hole(
            self.setup.system,
            &HoleInput {
                hole,
                players,
                gross: &gross,
                net: &net,
                pairwise: &self.pairwise,
                scoring: &self.setup.scoring,
            },
        );
        tracing::debug!(hole = hole.number, complete, "scored hole");
        ScoredHole::new(hole, gross, net, outcome, complete)
    }

    /// Recompute every derived field from `scores`. Pure: the same scorecard
    /// always yields the same summary.
    pub fn compute(&self, scores: &Scorecard) -> RoundSummary {
        let empty = GrossScores::new();
        let holes: Vec<ScoredHole> = self
            .holes()
            .iter()
            .map(|hole| self.score_hole(hole, scores.get(&hole.number).unwrap_or(&empty)))
            .collect();

        let players = self.players();
        let totals = totals(players, &holes);
        let holes_completed = holes.iter().filter(|h| h.complete).count();
        let current_hole = holes.iter().find(|h| !h.complete).map(|h| h.number);

        RoundSummary {
            system: self.setup.system,
            stroke_holes: self.allocation.clone(),
            strokes_received: strokes_received(players),
            leaderboard: leaderboard(players, &totals),
            transactions: TransactionMatrix::from_holes(players, &holes),
            statistics: player_stats(players, &holes),
            totals,
            holes_completed,
            current_hole,
            is_complete: current_hole.is_none(),
            holes,
        }
    }
}

/// A round in progress. Every score change replaces the whole summary.
#[derive(Debug, Clone)]
pub struct RoundState {
    engine: RoundEngine,
    scores: Scorecard,
    summary: RoundSummary,
}

impl RoundState {
    pub fn new(setup: RoundSetup) -> Result<Self, Vec<ValidationError>> {
        let engine = RoundEngine::new(setup)?;
        let scores = Scorecard::new();
        let summary = engine.compute(&scores);
        Ok(Self {
            engine,
            scores,
            summary,
        })
    }

    /// Enter or clear (`None`) a gross score. Out-of-range scores are
    /// rejected without touching the round; unusual ones are accepted and
    /// reported back as an advisory.
    pub fn enter_score(
        &mut self,
        hole: HoleNumber,
        player: PlayerId,
        gross: Option<i32>,
    ) -> Result<Option<ScoreAdvisory>, ValidationError> {
        let Some(spec) = self.engine.hole(hole) else {
            return Err(ValidationError::new(
                "scores.hole",
                ValidationReason::UnknownHole { number: hole },
            ));
        };
        if !self.engine.players().iter().any(|p| p.id == player) {
            return Err(ValidationError::new(
                "scores.player",
                ValidationReason::UnknownPlayer { id: player },
            ));
        }

        let advisory = match gross {
            None => {
                if let Some(entered) = self.scores.get_mut(&hole) {
                    entered.remove(&player);
                }
                None
            }
            Some(score) => {
                let advisory = validate_score(score, spec.par)
                    .map_err(|reason| ValidationError::new("scores.gross", reason))?;
                let score = u8::try_from(score).map_err(|_| {
                    ValidationError::new(
                        "scores.gross",
                        ValidationReason::ScoreTooHigh {
                            max: MAX_SCORE,
                            found: score,
                        },
                    )
                })?;
                self.scores.entry(hole).or_default().insert(player, score);
                advisory
            }
        };

        if let Some(advisory) = advisory {
            tracing::warn!(hole, player, %advisory, "unusual score accepted");
        }
        self.recompute();
        Ok(advisory)
    }

    pub fn recompute(&mut self) {
        self.summary = self.engine.compute(&self.scores);
        tracing::debug!(
            holes_completed = self.summary.holes_completed,
            "round recomputed"
        );
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    pub fn scores(&self) -> &Scorecard {
        &self.scores
    }

    pub fn summary(&self) -> &RoundSummary {
        &self.summary
    }
}
