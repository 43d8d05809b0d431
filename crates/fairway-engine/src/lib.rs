pub mod aggregate;
pub mod allocator;
pub mod net;
pub mod pairwise;
pub mod round;
pub mod systems;

pub use aggregate::{LeaderboardEntry, PlayerStats, ScoredHole, TransactionMatrix};
pub use allocator::StrokeAllocation;
pub use round::{RoundEngine, RoundSetup, RoundState, RoundSummary, Scorecard};
pub use systems::{Exchange, HoleOutcome};
