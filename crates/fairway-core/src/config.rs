use serde::{Deserialize, Serialize};

/// Which scoring system a round is played under. Chosen once per round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringSystemKind {
    /// Every player against every other player, zero-sum per pair.
    #[default]
    Fighter,
    /// Winner-take-all: only the lowest net score on a hole earns points.
    SingleWinner,
}

impl ScoringSystemKind {
    pub const ALL: [ScoringSystemKind; 2] = [Self::Fighter, Self::SingleWinner];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fighter => "fighter",
            Self::SingleWinner => "single_winner",
        }
    }
}

impl std::fmt::Display for ScoringSystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScoringSystemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fighter" => Ok(Self::Fighter),
            "single_winner" | "singlewinner" => Ok(Self::SingleWinner),
            other => Err(format!(
                "unknown scoring system '{other}' (expected fighter or single_winner)"
            )),
        }
    }
}

/// A score expressed relative to par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleOrWorse,
}

impl ScoreTier {
    /// Tier for a score `diff` strokes relative to par (negative = under par).
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            d if d <= -2 => Self::EagleOrBetter,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            _ => Self::DoubleOrWorse,
        }
    }

    pub fn from_gross(gross: u8, par: u8) -> Self {
        Self::from_diff(i32::from(gross) - i32::from(par))
    }
}

/// Points a winning player earns, keyed by the tier of the winning score.
///
/// Double bogey or worse never earns anything and has no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub eagle_or_better: i32,
    pub birdie: i32,
    pub par: i32,
    pub bogey: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            eagle_or_better: 4,
            birdie: 2,
            par: 1,
            bogey: 1,
        }
    }
}

impl ScoringConfig {
    /// Inclusive bound on each configured award, in either direction.
    pub const AWARD_LIMIT: i32 = 10;

    /// Award for beating an opponent with a score in `tier`.
    pub fn award(&self, tier: ScoreTier) -> i32 {
        match tier {
            ScoreTier::EagleOrBetter => self.eagle_or_better,
            ScoreTier::Birdie => self.birdie,
            ScoreTier::Par => self.par,
            ScoreTier::Bogey => self.bogey,
            ScoreTier::DoubleOrWorse => 0,
        }
    }

    /// Configured values with the field name each one is read from.
    pub fn entries(&self) -> [(&'static str, i32); 4] {
        [
            ("eagle_or_better", self.eagle_or_better),
            ("birdie", self.birdie),
            ("par", self.par),
            ("bogey", self.bogey),
        ]
    }
}
