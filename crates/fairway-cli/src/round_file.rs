//! Round descriptions read from TOML, and scoring them end to end.
//!
//! ```toml
//! name = "Saturday fourball"
//! course = "standard"          # preset key, or give [[holes]] instead
//! system = "fighter"           # optional, falls back to fairway.toml
//! players = ["Ann", "Bo", "Cy"]
//! voor = [[0, 3, 0], [0, 0, 0], [0, 1, 0]]   # voor[giver][receiver]
//!
//! [[scores]]
//! hole = 1
//! gross = [4, 5, 6]            # roster order; a short list leaves the rest unplayed
//! ```

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use fairway_core::config::{ScoringConfig, ScoringSystemKind};
use fairway_core::course::{self, Course, HoleNumber, HoleSpec, combine_nines};
use fairway_core::player::{PlayerId, StrokeCount, VoorGrant, roster_from_matrix, voor_summary};
use fairway_core::validation::{ScoreAdvisory, ValidationError};
use fairway_engine::round::{RoundSetup, RoundState, RoundSummary};

use crate::config::CliConfig;

pub const DEFAULT_PRESET: &str = "standard";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoundFile {
    #[serde(default)]
    pub name: Option<String>,
    /// Preset course key. Ignored when `holes` or `nines` is given.
    #[serde(default)]
    pub course: Option<String>,
    /// Front and back nine layouts played as one 18-hole round.
    #[serde(default)]
    pub nines: Option<[Course; 2]>,
    #[serde(default)]
    pub holes: Option<Vec<HoleSpec>>,
    pub players: Vec<String>,
    #[serde(default)]
    pub voor: Vec<Vec<StrokeCount>>,
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
    #[serde(default)]
    pub system: Option<ScoringSystemKind>,
    #[serde(default)]
    pub scores: Vec<ScoreLine>,
}

/// Gross scores for one hole in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoreLine {
    pub hole: HoleNumber,
    pub gross: Vec<i32>,
}

/// An advisory raised while entering the file's scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryNote {
    pub hole: HoleNumber,
    pub player: String,
    pub advisory: ScoreAdvisory,
    pub message: String,
}

/// What `fairway score` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub name: String,
    pub course: String,
    pub total_par: u32,
    pub voor: Vec<VoorGrant>,
    pub advisories: Vec<AdvisoryNote>,
    pub summary: RoundSummary,
}

impl RoundFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid round file")
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read round file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// The layout to play: explicit holes, then two nines, then a preset.
    pub fn course(&self) -> Result<Course> {
        if let Some(holes) = &self.holes {
            return Ok(Course {
                name: "Custom".to_string(),
                holes: holes.clone(),
            });
        }
        if let Some([front, back]) = &self.nines {
            return combine_nines(front, back).map_err(|e| anyhow::anyhow!("nines.{e}"));
        }
        let key = self.course.as_deref().unwrap_or(DEFAULT_PRESET);
        match course::preset(key) {
            Some(course) => Ok(course),
            None => {
                let known: Vec<&str> = course::presets().iter().map(|(k, _)| *k).collect();
                bail!("unknown course preset '{key}' (known: {})", known.join(", "))
            },
        }
    }

    /// Round setup with file settings layered over `config`.
    pub fn setup(&self, config: &CliConfig) -> Result<RoundSetup> {
        Ok(RoundSetup {
            players: roster_from_matrix(&self.players, &self.voor),
            holes: self.course()?.holes,
            scoring: self.scoring.unwrap_or(config.scoring),
            system: self.system.unwrap_or(config.system),
        })
    }
}

/// Validate the round, enter every score line, and collect the summary.
pub fn score_round(file: &RoundFile, config: &CliConfig) -> Result<RoundReport> {
    let course = file.course()?;
    let setup = file.setup(config)?;
    let voor = voor_summary(&setup.players);
    let names: Vec<(PlayerId, String)> = setup
        .players
        .iter()
        .map(|p| (p.id, p.name.clone()))
        .collect();

    let mut state = RoundState::new(setup).map_err(invalid_setup)?;

    let mut advisories = Vec::new();
    for (line_idx, line) in file.scores.iter().enumerate() {
        if line.gross.len() > names.len() {
            bail!(
                "scores[{line_idx}]: {} scores for {} players",
                line.gross.len(),
                names.len()
            );
        }
        for ((id, name), &gross) in names.iter().zip(&line.gross) {
            let advisory = state
                .enter_score(line.hole, *id, Some(gross))
                .with_context(|| format!("scores[{line_idx}] (hole {}, {name})", line.hole))?;
            if let Some(advisory) = advisory {
                advisories.push(AdvisoryNote {
                    hole: line.hole,
                    player: name.clone(),
                    advisory,
                    message: advisory.to_string(),
                });
            }
        }
    }

    let mut summary = state.summary().clone();
    if !config.output.include_holes {
        summary.holes.clear();
    }
    tracing::info!(
        holes_completed = summary.holes_completed,
        complete = summary.is_complete,
        "round scored"
    );

    Ok(RoundReport {
        name: file.name.clone().unwrap_or_else(|| course.name.clone()),
        total_par: course.total_par(),
        course: course.name,
        voor,
        advisories,
        summary,
    })
}

fn invalid_setup(errors: Vec<ValidationError>) -> anyhow::Error {
    let lines: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
    anyhow::anyhow!("round setup is invalid:\n{}", lines.join("\n"))
}
