//! Input validation for round setup and score entry.
//!
//! Setup validators collect every problem they find and return them together,
//! so a caller can show the whole list at once. Nothing past this layer can
//! fail: the engine assumes its inputs passed through here.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ScoringConfig;
use crate::course::HoleSpec;
use crate::player::{Player, PlayerId, StrokeCount};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_STROKES_GIVEN: StrokeCount = 18;
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 15;

/// A rejected input, with the dotted path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationReason {
    #[error("at least {min} players required, got {found}")]
    TooFewPlayers { min: usize, found: usize },
    #[error("at most {max} players allowed, got {found}")]
    TooManyPlayers { max: usize, found: usize },
    #[error("player name cannot be empty")]
    EmptyName,
    #[error("player name too long (max {max} characters)")]
    NameTooLong { max: usize },
    #[error("player name already exists")]
    DuplicateName,
    #[error("player id {id} is used more than once")]
    DuplicatePlayerId { id: PlayerId },
    #[error("strokes cannot exceed {max}, got {found}")]
    TooManyStrokes { max: StrokeCount, found: StrokeCount },
    #[error("a player cannot give strokes to themselves")]
    SelfGrant,
    #[error("strokes given to unknown player {id}")]
    UnknownReceiver { id: PlayerId },
    #[error("players {first} and {second} are giving strokes to each other")]
    ReciprocalVoor { first: PlayerId, second: PlayerId },
    #[error("a round has 9 or 18 holes, got {found}")]
    HoleCount { found: usize },
    #[error("hole numbers must be exactly 1..={count}")]
    HoleNumbers { count: usize },
    #[error("par must be 3, 4, or 5, got {found}")]
    ParOutOfRange { found: u8 },
    #[error("stroke indexes must contain all numbers 1..={count} exactly once")]
    StrokeIndexes { count: usize },
    #[error("value must be between {min} and {max}, got {found}")]
    AwardOutOfRange { min: i32, max: i32, found: i32 },
    #[error("score must be at least {min}, got {found}")]
    ScoreTooLow { min: i32, found: i32 },
    #[error("score too high (max {max}), got {found}")]
    ScoreTooHigh { max: i32, found: i32 },
    #[error("no hole numbered {number}")]
    UnknownHole { number: u8 },
    #[error("no player with id {id}")]
    UnknownPlayer { id: PlayerId },
    #[error("course must have exactly 9 holes, got {found}")]
    NotNineHoles { found: usize },
    #[error("front and back nine must be different courses")]
    SameCourseTwice,
}

/// Unusual but legal score; the entry is accepted and the caller should ask
/// the player to confirm it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAdvisory {
    HoleInOneOnLongHole,
    VeryHighScore,
}

impl fmt::Display for ScoreAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HoleInOneOnLongHole => write!(f, "hole-in-one on a par 4/5, please confirm"),
            Self::VeryHighScore => write!(f, "very high score, please confirm"),
        }
    }
}

/// Check a single player name against the names already taken.
/// Comparison is trimmed and case-insensitive.
pub fn validate_player_name(name: &str, existing: &[&str]) -> Result<(), ValidationReason> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationReason::EmptyName);
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ValidationReason::NameTooLong { max: MAX_NAME_LEN });
    }
    let normalized = trimmed.to_lowercase();
    if existing
        .iter()
        .any(|other| other.trim().to_lowercase() == normalized)
    {
        return Err(ValidationReason::DuplicateName);
    }
    Ok(())
}

/// Validate the roster: player count, names, ids, and voor grants.
pub fn validate_roster(players: &[Player]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if players.len() < MIN_PLAYERS {
        errors.push(ValidationError::new(
            "players",
            ValidationReason::TooFewPlayers {
                min: MIN_PLAYERS,
                found: players.len(),
            },
        ));
    }
    if players.len() > MAX_PLAYERS {
        errors.push(ValidationError::new(
            "players",
            ValidationReason::TooManyPlayers {
                max: MAX_PLAYERS,
                found: players.len(),
            },
        ));
    }

    let mut seen_ids = HashSet::new();
    let mut seen_names: Vec<&str> = Vec::new();
    for (i, player) in players.iter().enumerate() {
        if !seen_ids.insert(player.id) {
            errors.push(ValidationError::new(
                format!("players[{i}].id"),
                ValidationReason::DuplicatePlayerId { id: player.id },
            ));
        }
        if let Err(reason) = validate_player_name(&player.name, &seen_names) {
            errors.push(ValidationError::new(format!("players[{i}].name"), reason));
        }
        seen_names.push(&player.name);
    }

    let ids: HashSet<PlayerId> = players.iter().map(|p| p.id).collect();
    for (i, giver) in players.iter().enumerate() {
        for (&receiver, &strokes) in &giver.gives_strokes {
            let field = format!("players[{i}].gives_strokes[{receiver}]");
            if strokes == 0 {
                continue;
            }
            if receiver == giver.id {
                errors.push(ValidationError::new(field, ValidationReason::SelfGrant));
            } else if !ids.contains(&receiver) {
                errors.push(ValidationError::new(
                    field,
                    ValidationReason::UnknownReceiver { id: receiver },
                ));
            } else if strokes > MAX_STROKES_GIVEN {
                errors.push(ValidationError::new(
                    field,
                    ValidationReason::TooManyStrokes {
                        max: MAX_STROKES_GIVEN,
                        found: strokes,
                    },
                ));
            }
        }
    }

    for (i, first) in players.iter().enumerate() {
        for second in &players[i + 1..] {
            if first.strokes_given_to(second.id) > 0 && second.strokes_given_to(first.id) > 0 {
                tracing::debug!(
                    first = first.id,
                    second = second.id,
                    "rejecting reciprocal voor"
                );
                errors.push(ValidationError::new(
                    "players",
                    ValidationReason::ReciprocalVoor {
                        first: first.id,
                        second: second.id,
                    },
                ));
            }
        }
    }

    into_result(errors)
}

/// Validate a hole layout: 9 or 18 holes numbered 1..N, par 3-5, and stroke
/// indexes forming exactly the set 1..N.
pub fn validate_holes(holes: &[HoleSpec]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let count = holes.len();

    if count != 9 && count != 18 {
        errors.push(ValidationError::new(
            "holes",
            ValidationReason::HoleCount { found: count },
        ));
    }

    let expected: BTreeSet<usize> = (1..=count).collect();
    let numbers: BTreeSet<usize> = holes.iter().map(|h| usize::from(h.number)).collect();
    if numbers != expected || numbers.len() != count {
        errors.push(ValidationError::new(
            "holes.number",
            ValidationReason::HoleNumbers { count },
        ));
    }

    let indexes: BTreeSet<usize> = holes
        .iter()
        .map(|h| usize::from(h.stroke_index))
        .collect();
    if indexes != expected || indexes.len() != count {
        errors.push(ValidationError::new(
            "holes.stroke_index",
            ValidationReason::StrokeIndexes { count },
        ));
    }

    for (i, hole) in holes.iter().enumerate() {
        if !(3..=5).contains(&hole.par) {
            errors.push(ValidationError::new(
                format!("holes[{i}].par"),
                ValidationReason::ParOutOfRange { found: hole.par },
            ));
        }
    }

    into_result(errors)
}

/// Every configured award must lie within +/- [`ScoringConfig::AWARD_LIMIT`].
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<ValidationError>> {
    let limit = ScoringConfig::AWARD_LIMIT;
    let errors = config
        .entries()
        .into_iter()
        .filter(|(_, value)| !(-limit..=limit).contains(value))
        .map(|(name, value)| {
            ValidationError::new(
                format!("scoring.{name}"),
                ValidationReason::AwardOutOfRange {
                    min: -limit,
                    max: limit,
                    found: value,
                },
            )
        })
        .collect();
    into_result(errors)
}

/// Validate everything needed to start a round, returning all errors together.
pub fn validate_round(
    players: &[Player],
    holes: &[HoleSpec],
    scoring: &ScoringConfig,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    for result in [
        validate_roster(players),
        validate_holes(holes),
        validate_scoring(scoring),
    ] {
        if let Err(mut found) = result {
            errors.append(&mut found);
        }
    }
    into_result(errors)
}

/// Check a gross score before it is entered. Legal but unusual scores come
/// back as an advisory rather than an error.
pub fn validate_score(score: i32, par: u8) -> Result<Option<ScoreAdvisory>, ValidationReason> {
    if score < MIN_SCORE {
        return Err(ValidationReason::ScoreTooLow {
            min: MIN_SCORE,
            found: score,
        });
    }
    if score > MAX_SCORE {
        return Err(ValidationReason::ScoreTooHigh {
            max: MAX_SCORE,
            found: score,
        });
    }
    if score == 1 && par > 3 {
        return Ok(Some(ScoreAdvisory::HoleInOneOnLongHole));
    }
    if score >= i32::from(par) + 5 {
        return Ok(Some(ScoreAdvisory::VeryHighScore));
    }
    Ok(None)
}

fn into_result(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
