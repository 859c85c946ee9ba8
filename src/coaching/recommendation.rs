//! Training recommendations.
//!
//! Maps an exercise type and the user's recommended level onto a named move
//! through the move table, and lists every tier of an exercise for the level
//! explanation panel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{ConfigurationError, ConfigurationResult};
use super::types::{ExerciseType, Recommendations, TrainingLevel};

type MoveTableEntries = BTreeMap<ExerciseType, BTreeMap<TrainingLevel, String>>;

/// Move name for every (exercise type, level) pair.
///
/// A fixed table indexed by the enum variants. Seed loading validates it with
/// [`TrainingConfig::validate`] so that lookups never hit an empty cell at
/// runtime; lookups still report an empty cell as a [`ConfigurationError`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "MoveTableEntries", into = "MoveTableEntries")]
pub struct TrainingConfig {
    moves: [[Option<String>; TrainingLevel::COUNT]; ExerciseType::COUNT],
}

impl TrainingConfig {
    /// Create an empty move table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`TrainingConfig::set_move`].
    pub fn with_move(
        mut self,
        exercise: ExerciseType,
        level: TrainingLevel,
        name: impl Into<String>,
    ) -> Self {
        self.set_move(exercise, level, name);
        self
    }

    /// Set the move for one cell.
    pub fn set_move(&mut self, exercise: ExerciseType, level: TrainingLevel, name: impl Into<String>) {
        self.moves[exercise.index()][level.index()] = Some(name.into());
    }

    /// Move configured for `exercise` at `level`.
    pub fn move_name(&self, exercise: ExerciseType, level: TrainingLevel) -> ConfigurationResult<&str> {
        self.moves[exercise.index()][level.index()]
            .as_deref()
            .ok_or(ConfigurationError::MissingMove { exercise, level })
    }

    /// Empty cells, in exercise then level order.
    pub fn missing_cells(&self) -> Vec<(ExerciseType, TrainingLevel)> {
        ExerciseType::ALL
            .into_iter()
            .flat_map(|exercise| TrainingLevel::ALL.into_iter().map(move |level| (exercise, level)))
            .filter(|(exercise, level)| self.moves[exercise.index()][level.index()].is_none())
            .collect()
    }

    /// Check that every cell is filled.
    pub fn validate(&self) -> ConfigurationResult<()> {
        let missing = self.missing_cells();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::Incomplete { missing })
        }
    }
}

impl From<MoveTableEntries> for TrainingConfig {
    fn from(entries: MoveTableEntries) -> Self {
        let mut config = Self::new();
        for (exercise, levels) in entries {
            for (level, name) in levels {
                config.set_move(exercise, level, name);
            }
        }
        config
    }
}

impl From<TrainingConfig> for MoveTableEntries {
    fn from(config: TrainingConfig) -> Self {
        let mut entries = MoveTableEntries::new();
        for exercise in ExerciseType::ALL {
            for level in TrainingLevel::ALL {
                if let Some(name) = &config.moves[exercise.index()][level.index()] {
                    entries
                        .entry(exercise)
                        .or_default()
                        .insert(level, name.clone());
                }
            }
        }
        entries
    }
}

/// Recommended move for one exercise type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRecommendation {
    /// Exercise type the recommendation is for
    pub exercise: ExerciseType,
    /// Recommended tier
    pub level: TrainingLevel,
    /// Move to train at that tier
    pub move_name: String,
    /// True when no recommendation existed and the default tier was used
    pub defaulted: bool,
}

/// Resolve the recommended move for `exercise`.
///
/// A missing recommendation falls back to [`TrainingLevel::Middle`]. A missing
/// move table cell is a configuration fault and is returned as an error.
pub fn resolve(
    exercise: ExerciseType,
    recommendations: &Recommendations,
    config: &TrainingConfig,
) -> ConfigurationResult<ResolvedRecommendation> {
    let (level, defaulted) = match recommendations.level_for(exercise) {
        Some(level) => (level, false),
        None => {
            tracing::warn!(
                "No recommended level for {}, using {}",
                exercise,
                TrainingLevel::default()
            );
            (TrainingLevel::default(), true)
        }
    };

    let move_name = config.move_name(exercise, level)?.to_string();

    Ok(ResolvedRecommendation {
        exercise,
        level,
        move_name,
        defaulted,
    })
}

/// One row of the level explanation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelOption {
    /// Tier
    pub level: TrainingLevel,
    /// Move at this tier
    pub move_name: String,
    /// Whether this is the active recommendation
    pub active: bool,
}

/// Every tier of `exercise`, easiest first, with `active` marked.
pub fn level_options(
    exercise: ExerciseType,
    active: TrainingLevel,
    config: &TrainingConfig,
) -> ConfigurationResult<Vec<LevelOption>> {
    TrainingLevel::ALL
        .into_iter()
        .map(|level| {
            Ok(LevelOption {
                level,
                move_name: config.move_name(exercise, level)?.to_string(),
                active: level == active,
            })
        })
        .collect()
}

/// Guidance shown next to the recommended move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingGuide {
    /// Body part to watch during the movement
    pub focus_area: &'static str,
    /// Suggested number of sets
    pub sets: u8,
    /// Suggested repetitions per set
    pub reps: u8,
}

impl TrainingGuide {
    /// Guide for an exercise type.
    pub fn for_exercise(exercise: ExerciseType) -> Self {
        let focus_area = match exercise {
            ExerciseType::Squat => "knee",
            ExerciseType::Kettlebell | ExerciseType::Seated => "back",
        };

        Self {
            focus_area,
            sets: 3,
            reps: 12,
        }
    }

    /// Guide bullet points in display order.
    pub fn tips(&self) -> Vec<String> {
        vec![
            "Keep your core engaged and move smoothly throughout.".to_string(),
            format!(
                "Follow the video cues and pay attention to your {} position.",
                self.focus_area
            ),
            format!("Suggested volume: {} sets x {} reps.", self.sets, self.reps),
        ]
    }
}
