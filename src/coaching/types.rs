//! Coaching data model.
//!
//! Exercise types, training levels, and the immutable session log that every
//! statistic on the profile screen is derived from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Training discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Squat variations
    Squat,
    /// Kettlebell lifts and swings
    Kettlebell,
    /// Seated exercises
    Seated,
}

impl ExerciseType {
    /// Number of exercise types.
    pub const COUNT: usize = 3;

    /// All exercise types in display order.
    pub const ALL: [ExerciseType; Self::COUNT] = [
        ExerciseType::Squat,
        ExerciseType::Kettlebell,
        ExerciseType::Seated,
    ];

    /// Position of this type in fixed-size tables.
    pub(crate) fn index(self) -> usize {
        match self {
            ExerciseType::Squat => 0,
            ExerciseType::Kettlebell => 1,
            ExerciseType::Seated => 2,
        }
    }

    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseType::Squat => "Squat",
            ExerciseType::Kettlebell => "Kettlebell",
            ExerciseType::Seated => "Seated",
        }
    }

    /// Name used by the seed data and coaching notes.
    pub fn native_name(&self) -> &'static str {
        match self {
            ExerciseType::Squat => "深蹲",
            ExerciseType::Kettlebell => "壺鈴",
            ExerciseType::Seated => "坐姿",
        }
    }

    /// Standing advice shown on the summary card for this discipline.
    pub fn coaching_tip(&self) -> &'static str {
        match self {
            ExerciseType::Squat => "Keep your knees from caving in and your weight on your heels.",
            ExerciseType::Kettlebell => "Drive the swing from your hips, not your arms.",
            ExerciseType::Seated => "Keep your back straight and avoid slouching for long periods.",
        }
    }
}

impl std::fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Difficulty tier within an exercise type.
///
/// Tiers are listed from easiest to hardest. `Middle` is the tier used when
/// no recommendation exists for an exercise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TrainingLevel {
    /// Entry tier
    Lower,
    /// Intermediate tier
    #[default]
    Middle,
    /// Hardest tier
    Upper,
}

impl TrainingLevel {
    /// Number of training levels.
    pub const COUNT: usize = 3;

    /// All levels from easiest to hardest.
    pub const ALL: [TrainingLevel; Self::COUNT] = [
        TrainingLevel::Lower,
        TrainingLevel::Middle,
        TrainingLevel::Upper,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            TrainingLevel::Lower => 0,
            TrainingLevel::Middle => 1,
            TrainingLevel::Upper => 2,
        }
    }

    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            TrainingLevel::Lower => "Lower",
            TrainingLevel::Middle => "Middle",
            TrainingLevel::Upper => "Upper",
        }
    }
}

impl std::fmt::Display for TrainingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordinal quality rating of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionResult {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SessionResult {
    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            SessionResult::Excellent => "Excellent",
            SessionResult::Good => "Good",
            SessionResult::Fair => "Fair",
            SessionResult::Poor => "Poor",
        }
    }
}

/// One historical training attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Unique identifier
    pub id: String,
    /// Display date, shown as-is
    pub date: String,
    /// Discipline trained
    #[serde(rename = "type")]
    pub exercise: ExerciseType,
    /// Specific move performed
    pub pose: String,
    /// Quality rating
    pub result: SessionResult,
    /// Repetitions with form errors
    pub error_count: u32,
    /// Repetitions with correct form
    pub correct_count: u32,
    /// Coaching note for this session
    pub suggestion: String,
}

/// Recommended training level per exercise type.
///
/// Backed by a fixed-size table indexed by [`ExerciseType`]. Seed data is
/// expected to fill every entry; a missing entry is tolerated and resolves
/// to [`TrainingLevel::Middle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<ExerciseType, TrainingLevel>",
    into = "BTreeMap<ExerciseType, TrainingLevel>"
)]
pub struct Recommendations {
    levels: [Option<TrainingLevel>; ExerciseType::COUNT],
}

impl Recommendations {
    /// Create an empty recommendation table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Recommendations::set`].
    pub fn with(mut self, exercise: ExerciseType, level: TrainingLevel) -> Self {
        self.set(exercise, level);
        self
    }

    /// Set the recommended level for an exercise.
    pub fn set(&mut self, exercise: ExerciseType, level: TrainingLevel) {
        self.levels[exercise.index()] = Some(level);
    }

    /// Recommended level for an exercise, if one was configured.
    pub fn level_for(&self, exercise: ExerciseType) -> Option<TrainingLevel> {
        self.levels[exercise.index()]
    }

    /// Exercise types without a recommendation.
    pub fn missing(&self) -> Vec<ExerciseType> {
        ExerciseType::ALL
            .into_iter()
            .filter(|e| self.level_for(*e).is_none())
            .collect()
    }

    /// Whether every exercise type has a recommendation.
    pub fn is_complete(&self) -> bool {
        self.levels.iter().all(Option::is_some)
    }
}

impl From<BTreeMap<ExerciseType, TrainingLevel>> for Recommendations {
    fn from(map: BTreeMap<ExerciseType, TrainingLevel>) -> Self {
        let mut recommendations = Self::new();
        for (exercise, level) in map {
            recommendations.set(exercise, level);
        }
        recommendations
    }
}

impl From<Recommendations> for BTreeMap<ExerciseType, TrainingLevel> {
    fn from(recommendations: Recommendations) -> Self {
        ExerciseType::ALL
            .into_iter()
            .filter_map(|e| recommendations.level_for(e).map(|level| (e, level)))
            .collect()
    }
}

/// The user's training record: display name, recommendations, and session log.
///
/// Session order is chronological display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileData {
    /// Display name
    pub name: String,
    /// Recommended level per exercise type
    #[serde(default)]
    pub recommendations: Recommendations,
    /// Historical sessions, oldest first
    #[serde(default)]
    pub sessions: Vec<TrainingSession>,
}

/// One axis of the profile radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarStat {
    /// Axis label
    pub subject: String,
    /// Score, 0-100
    #[serde(rename = "A")]
    pub value: u8,
    /// Maximum score on this axis
    #[serde(rename = "fullMark")]
    pub full_mark: u8,
}
