//! Coaching error types.

use thiserror::Error;

use super::types::{ExerciseType, TrainingLevel};

/// The move table does not cover every (exercise, level) pair.
///
/// This is a data fault in the static configuration, never a user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A single lookup hit an empty cell.
    #[error("No move configured for {exercise} at {level} level")]
    MissingMove {
        exercise: ExerciseType,
        level: TrainingLevel,
    },

    /// Load-time validation found empty cells.
    #[error("Move table is missing {} cell(s): {}", .missing.len(), format_cells(.missing))]
    Incomplete {
        missing: Vec<(ExerciseType, TrainingLevel)>,
    },
}

/// Result type for move table lookups.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

fn format_cells(cells: &[(ExerciseType, TrainingLevel)]) -> String {
    cells
        .iter()
        .map(|(exercise, level)| format!("{}/{}", exercise, level))
        .collect::<Vec<_>>()
        .join(", ")
}
