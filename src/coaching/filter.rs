//! Session log filtering by exercise type.

use super::types::{ExerciseType, TrainingSession};

/// Which sessions the profile view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionSelector {
    /// Every session
    #[default]
    All,
    /// Sessions of a single exercise type
    Only(ExerciseType),
}

impl SessionSelector {
    /// Selector choices in display order.
    pub const OPTIONS: [SessionSelector; 4] = [
        SessionSelector::All,
        SessionSelector::Only(ExerciseType::Squat),
        SessionSelector::Only(ExerciseType::Kettlebell),
        SessionSelector::Only(ExerciseType::Seated),
    ];

    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            SessionSelector::All => "All data",
            SessionSelector::Only(exercise) => exercise.label(),
        }
    }

    /// Whether sessions of `exercise` pass this selector.
    pub fn includes(&self, exercise: ExerciseType) -> bool {
        match self {
            SessionSelector::All => true,
            SessionSelector::Only(selected) => *selected == exercise,
        }
    }

    /// Whether a session passes this selector.
    pub fn matches(&self, session: &TrainingSession) -> bool {
        self.includes(session.exercise)
    }
}

impl From<ExerciseType> for SessionSelector {
    fn from(exercise: ExerciseType) -> Self {
        SessionSelector::Only(exercise)
    }
}

/// Sessions passing `selector`, in their original order.
///
/// An empty result is valid and simply means nothing matched.
pub fn filter_sessions(
    sessions: &[TrainingSession],
    selector: SessionSelector,
) -> Vec<&TrainingSession> {
    sessions.iter().filter(|s| selector.matches(s)).collect()
}
