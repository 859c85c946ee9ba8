//! UI screens for the application.

pub mod home;
pub mod profile;
pub mod training;

pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use training::TrainingScreen;

use crate::coaching::ExerciseType;

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing page
    #[default]
    Home,
    /// Training history and statistics
    Profile,
    /// Recommended training for one exercise type
    Training,
}

impl Screen {
    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Profile => "My Profile",
            Screen::Training => "Training",
        }
    }
}

/// Current screen plus the exercise type the training screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    current: Screen,
    exercise: Option<ExerciseType>,
}

impl Navigator {
    /// Start on the home screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch screens.
    ///
    /// The exercise type is only replaced when one is supplied, so returning
    /// to the training screen shows the last chosen exercise.
    pub fn navigate(&mut self, screen: Screen, exercise: Option<ExerciseType>) {
        tracing::debug!(
            "Navigating from {:?} to {:?} ({:?})",
            self.current,
            screen,
            exercise
        );
        self.current = screen;
        if let Some(exercise) = exercise {
            self.exercise = Some(exercise);
        }
    }

    /// Screen being shown.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Exercise for the training screen, squat until one is chosen.
    pub fn training_exercise(&self) -> ExerciseType {
        self.exercise.unwrap_or(ExerciseType::Squat)
    }
}
