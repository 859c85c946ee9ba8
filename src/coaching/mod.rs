//! Coaching core: session filtering, profile statistics, and training
//! recommendations over the static user profile.

pub mod aggregator;
pub mod error;
pub mod filter;
pub mod profile;
pub mod recommendation;
pub mod types;

pub use aggregator::{aggregate, ExerciseTally, RadarScores, SummaryTally};
pub use error::{ConfigurationError, ConfigurationResult};
pub use filter::{filter_sessions, SessionSelector};
pub use profile::ProfileSnapshot;
pub use recommendation::{
    level_options, resolve, LevelOption, ResolvedRecommendation, TrainingConfig, TrainingGuide,
};
pub use types::{
    ExerciseType, RadarStat, Recommendations, SessionResult, TrainingLevel, TrainingSession,
    UserProfileData,
};
