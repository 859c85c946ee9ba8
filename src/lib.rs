//! PoseCoach - Fitness Coaching Dashboard
//!
//! A desktop dashboard for posture-based strength training. Shows a training
//! history profile with aggregate statistics and recommends a move for each
//! exercise type at the level the user's record calls for.

pub mod coaching;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use coaching::{ProfileSnapshot, ResolvedRecommendation, TrainingConfig, UserProfileData};
pub use storage::config::AppConfig;
pub use storage::seed::SeedData;
