//! Unit tests for profile statistics.

use posecoach::coaching::{
    aggregate, ExerciseTally, ExerciseType, SessionResult, SummaryTally, TrainingSession,
};

/// Create a session with the given counts and rating.
fn create_session(
    exercise: ExerciseType,
    result: SessionResult,
    correct: u32,
    errors: u32,
) -> TrainingSession {
    TrainingSession {
        id: format!("{}-{}-{}", exercise.label(), correct, errors),
        date: "2023-10-24 10:00".to_string(),
        exercise,
        pose: String::new(),
        result,
        error_count: errors,
        correct_count: correct,
        suggestion: String::new(),
    }
}

#[test]
fn test_scores_stay_within_bounds() {
    let cases = [
        (0, 0),
        (0, 9),
        (9, 0),
        (1, 2),
        (2, 1),
        (1_000_000, 1),
        (u32::MAX, u32::MAX),
    ];

    for (correct, errors) in cases {
        for result in [
            SessionResult::Excellent,
            SessionResult::Good,
            SessionResult::Fair,
            SessionResult::Poor,
        ] {
            let sessions = vec![create_session(ExerciseType::Squat, result, correct, errors)];
            let scores = aggregate(&sessions);
            assert!(
                scores.accuracy <= 100,
                "accuracy {} for {:?}",
                scores.accuracy,
                (correct, errors)
            );
            assert!(scores.mastery <= 100);
        }
    }
}

#[test]
fn test_accuracy_uses_moves_not_sessions() {
    // One large session outweighs one small one
    let sessions = vec![
        create_session(ExerciseType::Kettlebell, SessionResult::Good, 90, 0),
        create_session(ExerciseType::Kettlebell, SessionResult::Poor, 0, 10),
    ];

    assert_eq!(aggregate(&sessions).accuracy, 90);
}

#[test]
fn test_mastery_counts_only_excellent() {
    let sessions = vec![
        create_session(ExerciseType::Seated, SessionResult::Excellent, 5, 0),
        create_session(ExerciseType::Seated, SessionResult::Good, 6, 0),
        create_session(ExerciseType::Seated, SessionResult::Good, 7, 0),
    ];

    // 1 of 3
    assert_eq!(aggregate(&sessions).mastery, 33);
}

#[test]
fn test_placeholders_follow_session_presence() {
    let empty: Vec<TrainingSession> = Vec::new();
    let scores = aggregate(&empty);
    assert_eq!((scores.consistency, scores.commitment), (0, 0));

    let one = vec![create_session(ExerciseType::Squat, SessionResult::Fair, 3, 3)];
    let scores = aggregate(&one);
    assert_eq!((scores.consistency, scores.commitment), (85, 90));
}

#[test]
fn test_tally_ignores_ratings() {
    let sessions = vec![
        create_session(ExerciseType::Kettlebell, SessionResult::Poor, 4, 6),
        create_session(ExerciseType::Kettlebell, SessionResult::Excellent, 10, 0),
    ];
    let tally = SummaryTally::from_sessions(&sessions);

    assert_eq!(
        tally.get(ExerciseType::Kettlebell),
        ExerciseTally {
            correct: 14,
            errors: 6
        }
    );
    assert_eq!(tally.get(ExerciseType::Squat), ExerciseTally::default());
}

#[test]
fn test_tally_widens_counts() {
    let sessions = vec![
        create_session(ExerciseType::Squat, SessionResult::Good, u32::MAX, 0),
        create_session(ExerciseType::Squat, SessionResult::Good, u32::MAX, 1),
    ];
    let tally = SummaryTally::from_sessions(&sessions);

    assert_eq!(tally.get(ExerciseType::Squat).correct, 2 * u64::from(u32::MAX));
}
