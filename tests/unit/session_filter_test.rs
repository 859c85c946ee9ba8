//! Unit tests for session filtering.

use posecoach::coaching::{
    filter_sessions, ExerciseType, SessionResult, SessionSelector, TrainingSession,
};

fn create_session(id: &str, exercise: ExerciseType) -> TrainingSession {
    TrainingSession {
        id: id.to_string(),
        date: format!("2023-10-2{} 10:00", id),
        exercise,
        pose: "pose".to_string(),
        result: SessionResult::Good,
        error_count: 0,
        correct_count: 10,
        suggestion: String::new(),
    }
}

fn interleaved_log() -> Vec<TrainingSession> {
    vec![
        create_session("1", ExerciseType::Seated),
        create_session("2", ExerciseType::Squat),
        create_session("3", ExerciseType::Seated),
        create_session("4", ExerciseType::Kettlebell),
        create_session("5", ExerciseType::Seated),
    ]
}

#[test]
fn test_all_selector_is_identity() {
    let sessions = interleaved_log();
    let filtered = filter_sessions(&sessions, SessionSelector::All);

    assert_eq!(filtered.len(), sessions.len());
    for (kept, original) in filtered.iter().zip(&sessions) {
        assert_eq!(*kept, original);
    }
}

#[test]
fn test_filter_is_maximal_ordered_subsequence() {
    let sessions = interleaved_log();

    for exercise in ExerciseType::ALL {
        let filtered = filter_sessions(&sessions, SessionSelector::Only(exercise));
        let expected: Vec<&TrainingSession> =
            sessions.iter().filter(|s| s.exercise == exercise).collect();

        assert_eq!(filtered, expected);
    }
}

#[test]
fn test_partitions_cover_log() {
    let sessions = interleaved_log();
    let total: usize = ExerciseType::ALL
        .iter()
        .map(|e| filter_sessions(&sessions, SessionSelector::Only(*e)).len())
        .sum();

    assert_eq!(total, sessions.len());
}

#[test]
fn test_filter_twice_is_identical() {
    let sessions = interleaved_log();
    let selector = SessionSelector::Only(ExerciseType::Seated);

    assert_eq!(
        filter_sessions(&sessions, selector),
        filter_sessions(&sessions, selector)
    );
}

#[test]
fn test_filter_empty_log() {
    let sessions: Vec<TrainingSession> = Vec::new();

    for selector in SessionSelector::OPTIONS {
        assert!(filter_sessions(&sessions, selector).is_empty());
    }
}

#[test]
fn test_selector_options_cover_every_exercise() {
    for exercise in ExerciseType::ALL {
        assert!(SessionSelector::OPTIONS.contains(&SessionSelector::Only(exercise)));
    }
    assert_eq!(SessionSelector::OPTIONS[0], SessionSelector::All);
}
