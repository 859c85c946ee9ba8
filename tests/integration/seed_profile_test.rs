//! Integration tests for the profile and training views over the bundled seed.

use posecoach::coaching::{
    aggregate, filter_sessions, resolve, ExerciseType, ProfileSnapshot, SessionSelector,
    TrainingLevel,
};
use posecoach::SeedData;

fn seed() -> SeedData {
    SeedData::embedded().expect("bundled seed should load")
}

#[test]
fn test_unfiltered_profile_scores() {
    let seed = seed();
    let snapshot = ProfileSnapshot::compute(&seed.profile, SessionSelector::All);

    assert_eq!(snapshot.sessions.len(), 4);
    assert_eq!(snapshot.scores.accuracy, 89);
    assert_eq!(snapshot.scores.mastery, 25);
    assert_eq!(snapshot.scores.consistency, 85);
    assert_eq!(snapshot.scores.commitment, 90);
}

#[test]
fn test_radar_stats_order_and_scale() {
    let seed = seed();
    let stats = ProfileSnapshot::compute(&seed.profile, SessionSelector::All)
        .scores
        .radar_stats();

    let subjects: Vec<&str> = stats.iter().map(|s| s.subject.as_str()).collect();
    assert_eq!(
        subjects,
        vec!["Accuracy", "Mastery", "Consistency", "Commitment"]
    );
    assert!(stats.iter().all(|s| s.full_mark == 100));
    assert_eq!(stats[0].value, 89);
}

#[test]
fn test_squat_filter_tally() {
    let seed = seed();
    let squats = filter_sessions(&seed.profile.sessions, SessionSelector::Only(ExerciseType::Squat));
    let ids: Vec<&str> = squats.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);

    let snapshot = ProfileSnapshot::compute(&seed.profile, SessionSelector::Only(ExerciseType::Squat));
    let squat = snapshot.tally.get(ExerciseType::Squat);
    assert_eq!((squat.correct, squat.errors), (33, 3));
    // Tallies cover the whole log regardless of the selector
    assert_eq!(snapshot.tally.get(ExerciseType::Kettlebell).correct, 20);
}

#[test]
fn test_unfiltered_tally_per_exercise() {
    let seed = seed();
    let snapshot = ProfileSnapshot::compute(&seed.profile, SessionSelector::All);

    let totals: Vec<(ExerciseType, u64, u64)> = snapshot
        .tally
        .iter()
        .map(|(e, t)| (e, t.correct, t.errors))
        .collect();
    assert_eq!(
        totals,
        vec![
            (ExerciseType::Squat, 33, 3),
            (ExerciseType::Kettlebell, 20, 0),
            (ExerciseType::Seated, 10, 5),
        ]
    );
}

#[test]
fn test_aggregation_is_repeatable() {
    let seed = seed();
    for selector in SessionSelector::OPTIONS {
        let sessions = filter_sessions(&seed.profile.sessions, selector);
        assert_eq!(
            aggregate(sessions.iter().copied()),
            aggregate(sessions.iter().copied())
        );
    }
}

#[test]
fn test_kettlebell_recommendation() {
    let seed = seed();
    let resolved = resolve(
        ExerciseType::Kettlebell,
        &seed.profile.recommendations,
        &seed.moves,
    )
    .unwrap();

    assert_eq!(resolved.level, TrainingLevel::Upper);
    assert_eq!(resolved.move_name, "壺鈴擺盪");
    assert!(!resolved.defaulted);
}

#[test]
fn test_every_exercise_resolves_from_seed() {
    let seed = seed();
    let expected = [
        (ExerciseType::Squat, TrainingLevel::Middle, "座椅深蹲"),
        (ExerciseType::Kettlebell, TrainingLevel::Upper, "壺鈴擺盪"),
        (ExerciseType::Seated, TrainingLevel::Lower, "坐姿基礎"),
    ];

    for (exercise, level, name) in expected {
        let resolved = resolve(exercise, &seed.profile.recommendations, &seed.moves).unwrap();
        assert_eq!(resolved.level, level);
        assert_eq!(resolved.move_name, name);
    }
}
