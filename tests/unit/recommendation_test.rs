//! Unit tests for recommendation resolution.

use posecoach::coaching::{
    level_options, resolve, ConfigurationError, ExerciseType, Recommendations, TrainingConfig,
    TrainingLevel,
};

/// Move table where every name encodes its cell.
fn labelled_config() -> TrainingConfig {
    let mut config = TrainingConfig::new();
    for exercise in ExerciseType::ALL {
        for level in TrainingLevel::ALL {
            config.set_move(
                exercise,
                level,
                format!("{}-{}", exercise.label(), level.label()),
            );
        }
    }
    config
}

#[test]
fn test_every_cell_resolves() {
    let config = labelled_config();

    for exercise in ExerciseType::ALL {
        for level in TrainingLevel::ALL {
            let recs = Recommendations::new().with(exercise, level);
            let resolved = resolve(exercise, &recs, &config).unwrap();

            assert_eq!(resolved.exercise, exercise);
            assert_eq!(resolved.level, level);
            assert!(!resolved.defaulted);
            assert_eq!(
                resolved.move_name,
                format!("{}-{}", exercise.label(), level.label())
            );
        }
    }
}

#[test]
fn test_empty_recommendations_fall_back_everywhere() {
    let config = labelled_config();
    let recs = Recommendations::new();

    for exercise in ExerciseType::ALL {
        let resolved = resolve(exercise, &recs, &config).unwrap();
        assert_eq!(resolved.level, TrainingLevel::Middle);
        assert!(resolved.defaulted);
    }
}

#[test]
fn test_fallback_cell_missing_is_error() {
    let config =
        TrainingConfig::new().with_move(ExerciseType::Squat, TrainingLevel::Upper, "徒手深蹲");

    let err = resolve(ExerciseType::Squat, &Recommendations::new(), &config).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::MissingMove {
            exercise: ExerciseType::Squat,
            level: TrainingLevel::Middle,
        }
    );
}

#[test]
fn test_empty_table_fails_validation() {
    match TrainingConfig::new().validate() {
        Err(ConfigurationError::Incomplete { missing }) => assert_eq!(missing.len(), 9),
        other => panic!("expected incomplete table, got {:?}", other),
    }
}

#[test]
fn test_level_options_follow_resolved_level() {
    let config = labelled_config();
    let recs = Recommendations::new().with(ExerciseType::Seated, TrainingLevel::Lower);
    let resolved = resolve(ExerciseType::Seated, &recs, &config).unwrap();

    let options = level_options(ExerciseType::Seated, resolved.level, &config).unwrap();
    let levels: Vec<TrainingLevel> = options.iter().map(|o| o.level).collect();
    let active: Vec<TrainingLevel> = options
        .iter()
        .filter(|o| o.active)
        .map(|o| o.level)
        .collect();

    assert_eq!(levels, TrainingLevel::ALL.to_vec());
    assert_eq!(active, vec![TrainingLevel::Lower]);
}

#[test]
fn test_move_table_serializes_by_name() {
    let config = labelled_config();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["kettlebell"]["upper"], "Kettlebell-Upper");
    let parsed: TrainingConfig = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, config);
}
