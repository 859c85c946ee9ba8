//! Integration tests for loading seed data named by the configuration.

use std::path::PathBuf;

use posecoach::coaching::{resolve, ExerciseType, TrainingLevel};
use posecoach::storage::config::{load_config_from, save_config_to, AppConfig};
use posecoach::storage::{load_seed, SeedData, SeedError, SeedSettings};
use tempfile::TempDir;

const MOVES: &str = r#"
[moves.squat]
lower = "扶椅深蹲"
middle = "座椅深蹲"
upper = "徒手深蹲"

[moves.kettlebell]
lower = "壺鈴站立提拉"
middle = "壺鈴提舉"
upper = "壺鈴擺盪"

[moves.seated]
lower = "坐姿基礎"
middle = "坐姿中級"
upper = "坐姿高階"
"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_default_settings_use_bundled_seed() {
    let seed = load_seed(&SeedSettings::default()).unwrap();
    assert_eq!(seed, SeedData::embedded().unwrap());
}

#[test]
fn test_config_points_at_toml_seed() {
    let dir = TempDir::new().unwrap();
    let seed_toml = format!(
        "[profile]\nname = \"Tester\"\n\n[profile.recommendations]\nseated = \"upper\"\n{}",
        MOVES
    );
    let seed_path = write_file(&dir, "profile.toml", &seed_toml);

    let mut config = AppConfig::default();
    config.seed.profile_path = Some(seed_path);
    let config_path = dir.path().join("config.toml");
    save_config_to(&config_path, &config).unwrap();

    let loaded = load_config_from(&config_path).unwrap();
    let seed = load_seed(&loaded.seed).unwrap();

    assert_eq!(seed.profile.name, "Tester");
    assert!(seed.profile.sessions.is_empty());

    let seated = resolve(ExerciseType::Seated, &seed.profile.recommendations, &seed.moves).unwrap();
    assert_eq!(seated.move_name, "坐姿高階");

    // Squat has no recommendation on file
    let squat = resolve(ExerciseType::Squat, &seed.profile.recommendations, &seed.moves).unwrap();
    assert_eq!(squat.level, TrainingLevel::Middle);
    assert!(squat.defaulted);
}

#[test]
fn test_json_seed_matches_bundled_seed() {
    let dir = TempDir::new().unwrap();
    let bundled = SeedData::embedded().unwrap();
    let json = serde_json::to_string_pretty(&bundled).unwrap();
    let path = write_file(&dir, "profile.json", &json);

    let settings = SeedSettings {
        profile_path: Some(path),
    };
    assert_eq!(load_seed(&settings).unwrap(), bundled);
}

#[test]
fn test_json_seed_uses_wire_field_names() {
    let json = serde_json::to_value(SeedData::embedded().unwrap()).unwrap();
    let first = &json["profile"]["sessions"][0];

    assert_eq!(first["type"], "squat");
    assert_eq!(first["result"], "Good");
    assert_eq!(json["profile"]["recommendations"]["kettlebell"], "upper");
}

#[test]
fn test_incomplete_move_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    let truncated = MOVES.replace("upper = \"坐姿高階\"\n", "");
    let path = write_file(
        &dir,
        "profile.toml",
        &format!("[profile]\nname = \"Tester\"\n{}", truncated),
    );

    let err = SeedData::from_path(&path).unwrap_err();
    assert!(matches!(err, SeedError::Configuration(_)));
    assert!(err.to_string().contains("Seated"));
}

#[test]
fn test_duplicate_session_ids_are_rejected() {
    let session = "[[profile.sessions]]\nid = \"7\"\ndate = \"2023-10-24 10:00\"\ntype = \"squat\"\npose = \"座椅深蹲\"\nresult = \"Good\"\nerror_count = 0\ncorrect_count = 5\nsuggestion = \"\"\n\n";
    let content = format!(
        "[profile]\nname = \"Tester\"\n\n{}{}{}",
        session, session, MOVES
    );

    match SeedData::from_toml_str(&content) {
        Err(SeedError::DuplicateSessionId(id)) => assert_eq!(id, "7"),
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "profile.yaml", "profile: {}");

    assert!(matches!(
        SeedData::from_path(&path),
        Err(SeedError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_seed_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let settings = SeedSettings {
        profile_path: Some(dir.path().join("absent.toml")),
    };

    assert!(matches!(load_seed(&settings), Err(SeedError::IoError(_))));
}
