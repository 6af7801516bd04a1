//! File round trips for the snapshot stores.

use std::fs;

use chrono::NaiveTime;
use persistence::{
    load_session, save_session, FileStore, SnapshotError, SnapshotFormat, SnapshotStore,
};
use types::{Move, SessionState};

fn sample_state() -> SessionState {
    let ts = NaiveTime::from_hms_opt(14, 5, 9).expect("valid time");
    let mut state = SessionState::new();
    for (player, computer) in [
        (Move::Rock, Move::Scissors),
        (Move::Scissors, Move::Rock),
        (Move::Paper, Move::Paper),
        (Move::Paper, Move::Rock),
    ] {
        state.record_round(player, computer, ts);
    }
    state
}

/// Saving and loading through a JSON file keeps scores, rates and history
#[test]
fn test_json_file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut store = FileStore::new(dir.path().join("rps_data.json")).expect("json store");
    assert_eq!(store.format(), SnapshotFormat::Json);

    let state = sample_state();
    save_session(&mut store, &state).expect("save succeeds");
    let restored = load_session(&store).expect("load succeeds");

    assert_eq!(restored.scoreboard().player_score, 2);
    assert_eq!(restored.scoreboard().computer_score, 1);
    assert_eq!(restored.scoreboard().total_rounds, 4);
    assert!((restored.scoreboard().win_rate - 50.0).abs() <= 0.1);
    assert!((restored.scoreboard().draw_rate - 25.0).abs() <= 0.1);
    assert_eq!(restored.history(), state.history());
    assert_eq!(restored.rounds_played(), 4);
}

/// The YAML flavour carries the same sheets and column headers
#[test]
fn test_yaml_file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rps_data.yaml");
    let mut store = FileStore::new(&path).expect("yaml store");

    save_session(&mut store, &sample_state()).expect("save succeeds");
    let content = fs::read_to_string(&path).expect("file written");
    assert!(content.contains("Game History"));
    assert!(content.contains("Player Choice"));
    assert!(content.contains("Statistics"));

    let restored = load_session(&store).expect("load succeeds");
    assert_eq!(restored.history().len(), 4);
    assert_eq!(restored.scoreboard().total_rounds, 4);
}

/// Loading a path that does not exist reports NotFound
#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileStore::new(dir.path().join("absent.json")).expect("json store");
    let err = load_session(&store).expect_err("nothing to load");
    assert!(err.is_not_found());
}

/// A file that is not a workbook fails the whole load
#[test]
fn test_corrupt_file_fails_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ this is not json").expect("write fixture");
    let store = FileStore::new(&path).expect("json store");

    assert!(matches!(load_session(&store), Err(SnapshotError::Json(_))));
}

/// A failed save leaves the previous snapshot untouched
#[test]
fn test_failed_save_keeps_existing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rps_data.json");
    let mut store = FileStore::new(&path).expect("json store");
    save_session(&mut store, &sample_state()).expect("first save");
    let before = fs::read_to_string(&path).expect("file written");

    // a directory where the temporary file would go makes the write fail
    fs::create_dir(dir.path().join("rps_data.json.tmp")).expect("blocker dir");
    let err = save_session(&mut store, &SessionState::new()).expect_err("write blocked");
    assert!(matches!(err, SnapshotError::Unwritable { .. }));

    assert_eq!(fs::read_to_string(&path).expect("file still there"), before);
}

/// Hand-written snapshots with legacy history lines are recovered row by row
#[test]
fn test_hand_written_snapshot_with_legacy_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"{
  "sheets": [
    {
      "name": "Game History",
      "columns": ["Round", "Timestamp", "Player Choice", "Computer Choice", "Result"],
      "rows": [
        [1, "09:00:00", "Rock", "Paper", "Computer wins!"],
        ["Round 2 [09:00:04]: You: Scissors, PC: Paper - You win!"],
        [3, "error", "error", "error", "Error parsing entry"]
      ]
    },
    {
      "name": "Statistics",
      "columns": ["Statistic", "Value"],
      "rows": [
        ["Player Score", 1],
        ["Computer Score", 1],
        ["Total Rounds", 3],
        ["Win Rate", "33.3%"],
        ["Draw Rate", "33.3%"]
      ]
    }
  ]
}"#,
    )
    .expect("write fixture");

    let store = FileStore::new(&path).expect("json store");
    let restored = load_session(&store).expect("tolerant load");
    let errors: Vec<bool> = restored.history().all().map(|e| e.is_error()).collect();
    assert_eq!(errors, vec![false, false, true]);
    assert_eq!(restored.scoreboard().total_rounds, 3);
    assert_eq!(restored.scoreboard().win_rate, 33.3);
    assert_eq!(store.location(), path.display().to_string());
}
