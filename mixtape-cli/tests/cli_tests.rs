use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use serde_json::{json, Value};

const INPUT: &str = r#"{
    "playlists": [
        {"id": "1", "user_id": "1", "song_ids": ["1"]},
        {"id": "2", "user_id": "1", "song_ids": ["2"]}
    ],
    "users": [{"id": "1", "name": "test name"}],
    "songs": [
        {"id": "1", "artist": "test artist", "title": "test title"},
        {"id": "2", "artist": "test artist 2", "title": "test title 2"}
    ]
}"#;

const CHANGES: &str = r#"{
    "actions": [
        {"op": "DELETE_PLAYLIST", "playlist_id": "2"},
        {"op": "ADD_SONG", "playlist_id": "1", "song_id": "2"},
        {"op": "ADD_PLAYLIST", "user_id": "1", "song_ids": ["1", "2"]}
    ]
}"#;

fn mixtape(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mixtape").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("MIXTAPE_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

fn setup(changes: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("input.json").write_str(INPUT).unwrap();
    temp_dir.child("changes.json").write_str(changes).unwrap();
    temp_dir
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("mixtape").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Apply an ordered change-list to a playlist dataset",
        ));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("mixtape").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mixtape 0.1.0"));
}

#[test]
fn test_missing_args_prints_usage() {
    let temp_dir = setup(CHANGES);
    mixtape(&temp_dir)
        .args(["input.json", "changes.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_too_many_args_fails() {
    let temp_dir = setup(CHANGES);
    mixtape(&temp_dir)
        .args(["input.json", "changes.json", "out.json", "extra.json"])
        .assert()
        .failure();
    temp_dir.child("out.json").assert(predicate::path::missing());
}

#[test]
fn test_apply_to_file() {
    let temp_dir = setup(CHANGES);
    mixtape(&temp_dir)
        .args(["input.json", "changes.json", "output.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Done. Operations made:"))
        .stderr(predicate::str::contains("DELETE_PLAYLIST: 1"))
        .stderr(predicate::str::contains("ADD_SONG: 1"))
        .stderr(predicate::str::contains("ADD_PLAYLIST: 1"));

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.child("output.json").path()).unwrap())
            .unwrap();
    assert_eq!(
        written["playlists"],
        json!([
            {"id": "1", "user_id": "1", "song_ids": ["1", "2"]},
            {"id": "3", "user_id": "1", "song_ids": ["1", "2"]}
        ])
    );
}

#[test]
fn test_apply_to_stdout() {
    let temp_dir = setup(CHANGES);
    let assert = mixtape(&temp_dir)
        .args(["--quiet", "input.json", "changes.json", "-"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("{\n    \"playlists\""));
    let written: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(written["playlists"].as_array().unwrap().len(), 2);
    assert_eq!(written["users"], json!([{"id": "1", "name": "test name"}]));
}

#[test]
fn test_json_report() {
    let temp_dir = setup(CHANGES);
    mixtape(&temp_dir)
        .args(["--report", "json", "input.json", "changes.json", "out.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"operation\":\"migrate\""))
        .stderr(predicate::str::contains("\"ADD_PLAYLIST\":1"));
}

#[test]
fn test_table_report() {
    let temp_dir = setup(CHANGES);
    mixtape(&temp_dir)
        .args(["--report", "table", "input.json", "changes.json", "out.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Operation"))
        .stderr(predicate::str::contains("Total"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = setup(CHANGES);
    mixtape(&temp_dir)
        .args(["--dry-run", "input.json", "changes.json", "out.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run"));
    temp_dir.child("out.json").assert(predicate::path::missing());
}

#[test]
fn test_missing_reference_exits_1() {
    let temp_dir = setup(r#"{"actions": [{"op": "ADD_SONG", "playlist_id": "9", "song_id": "1"}]}"#);
    mixtape(&temp_dir)
        .args(["input.json", "changes.json", "out.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No such playlist, id=9"));
    temp_dir.child("out.json").assert(predicate::path::missing());
}

#[test]
fn test_unknown_operation_exits_1() {
    let temp_dir = setup(r#"{"actions": [{"op": "SHUFFLE"}]}"#);
    mixtape(&temp_dir)
        .args(["input.json", "changes.json", "-"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No such operation: SHUFFLE"));
}

#[test]
fn test_missing_input_exits_2() {
    let temp_dir = setup(CHANGES);
    mixtape(&temp_dir)
        .args(["nope.json", "changes.json", "out.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read dataset"));
}

#[test]
fn test_malformed_changes_exit_2() {
    let temp_dir = setup("{\"actions\": 5}");
    mixtape(&temp_dir)
        .args(["input.json", "changes.json", "out.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse change-list"));
}

#[test]
fn test_config_sets_indent_and_report() {
    let temp_dir = setup(CHANGES);
    temp_dir
        .child(".mixtape/config.toml")
        .write_str("[defaults]\nindent = 0\nreport_format = \"json\"\n")
        .unwrap();

    let assert = mixtape(&temp_dir)
        .args(["input.json", "changes.json", "-"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"success\":true"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_indent_flag_overrides_config() {
    let temp_dir = setup(CHANGES);
    temp_dir
        .child(".mixtape/config.toml")
        .write_str("[defaults]\nindent = 0\n")
        .unwrap();

    let assert = mixtape(&temp_dir)
        .args(["-q", "--indent", "2", "input.json", "changes.json", "-"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("{\n  \"playlists\""));
}

#[test]
fn test_explicit_missing_config_exits_2() {
    let temp_dir = setup(CHANGES);
    mixtape(&temp_dir)
        .args(["--config", "missing.toml", "input.json", "changes.json", "out.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn test_no_color_env_accepts_any_value() {
    let temp_dir = setup(CHANGES);
    for value in ["1", "true", "0", ""] {
        mixtape(&temp_dir)
            .env("NO_COLOR", value)
            .args(["input.json", "changes.json", "out.json"])
            .assert()
            .success();
    }
    temp_dir.child("out.json").assert(predicate::path::is_file());
}

#[test]
fn test_write_failure_exits_3() {
    let temp_dir = setup(CHANGES);
    mixtape(&temp_dir)
        .args(["input.json", "changes.json", "no_such_dir/out.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to create temporary file"));
    temp_dir.child("no_such_dir").assert(predicate::path::missing());
}

#[test]
fn test_unreadable_input_exits_2() {
    let temp_dir = setup(CHANGES);
    temp_dir.child("dataset_dir").create_dir_all().unwrap();
    mixtape(&temp_dir)
        .args(["dataset_dir", "changes.json", "out.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("dataset"));
    temp_dir.child("out.json").assert(predicate::path::missing());
}

#[test]
fn test_invalid_report_format_in_config_exits_2() {
    let temp_dir = setup(CHANGES);
    temp_dir
        .child("custom.toml")
        .write_str("[defaults]\nreport_format = \"yaml\"\n")
        .unwrap();

    mixtape(&temp_dir)
        .args(["--config", "custom.toml", "input.json", "changes.json", "out.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid report format: yaml"));
    temp_dir.child("out.json").assert(predicate::path::missing());
}

#[test]
fn test_loose_song_and_user_records_pass_through() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child("input.json")
        .write_str(
            r#"{
                "playlists": [{"id": "1", "user_id": "1", "song_ids": []}],
                "users": [{"id": "1"}],
                "songs": [{"id": "1", "title": "untitled", "artist": null, "bpm": 120}]
            }"#,
        )
        .unwrap();
    temp_dir
        .child("changes.json")
        .write_str(r#"{"actions": [{"op": "ADD_SONG", "playlist_id": "1", "song_id": "1"}]}"#)
        .unwrap();

    mixtape(&temp_dir)
        .args(["-q", "input.json", "changes.json", "out.json"])
        .assert()
        .success();

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("out.json")).unwrap())
            .unwrap();
    assert_eq!(written["users"], json!([{"id": "1"}]));
    assert_eq!(
        written["songs"],
        json!([{"id": "1", "title": "untitled", "artist": null, "bpm": 120}])
    );
}
