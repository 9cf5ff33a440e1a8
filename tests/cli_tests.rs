//! CLI integration tests using assert_cmd. Answers are piped through stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn latin_quiz(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("latin-quiz").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("LATIN_QUIZ_DATA_FILE")
        .env_remove("RUST_LOG");
    cmd
}

const CAESAR: &str = r#"[
  {
    "id": 1,
    "latin_text": "Veni, vidi, vici",
    "english_translation": "I came, I saw, I conquered",
    "author": "Caesar",
    "work": "Plutarch",
    "notes": ""
  }
]"#;

#[test]
fn no_arguments_shows_help() {
    let dir = TempDir::new().unwrap();
    latin_quiz(&dir)
        .assert()
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("play"));
}

#[test]
fn play_on_empty_database_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    latin_quiz(&dir)
        .arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes found in the database"))
        .stdout(predicate::str::contains("Round").not());

    // The data file is created on first use.
    let raw = std::fs::read_to_string(dir.path().join("quotes.json")).unwrap();
    assert_eq!(raw.trim(), "[]");
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();
    latin_quiz(&dir)
        .arg("add")
        .write_stdin("Ālea iacta est\nThe die is cast\nCaesar\nSuetonius\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote added successfully with ID: 1"));

    let raw = std::fs::read_to_string(dir.path().join("quotes.json")).unwrap();
    assert!(raw.contains("Ālea iacta est"));

    latin_quiz(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1"))
        .stdout(predicate::str::contains("  Latin: Ālea iacta est"))
        .stdout(predicate::str::contains("  Work: Suetonius"))
        .stdout(predicate::str::contains("Notes").not());
}

#[test]
fn play_single_round_reports_score() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quotes.json"), CAESAR).unwrap();

    latin_quiz(&dir)
        .args(["play", "--rounds", "3", "--seed", "11"])
        .write_stdin("nobody knows\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Round 1 of 1 ---"))
        .stdout(predicate::str::contains("> Veni, vidi, vici"))
        .stdout(predicate::str::contains("Round 2").not())
        .stdout(predicate::str::contains("Incorrect."))
        .stdout(predicate::str::contains("\u{1b}").not())
        .stdout(predicate::str::ends_with("Your final score: 0/1\n"));
}

#[test]
fn rust_log_enables_debug_traces() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quotes.json"), CAESAR).unwrap();

    latin_quiz(&dir)
        .args(["play", "--rounds", "1", "--seed", "3"])
        .env("RUST_LOG", "latin_quiz=debug")
        .write_stdin("x\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded quotes"))
        .stderr(predicate::str::contains("planned quiz session"));
}

#[test]
fn default_logging_is_quiet() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quotes.json"), CAESAR).unwrap();

    latin_quiz(&dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn add_refuses_to_overwrite_unparseable_file() {
    let dir = TempDir::new().unwrap();
    let bad = r#"[{"id": 1, "notes": 5}]"#;
    std::fs::write(dir.path().join("quotes.json"), bad).unwrap();

    latin_quiz(&dir)
        .arg("add")
        .write_stdin("a\nb\nc\nd\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be parsed"));

    let raw = std::fs::read_to_string(dir.path().join("quotes.json")).unwrap();
    assert_eq!(raw, bad);
}

#[test]
fn play_with_negative_rounds_is_game_over() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quotes.json"), CAESAR).unwrap();

    latin_quiz(&dir)
        .args(["play", "--rounds", "-2"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game Over"))
        .stdout(predicate::str::contains("0/0"));
}

#[test]
fn data_file_option_and_env() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("custom.json"), CAESAR).unwrap();

    latin_quiz(&dir)
        .args(["list", "--data-file", "custom.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Author: Caesar"));

    latin_quiz(&dir)
        .arg("list")
        .env("LATIN_QUIZ_DATA_FILE", "custom.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("  Author: Caesar"));
}

#[test]
fn malformed_file_lists_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quotes.json"), "not json").unwrap();

    latin_quiz(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The database is empty."));
}
