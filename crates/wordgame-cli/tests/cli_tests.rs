//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs with an isolated HOME and no wordgame env overrides, so a user's
/// own config can't leak into the test.
fn wordgame(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("wordgame").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("WORDGAME_DATA_DIR")
        .env_remove("WORDGAME_DATASET")
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

fn answers(line: &str, times: usize) -> String {
    format!("{line}\n").repeat(times)
}

// --- play ---

#[test]
fn play_single_pair_all_right_scores_100() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--seed", "1", "--dataset"])
        .arg(fixture("mock_correct_wordpair.json"))
        .write_stdin(answers("y", 15))
        .assert()
        .success()
        .stdout(predicate::str::contains("[15/15] primary school"))
        .stdout(predicate::str::contains("all prompts answered"))
        .stdout(predicate::str::contains("Score: 100%"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn play_three_wrong_ends_early() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--seed", "1", "--dataset"])
        .arg(fixture("mock_correct_wordpair.json"))
        .write_stdin(answers("n", 3))
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct attempts: 0  Wrong attempts: 3"))
        .stdout(predicate::str::contains("too many wrong answers"))
        .stdout(predicate::str::contains("Score: 0%"))
        .stdout(predicate::str::contains("[4/15]").not());
}

#[test]
fn play_quit_leaves_without_game_over() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--dataset"])
        .arg(fixture("mock_wordpairs.json"))
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/15]"))
        .stdout(predicate::str::contains("Bye!"))
        .stdout(predicate::str::contains("Game over").not());
}

#[test]
fn play_end_of_input_quits() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--dataset"])
        .arg(fixture("mock_wordpairs.json"))
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn play_reprompts_on_unknown_answer() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--max-prompts", "1", "--dataset"])
        .arg(fixture("mock_correct_wordpair.json"))
        .write_stdin("maybe\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please answer y, n or q."))
        .stdout(predicate::str::contains("Score: 100%"));
}

#[test]
fn play_restart_starts_a_fresh_round() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--seed", "3", "--max-prompts", "2", "--dataset"])
        .arg(fixture("mock_correct_wordpair.json"))
        .write_stdin("y\ny\nr\ny\nn\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 100%"))
        .stdout(predicate::str::contains("Score: 50%"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn play_json_summary() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--json", "--max-prompts", "1", "--dataset"])
        .arg(fixture("mock_correct_wordpair.json"))
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 100"))
        .stdout(predicate::str::contains("\"reason\": \"prompt_limit\""));
}

#[test]
fn play_corrupt_dataset_has_no_word_pairs() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--dataset"])
        .arg(fixture("mock_corrupt_wordpair.json"))
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: no word pairs available"));
}

#[test]
fn play_falls_back_to_builtin_words() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--data-dir"])
        .arg(home.path().join("empty"))
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/15]"));
}

#[test]
fn play_rejects_zero_prompts() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--max-prompts", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max prompts must be at least 1"));
}

#[test]
fn play_reads_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(
        &config,
        format!(
            "dataset = {:?}\n\n[round]\nmax_prompts = 1\n\n[engine]\nseed = 5\n",
            fixture("mock_correct_wordpair.json")
        ),
    )
    .unwrap();

    wordgame(&home)
        .arg("play")
        .arg("--config")
        .arg(&config)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/1] primary school"))
        .stdout(predicate::str::contains("Score: 100%"));
}

#[test]
fn play_missing_config_file() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["play", "--config", "no_such_config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

// --- validate ---

#[test]
fn validate_reports_duplicates() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["validate", "--dataset"])
        .arg(fixture("mock_wordpairs.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("4 pairs, 3 unique"))
        .stdout(predicate::str::contains("[#3] WARNING: duplicate pair"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_reports_conflicting_translations() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["validate", "--dataset"])
        .arg(fixture("mock_conflicting_wordpairs.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "conflicting translations for 'house': casa, hogar",
        ))
        .stdout(predicate::str::contains("2 warning(s) found"));
}

#[test]
fn validate_clean_dataset() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["validate", "--dataset"])
        .arg(fixture("mock_correct_wordpair.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 pairs, 1 unique"))
        .stdout(predicate::str::contains("All datasets valid."));
}

#[test]
fn validate_corrupt_dataset() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["validate", "--dataset"])
        .arg(fixture("mock_corrupt_wordpair.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed dataset"));
}

#[test]
fn validate_nonexistent_file() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["validate", "--dataset", "nonexistent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: dataset not found"));
}

#[test]
fn validate_bundled_datasets_directory() {
    let home = TempDir::new().unwrap();
    let datasets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../datasets");
    wordgame(&home)
        .args(["validate", "--dataset"])
        .arg(datasets)
        .assert()
        .success()
        .stdout(predicate::str::contains("words.json"))
        .stdout(predicate::str::contains("All datasets valid."));
}

// --- score ---

#[test]
fn score_truncates() {
    let home = TempDir::new().unwrap();
    for (correct, max, expected) in [("5", "15", "33%"), ("0", "3", "0%"), ("15", "15", "100%")] {
        wordgame(&home)
            .args(["score", "--correct", correct, "--max", max])
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("{expected}\n")));
    }
}

#[test]
fn score_zero_max_is_zero() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["score", "--correct", "0", "--max", "0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0%\n"));
}

#[test]
fn score_huge_overshoot_saturates() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .args(["score", "--correct", "4294967295", "--max", "1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("4294967295%\n"))
        .stderr(predicate::str::contains("exceeds the maximum"));
}

// --- init ---

#[test]
fn init_creates_files() {
    let home = TempDir::new().unwrap();

    wordgame(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created wordgame.toml"))
        .stdout(predicate::str::contains("Created datasets/words.json"));

    assert!(home.path().join("wordgame.toml").exists());
    let words = std::fs::read_to_string(home.path().join("datasets/words.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&words).unwrap();
    assert!(parsed.as_array().is_some_and(|a| !a.is_empty()));
}

#[test]
fn init_skips_existing() {
    let home = TempDir::new().unwrap();

    // First init
    wordgame(&home).arg("init").assert().success();

    // Second init should skip
    wordgame(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_then_play_uses_local_config() {
    let home = TempDir::new().unwrap();
    wordgame(&home).arg("init").assert().success();

    wordgame(&home)
        .arg("play")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("15 prompts, 3 wrong answers allowed, 5s per prompt"));
}

// --- meta ---

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("English/Spanish word-pair quiz"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    wordgame(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordgame"));
}
