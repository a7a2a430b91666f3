//! Integration tests for the `oracle` CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory holding a small table file.
fn test_tables() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tables.yaml"),
        r#"tables:
  calm:
    - "All quiet"
  loot:
    - "You find {2d6} gold"
    - "A guard notices if {1d20>15}"
    - "{1d4} gems"
  broken:
    - "{1d6<abc}"
"#,
    )
    .unwrap();
    dir
}

fn oracle() -> Command {
    Command::cargo_bin("oracle").unwrap()
}

fn oracle_with(dir: &TempDir) -> Command {
    let mut cmd = oracle();
    cmd.arg("--tables").arg(dir.path().join("tables.yaml"));
    cmd
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_builtin_tables() {
    oracle()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("outside"))
        .stdout(predicate::str::contains("treasure"));
}

#[test]
fn list_table_file() {
    let dir = test_tables();
    oracle_with(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("loot"))
        .stdout(predicate::str::contains("3 tables"))
        .stdout(predicate::str::contains("outside").not());
}

#[test]
fn list_missing_file_fails() {
    oracle()
        .args(["--tables", "/no/such/tables.yaml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn list_invalid_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "tables:\n  t: 3\n").unwrap();
    oracle()
        .arg("--tables")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid table file"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_numbers_rows() {
    let dir = test_tables();
    oracle_with(&dir)
        .args(["show", "loot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- 1: You find {2d6} gold"))
        .stdout(predicate::str::contains("- 3: {1d4} gems"));
}

#[test]
fn show_unknown_table_fails() {
    oracle()
        .args(["show", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown table: nowhere"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_plain_entry() {
    let dir = test_tables();
    oracle_with(&dir)
        .args(["roll", "calm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All quiet"));
}

#[test]
fn roll_is_reproducible_with_seed() {
    let dir = test_tables();
    let run = || {
        oracle_with(&dir)
            .args(["--seed", "42", "roll", "loot", "-n", "3"])
            .output()
            .unwrap()
    };
    let a = run();
    let b = run();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
    assert!(!String::from_utf8_lossy(&a.stdout).contains('{'));
}

#[test]
fn roll_json_output() {
    let dir = test_tables();
    let output = oracle_with(&dir)
        .args(["--seed", "7", "roll", "loot", "-n", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rolls: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rolls = rolls.as_array().unwrap();
    assert_eq!(rolls.len(), 2);
    for roll in rolls {
        assert_eq!(roll["table"], "loot");
        let row = roll["row"].as_u64().unwrap();
        assert!((1..=3).contains(&row));
        assert!(!roll["text"].as_str().unwrap().contains('{'));
    }
}

#[test]
fn roll_too_many_rows_fails() {
    let dir = test_tables();
    oracle_with(&dir)
        .args(["roll", "loot", "-n", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot draw 4 entries"));
}

#[test]
fn roll_broken_entry_fails() {
    let dir = test_tables();
    oracle_with(&dir)
        .args(["roll", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed comparator"));
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_two_placeholders() {
    oracle()
        .args(["--seed", "1", "render", "{1d4}-{1d20}"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^1d4: [1-4]-1d20: \d{1,2}\n$").unwrap());
}

#[test]
fn render_comparison() {
    oracle()
        .args(["render", "guard: {1d20>15}"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^guard: \d{1,2}: (true|false)\n$").unwrap());
}

#[test]
fn render_without_placeholders_is_unchanged() {
    oracle()
        .args(["render", "a quiet night"])
        .assert()
        .success()
        .stdout("a quiet night\n");
}

#[test]
fn render_unterminated_placeholder_is_unchanged() {
    oracle()
        .args(["render", "roll {1d6"])
        .assert()
        .success()
        .stdout("roll {1d6\n");
}

#[test]
fn render_malformed_comparator_fails() {
    oracle()
        .args(["render", "{1d6<abc}"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed comparator"));
}

#[test]
fn render_invalid_dice_fails() {
    oracle()
        .args(["render", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice expression"));
}
