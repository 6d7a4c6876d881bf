//! Integration tests for the teller binary.
//!
//! Each test drives a full session through the binary's stdin and checks the
//! rendered screens, with the accounts file kept inside a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn accounts_path(dir: &TempDir) -> PathBuf {
    dir.path().join("accounts.json")
}

fn teller(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.arg(accounts_path(dir));
    cmd
}

#[test]
fn test_quit_from_main_menu() {
    let dir = TempDir::new().unwrap();
    teller(&dir)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Teller ==="))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    teller(&dir).write_stdin("").assert().success();
}

#[test]
fn test_open_account_writes_accounts_file() {
    let dir = TempDir::new().unwrap();
    teller(&dir)
        .write_stdin("2\nAlice\n1111\n1111\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account 1000 opened for Alice."));

    let contents = fs::read_to_string(accounts_path(&dir)).unwrap();
    assert!(contents.contains("\"1000\""));
    assert!(contents.contains("\"name\": \"Alice\""));
    assert!(contents.contains("\"account_number\": 1000"));
}

#[test]
fn test_full_session() {
    let dir = TempDir::new().unwrap();
    let script = "2\nAlice\n1111\n1111\n1\n1000\n1111\n1\n100\n2\n40\n1111\n3\n4\n5\n3\n";

    teller(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Alice."))
        .stdout(predicate::str::contains(
            "Deposited 100.00. Balance is now 100.00.",
        ))
        .stdout(predicate::str::contains(
            "Withdrew 40.00. Balance is now 60.00.",
        ))
        .stdout(predicate::str::contains("Balance: 60.00"))
        .stdout(predicate::str::contains("withdrew 40.00"));
}

#[test]
fn test_state_survives_restart() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .write_stdin("2\nAlice\n1111\n1111\n1\n1000\n1111\n1\n100\n5\n3\n")
        .assert()
        .success();

    teller(&dir)
        .write_stdin("1\n1000\n1111\n3\n5\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Alice."))
        .stdout(predicate::str::contains("Balance: 100.00"));
}

#[test]
fn test_login_against_unknown_account() {
    let dir = TempDir::new().unwrap();
    teller(&dir)
        .write_stdin("1\n9999\n1111\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No account with number 9999."));
}

#[test]
fn test_corrupt_accounts_file_fails_startup() {
    let dir = TempDir::new().unwrap();
    fs::write(accounts_path(&dir), "not json at all").unwrap();

    teller(&dir)
        .write_stdin("3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt account data"));
}
