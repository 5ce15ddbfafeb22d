#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn cli(roster: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wardplan-cli").unwrap();
    cmd.arg("--roster").arg(roster);
    cmd
}

#[test]
fn add_then_list_nurses() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.txt");

    cli(&roster)
        .args(["add-nurse", "--name", "Alice", "--skill", "Senior"])
        .assert()
        .success();
    cli(&roster)
        .args(["add-nurse", "--name", "Bob"])
        .assert()
        .success();

    cli(&roster)
        .arg("list-nurses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice,Senior"))
        .stdout(predicate::str::contains("Bob,Intermediate"));
}

#[test]
fn plan_prints_the_report() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.txt");
    std::fs::write(
        &roster,
        "Alice,Senior\nBob,Senior\nCara,Intermediate\nDan,Junior\nEve,Junior\n",
    )
    .unwrap();

    cli(&roster)
        .args(["plan", "--patients", "28", "--ratio", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARD SHIFT ALLOCATION REPORT"))
        .stdout(predicate::str::contains("Total Patients: 28"))
        .stdout(predicate::str::contains("TASKS DISTRIBUTION"));
}

#[test]
fn check_exits_2_when_understaffed() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.txt");
    std::fs::write(&roster, "Alice,Senior\n").unwrap();

    cli(&roster)
        .args(["check", "--patients", "28", "--ratio", "6"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsafe staffing"));
}

#[test]
fn plan_requires_force_when_understaffed() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.txt");
    std::fs::write(&roster, "Alice,Senior\n").unwrap();

    cli(&roster)
        .args(["plan", "--patients", "28"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    cli(&roster)
        .args(["plan", "--patients", "28", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nurses on Duty: 1"))
        .stderr(predicate::str::contains("unsafe staffing"));
}
