use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn giniround() -> Command {
    let mut cmd = Command::cargo_bin("giniround").unwrap();
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_default_run_passes() {
    giniround()
        .assert()
        .success()
        .stdout(predicate::str::contains("all 21 cases passed"));
}

#[test]
fn test_check_ties_away_passes() {
    giniround()
        .args(["check", "--rounder", "ties-away"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ties-away, 21 cases"));
}

#[test]
fn test_exit_code_is_failure_count() {
    giniround()
        .args(["check", "--rounder", "truncate"])
        .assert()
        .code(8)
        .stdout(predicate::str::contains("8 of 21 cases failed"));
}

#[test]
fn test_custom_values() {
    giniround()
        .args(["check", "-r", "truncate", "--value", "42.7", "--value", "-0.8", "--value", "-42.5"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("2 of 3 cases failed"));
}

#[test]
fn test_json_output() {
    let output = giniround()
        .args(["check", "--json", "--value", "42.5", "--value", "-42.5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["actual"], 42);
    assert_eq!(lines[1]["actual"], -42);
    assert_eq!(lines[2]["summary"]["total"], 2);
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"rounder": "truncate", "cases": [0.8, 1.0]}}"#).unwrap();
    giniround()
        .args(["check", "--config"])
        .arg(file.path())
        .assert()
        .code(1);

    // Flags override the file.
    giniround()
        .args(["check", "--rounder", "ties-to-even", "--config"])
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn test_bad_config_is_an_error() {
    giniround()
        .args(["check", "--config", "/nonexistent/giniround.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_unknown_rounder_rejected() {
    giniround()
        .args(["check", "--rounder", "banker"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rounder"));
}

// ============================================================================
// verify
// ============================================================================

#[test]
fn test_verify_conforming() {
    giniround()
        .args(["verify", "--samples", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("idempotent: proven"));
}

#[test]
fn test_verify_truncate_fails() {
    giniround()
        .args(["verify", "--rounder", "truncate", "--samples", "50"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("non_half_unique: violated"));
}
