//! Binary-level tests for the mercury CLI
//!
//! The upload port is fixed, so these cover the command surface and local
//! failure paths; pipeline behavior against a live endpoint is exercised in
//! `fill_baselist_e2e.rs`.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_fill_baselist() {
    let mut cmd = Command::cargo_bin("mercury").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fill-baselist"));
}

#[test]
fn test_fill_baselist_requires_file_and_group() {
    let mut cmd = Command::cargo_bin("mercury").unwrap();
    cmd.arg("fill-baselist");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--file"))
        .stderr(predicate::str::contains("--group"));
}

#[test]
fn test_missing_input_file_is_fatal() {
    let mut cmd = Command::cargo_bin("mercury").unwrap();
    cmd.arg("fill-baselist")
        .arg("--file")
        .arg("/no/such/base-list.txt")
        .arg("--group")
        .arg("1");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_zero_batch_size_is_rejected() {
    let mut cmd = Command::cargo_bin("mercury").unwrap();
    cmd.arg("fill-baselist")
        .arg("--file")
        .arg("/no/such/base-list.txt")
        .arg("--group")
        .arg("1")
        .arg("--batch-size")
        .arg("0");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("batch-size"));
}

#[test]
fn test_group_must_fit_smallint() {
    let mut cmd = Command::cargo_bin("mercury").unwrap();
    cmd.arg("fill-baselist")
        .arg("--file")
        .arg("/no/such/base-list.txt")
        .arg("--group")
        .arg("100000");

    cmd.assert().failure();
}
