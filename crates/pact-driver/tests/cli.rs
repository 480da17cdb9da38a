//! End-to-end tests driving the `pactc` binary through `assert_cmd`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn pactc() -> Command {
    Command::cargo_bin("pactc").unwrap()
}

fn source_file(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

#[test]
fn help_flag_succeeds() {
    pactc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pactc"));
}

#[test]
fn version_flag_succeeds() {
    pactc().arg("--version").assert().success();
}

#[test]
fn lex_prints_one_line_per_token() {
    let file = source_file("define f() -> Int\ngiven\n  1\n");
    pactc()
        .arg("lex")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Define"));
}

#[test]
fn parse_prints_declaration_count() {
    let file = source_file("define f() -> Int\ngiven\n  1\n");
    pactc()
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 declaration"));
}

#[test]
fn check_fails_on_type_error() {
    let file = source_file("define f() -> Int\ngiven\n  true\n");
    pactc().arg("check").arg(file.path()).assert().failure();
}

#[test]
fn check_succeeds_on_well_typed_program() {
    let file = source_file("define f(x: Int) -> Int\ngiven\n  x\n");
    pactc().arg("check").arg(file.path()).assert().success();
}

#[test]
fn compile_writes_to_output_file() {
    let file = source_file("define f() -> Int\ngiven\n  1\n");
    let output = NamedTempFile::new().unwrap();
    pactc()
        .arg("compile")
        .arg(file.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success();

    let generated = std::fs::read_to_string(output.path()).unwrap();
    assert!(generated.contains("class Success:"));
}

#[test]
fn verify_reports_a_proven_precondition() {
    let file = source_file("define f(x: Int) -> Int\n  expect x >= 0\n  ensure x >= 0\ngiven\n  x\n");
    pactc()
        .arg("verify")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains('\u{2713}'));
}

#[test]
fn optimize_folds_constant_arithmetic() {
    let file = source_file("define f() -> Int\ngiven\n  1 + 2\n");
    pactc()
        .arg("optimize")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
}

#[test]
fn fmt_write_flag_overwrites_input_file() {
    let file = source_file("define   f ( )  ->  Int\ngiven\n  1\n");
    pactc().arg("fmt").arg(file.path()).arg("-w").assert().success();

    let formatted = std::fs::read_to_string(file.path()).unwrap();
    assert!(formatted.contains("define f() -> Int"));
}
