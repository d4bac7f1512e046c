use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const TEST_INPUT: &str = include_str!("../data/test_input");

#[test]
fn counts_from_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TEST_INPUT.as_bytes()).unwrap();

    let mut cmd = cargo_bin_cmd!("day3");
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout("Part 1, 3\nPart 2, 6\n");
}

#[test]
fn counts_from_stdin() {
    let mut cmd = cargo_bin_cmd!("day3");
    cmd.write_stdin("5 10 25\n5 10 13\n3 4 5\n");

    cmd.assert()
        .success()
        .stdout("Part 1, 2\nPart 2, 2\n");
}

#[test]
fn empty_stdin_counts_zero() {
    let mut cmd = cargo_bin_cmd!("day3");
    cmd.write_stdin("\n  \n");

    cmd.assert()
        .success()
        .stdout("Part 1, 0\nPart 2, 0\n");
}

#[test]
fn missing_file_fails_without_output() {
    let mut cmd = cargo_bin_cmd!("day3");
    cmd.arg("/definitely/not/here/input.txt");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unable to read file"));
}

#[test]
fn malformed_token_names_the_token() {
    let mut cmd = cargo_bin_cmd!("day3");
    cmd.write_stdin("1 2 3\n4 5x 6\n");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 2").and(predicate::str::contains("5x")));
}

#[test]
fn short_row_is_rejected() {
    let mut cmd = cargo_bin_cmd!("day3");
    cmd.write_stdin("3 4 5\n6 8\n");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Row 1 has 2 values"));
}

#[test]
fn bare_carriage_returns_and_form_feeds_are_whitespace() {
    let mut cmd = cargo_bin_cmd!("day3");
    cmd.write_stdin("5\x0c10 25\r5 10 13\r3\t4\x0b5\r");

    cmd.assert().success().stdout("Part 1, 2\nPart 2, 2\n");
}
