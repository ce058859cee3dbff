use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn palindromic() -> Command {
    Command::cargo_bin("palindromic").expect("binary exists")
}

#[test]
fn check_runs_every_strategy() {
    palindromic()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All tests passed successfully"));
}

#[test]
fn find_prints_one_result_per_text() {
    palindromic()
        .args(["find", "artrartrt", "abacada", "ab"])
        .assert()
        .success()
        .stdout("rtrartr\naba\na\n");
}

#[test]
fn find_reads_stdin_lines() {
    palindromic()
        .args(["find", "--strategy", "brute-force"])
        .write_stdin("aaaa\r\nabacada\n")
        .assert()
        .success()
        .stdout("aaaa\naba\n");
}

#[test]
fn find_texts_with_file_is_config_error() {
    palindromic()
        .args(["find", "abc", "--file", "inputs.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot be used together"));
}

#[test]
fn find_missing_file_is_io_error() {
    let dir = tempdir().expect("create temp dir");
    let missing = dir.path().join("missing.txt");

    palindromic()
        .arg("find")
        .arg("--file")
        .arg(&missing)
        .assert()
        .code(2);
}

#[test]
fn no_pretty_flag_overrides_config_file() {
    let dir = tempdir().expect("create temp dir");
    let config_path = dir.path().join("palindromic.toml");
    fs::write(&config_path, "[output]\nformat = \"json\"\npretty = true\n")
        .expect("write config");

    palindromic()
        .arg("--config")
        .arg(&config_path)
        .args(["find", "abacada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\n"));

    let output = palindromic()
        .arg("--config")
        .arg(&config_path)
        .args(["find", "abacada", "--no-pretty"])
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout.lines().count(), 1);
    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).expect("json line");
    assert_eq!(value["match"]["text"], "aba");
}
