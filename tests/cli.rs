use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn ini_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temporary file");
    file
}

#[test]
fn missing_path_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("ini");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("<PATH>"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg("--no-such-flag");

    cmd.assert().failure().code(1);
}

#[test]
fn unreadable_path_fails_to_open() {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg(dir.path().join("missing.ini"));

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("could not open"));
}

#[test]
fn dumps_parsed_document() {
    let file = ini_file("; header comment\ntop = 1\n\n[server]\nhost = example.org ; primary\n");
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::eq("top=1\n[server]\nhost=example.org\n"));
}

#[test]
fn looks_up_key_in_section() {
    let file = ini_file("name=outer\n[a]\nname = inner value\n");
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg(file.path()).args(["--section", "a", "--key", "name"]);

    cmd.assert()
        .success()
        .stdout(predicate::eq("inner value\n"));
}

#[test]
fn looks_up_key_in_default_group() {
    let file = ini_file("name=outer\n[a]\nname = inner\n");
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg(file.path()).args(["-k", "name"]);

    cmd.assert().success().stdout(predicate::eq("outer\n"));
}

#[test]
fn prints_single_section() {
    let file = ini_file("x=1\n[a]\nk=v\n[b]\nj=w\n");
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg(file.path()).args(["-s", "b"]);

    cmd.assert().success().stdout(predicate::eq("j=w\n"));
}

#[test]
fn missing_section_prints_nothing() {
    let file = ini_file("[a]\nk=v\n");
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg(file.path()).args(["-s", "nope", "-k", "k"]);

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn self_test_passes() {
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg("--self-test");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TEST PASS: empty"))
        .stdout(predicate::str::contains("TEST PASS: mixed sections"));
}

#[test]
fn directory_path_fails_to_open() {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg(dir.path());

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("could not open"));
}

#[test]
fn test_flag_runs_self_test() {
    let mut cmd = cargo_bin_cmd!("ini");
    cmd.arg("--test");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TEST PASS: comments"));
}
