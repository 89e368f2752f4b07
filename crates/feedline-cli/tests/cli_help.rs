use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    cargo_bin_cmd!("feedline")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("feed"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_auth_help_lists_session_commands() {
    cargo_bin_cmd!("feedline")
        .args(["auth", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("feedline")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("feedline"));
}
