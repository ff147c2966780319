use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("chatlist")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("threads"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--threads-file"));
}

#[test]
fn test_threads_help_shows_subcommands() {
    cargo_bin_cmd!("chatlist")
        .args(["threads", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("rename"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("chatlist")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
