use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_config_path_uses_chatlist_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("config.toml");

    cargo_bin_cmd!("chatlist")
        .env("CHATLIST_HOME", home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_init_writes_template_once() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("chatlist")
        .env("CHATLIST_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let contents = fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(contents.contains("title_max_width"));

    cargo_bin_cmd!("chatlist")
        .env("CHATLIST_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.toml"), "title_max_width = \"wide\"").unwrap();

    cargo_bin_cmd!("chatlist")
        .env("CHATLIST_HOME", home.path())
        .args(["threads", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));

    // Config commands still work.
    cargo_bin_cmd!("chatlist")
        .env("CHATLIST_HOME", home.path())
        .args(["config", "path"])
        .assert()
        .success();
}
