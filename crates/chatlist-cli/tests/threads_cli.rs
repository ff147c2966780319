//! Integration tests for `chatlist threads`.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn chatlist(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("chatlist");
    cmd.env("CHATLIST_HOME", home.path());
    cmd
}

fn write_config(home: &TempDir) {
    fs::write(home.path().join("config.toml"), "time_zone = \"utc\"\n").unwrap();
}

fn created_id(output: &[u8]) -> String {
    String::from_utf8_lossy(output).trim().to_string()
}

#[test]
fn test_list_empty_store() {
    let home = TempDir::new().unwrap();

    chatlist(&home)
        .args(["threads", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No threads yet"));
}

#[test]
fn test_new_without_title_lists_as_fallback_label() {
    let home = TempDir::new().unwrap();

    let output = chatlist(&home).args(["threads", "new"]).output().unwrap();
    assert!(output.status.success());
    let id = created_id(&output.stdout);
    assert!(!id.is_empty());

    chatlist(&home)
        .args(["threads", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("Chat from"))
        .stdout(predicate::str::contains("New Thread").not());
}

#[test]
fn test_list_is_newest_first_with_formatted_dates() {
    let home = TempDir::new().unwrap();
    write_config(&home);
    let store = json!([
        { "id": "old", "title": "Older", "resourceId": "", "createdAt": "2024-03-07T15:04:05Z" },
        { "id": "new", "title": "Newer", "resourceId": "", "createdAt": "2024-03-08T09:00:00Z" }
    ]);
    fs::write(
        home.path().join("threads.json"),
        serde_json::to_string(&store).unwrap(),
    )
    .unwrap();

    let output = chatlist(&home).args(["threads", "list"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("new"));
    assert!(lines[0].contains("Mar 8 at 9:00:00 AM"));
    assert!(lines[1].contains("Mar 7 at 3:04:05 PM  Older"));
}

#[test]
fn test_rename_then_delete() {
    let home = TempDir::new().unwrap();

    let output = chatlist(&home)
        .args(["threads", "new", "--title", "Draft"])
        .output()
        .unwrap();
    let id = created_id(&output.stdout);

    chatlist(&home)
        .args(["threads", "rename", id.as_str(), "Quarterly Planning"])
        .assert()
        .success();
    chatlist(&home)
        .args(["threads", "list"])
        .assert()
        .stdout(predicate::str::contains("Quarterly Planning"));

    chatlist(&home)
        .args(["threads", "delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted thread"));
    chatlist(&home)
        .args(["threads", "list"])
        .assert()
        .stdout(predicate::str::contains("No threads yet"));
}

#[test]
fn test_delete_unknown_thread_fails() {
    let home = TempDir::new().unwrap();

    chatlist(&home)
        .args(["threads", "delete", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread not found: missing"));
}

#[test]
fn test_threads_file_flag_overrides_store() {
    let home = TempDir::new().unwrap();
    let other = home.path().join("elsewhere").join("store.json");

    chatlist(&home)
        .args(["threads", "new", "--title", "Side"])
        .arg("--threads-file")
        .arg(&other)
        .assert()
        .success();

    assert!(other.exists());
    assert!(!home.path().join("threads.json").exists());
}

#[test]
fn test_browse_requires_terminal() {
    let home = TempDir::new().unwrap();

    chatlist(&home)
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
