//! Integration tests for the hintsheet binary.
//!
//! Responsibilities:
//! - Exercise the list/show/match subcommands end to end against the
//!   bundled sheets and temporary user sheet directories.
//!
//! Invariants:
//! - Tests are hermetic: HOME/XDG_CONFIG_HOME point into a tempdir so
//!   the real user configuration is never read.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn hintsheet(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hintsheet").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("HINTSHEET_USER_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_contains_bundled_sheets() {
    let tmp = tempfile::tempdir().unwrap();
    hintsheet(tmp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firefox"))
        .stdout(predicate::str::contains("vscode"));
}

#[test]
fn test_match_is_case_insensitive() {
    let tmp = tempfile::tempdir().unwrap();
    hintsheet(tmp.path())
        .args(["match", "--wm-class", "Firefox", "--title", "Mozilla Firefox"])
        .assert()
        .success()
        .stdout("firefox\n");
}

#[test]
fn test_match_without_candidates_uses_persisted_fallback() {
    let tmp = tempfile::tempdir().unwrap();
    hintsheet(tmp.path())
        .args(["match", "--wm-class", "no-such-app", "--title", "x"])
        .assert()
        .success()
        .stdout("hintsheet\n");
}

#[test]
fn test_match_fallback_flag_overrides_settings() {
    let tmp = tempfile::tempdir().unwrap();
    hintsheet(tmp.path())
        .args([
            "match",
            "--wm-class",
            "no-such-app",
            "--fallback",
            "vscode",
        ])
        .assert()
        .success()
        .stdout("vscode\n");
}

#[test]
fn test_match_stale_fallback_fails_loudly() {
    let tmp = tempfile::tempdir().unwrap();
    hintsheet(tmp.path())
        .args(["match", "--wm-class", "no-such-app", "--fallback", "stale"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("stale"));
}

#[test]
fn test_show_prints_sections() {
    let tmp = tempfile::tempdir().unwrap();
    hintsheet(tmp.path())
        .args(["show", "firefox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Navigation"))
        .stdout(predicate::str::contains("Focus address bar"));
}

#[test]
fn test_show_unknown_id_exits_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    hintsheet(tmp.path())
        .args(["show", "does-not-exist"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_show_includes_namespaced_sections() {
    // kitty includes readline in the bundled set.
    let tmp = tempfile::tempdir().unwrap();
    hintsheet(tmp.path())
        .args(["show", "kitty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[readline] Movement"));
}

#[test]
fn test_user_dir_overrides_and_appends_sheets() {
    let tmp = tempfile::tempdir().unwrap();
    let user_dir = tmp.path().join("sheets");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("firefox.toml"),
        "id = \"firefox\"\ntitle = \"My Firefox\"\n",
    )
    .unwrap();
    std::fs::write(
        user_dir.join("obscure.toml"),
        "id = \"obscure\"\n\n[match]\nregex_wmclass = \"obscure\"\n\n[section.Keys]\n\"F1\" = \"Help\"\n",
    )
    .unwrap();

    hintsheet(tmp.path())
        .args(["--user-dir", user_dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("My Firefox"))
        .stdout(predicate::str::contains("obscure"));

    hintsheet(tmp.path())
        .args([
            "--user-dir",
            user_dir.to_str().unwrap(),
            "match",
            "--wm-class",
            "obscure",
        ])
        .assert()
        .success()
        .stdout("obscure\n");
}

#[test]
fn test_broken_include_is_a_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    let user_dir = tmp.path().join("sheets");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("broken.toml"),
        "id = \"broken\"\ninclude = [\"ghost\"]\n",
    )
    .unwrap();

    hintsheet(tmp.path())
        .args(["--user-dir", user_dir.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("ghost"))
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn test_malformed_user_file_does_not_block_startup() {
    let tmp = tempfile::tempdir().unwrap();
    let user_dir = tmp.path().join("sheets");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("bad.toml"), "id = [not toml").unwrap();

    hintsheet(tmp.path())
        .args(["--user-dir", user_dir.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firefox"));
}
