//! Integration tests for CLI infrastructure

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use std::process::Command;
use texforge_testkit::{temp_dir_in_workspace, write_fixture};

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(cargo_bin!("texforge"));
    let assert = cmd.arg("--version").assert();

    assert
        .success()
        .stdout(predicate::str::contains("texforge"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(cargo_bin!("texforge"));
    let assert = cmd.arg("--help").assert();

    assert
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_cli_invalid_config_fails() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_fixture(root, "texforge.toml", "[render\nbroken");
    let template = write_fixture(root, "doc.txt", "plain");

    Command::new(cargo_bin!("texforge"))
        .current_dir(root)
        .arg("detect")
        .arg(&template)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_INVALID"));
}

#[test]
fn test_cli_detect_tags() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();

    let cases = [
        ("a.tex", "\\documentclass{article}", "latex"),
        ("b.tex", "\\documentclass{beamer}", "beamer"),
        ("c.md", "# Notes", "markdown"),
        ("d.html", "<!DOCTYPE html>", "html"),
        ("e.txt", "nothing special", "plain"),
    ];

    for (name, content, tag) in cases {
        let file = write_fixture(root, name, content);
        Command::new(cargo_bin!("texforge"))
            .current_dir(root)
            .arg("detect")
            .arg(&file)
            .assert()
            .success()
            .stdout(format!("{tag}\n"));
    }
}

#[test]
fn test_cli_detect_json() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let file = write_fixture(root, "talk.tex", "\\documentclass[11pt]{beamer}");

    let output = Command::new(cargo_bin!("texforge"))
        .current_dir(root)
        .args(["detect", "--json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["tag"], "beamer");
    assert_eq!(info["extension"], "tex");
    assert_eq!(info["latex"], true);
}
