//! Integration tests for the vplay CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use crate::helpers::fixture;

/// vplay with config, state and cache directories inside `home`.
fn vplay(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vplay").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_STATE_HOME", home.path().join("state"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env_remove("VPLAY_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    vplay(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("subs"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_package_version() {
    let home = TempDir::new().unwrap();
    vplay(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Subs Command Tests
// ============================================================================

#[test]
fn subs_lists_cues() {
    let home = TempDir::new().unwrap();
    vplay(&home)
        .arg("subs")
        .arg(fixture("two_cues.srt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, world."))
        .stdout(predicate::str::contains("Second cue / on two lines."))
        .stdout(predicate::str::contains("2 cues"));
}

#[test]
fn subs_at_prints_active_lines() {
    let home = TempDir::new().unwrap();
    vplay(&home)
        .arg("subs")
        .arg(fixture("two_cues.srt"))
        .args(["--at", "00:00:06"])
        .assert()
        .success()
        .stdout("Second cue\non two lines.\n");
}

#[test]
fn subs_at_respects_delay() {
    let home = TempDir::new().unwrap();
    vplay(&home)
        .arg("subs")
        .arg(fixture("two_cues.srt"))
        .args(["--at", "1.5", "--delay", "1"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn subs_json_is_parseable() {
    let home = TempDir::new().unwrap();
    let output = vplay(&home)
        .arg("subs")
        .arg(fixture("corrupt.srt"))
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let cues: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cues = cues.as_array().unwrap();
    assert_eq!(cues.len(), 2);
    assert_eq!(cues[1]["index"], "3");
    assert_eq!(cues[1]["start"], 3.0);
}

#[test]
fn subs_rejects_wrong_extension() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("notes.txt");
    fs::write(&path, "1\n00:00:01,000 --> 00:00:02,000\nHi\n").unwrap();

    vplay(&home)
        .arg("subs")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not an .srt file"));
}

#[test]
fn subs_rejects_bad_time() {
    let home = TempDir::new().unwrap();
    vplay(&home)
        .arg("subs")
        .arg(fixture("two_cues.srt"))
        .args(["--at", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time"));
}

// ============================================================================
// Play Command Tests
// ============================================================================

#[test]
fn play_without_duration_or_subtitles_fails() {
    let home = TempDir::new().unwrap();
    vplay(&home)
        .args(["play", "movie.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--duration is required"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn config_init_then_show_round_trips() {
    let home = TempDir::new().unwrap();

    vplay(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    vplay(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[timing]"))
        .stdout(predicate::str::contains("ping_ms = 1000"));
}

#[test]
fn broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    let output = vplay(&home).args(["config", "path"]).output().unwrap();
    let path = std::path::PathBuf::from(String::from_utf8(output.stdout).unwrap().trim());
    assert!(path.starts_with(home.path()));

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[player\n").unwrap();

    vplay(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    vplay(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vplay"));
}
