use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CREDENTIAL_VARS: [&str; 3] = [
    "LINE_CHANNEL_ACCESS_TOKEN",
    "LINE_CHANNEL_SECRET",
    "LINE_USER_ID",
];

fn greedwatch(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("greedwatch").expect("binary built");
    cmd.current_dir(dir.path()).env_remove("PORT");
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    greedwatch(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("index"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_config_fails_without_credentials() {
    let dir = TempDir::new().unwrap();
    greedwatch(&dir)
        .args(["check", "config"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Config file not found"))
        .stderr(predicate::str::contains("LINE_CHANNEL_ACCESS_TOKEN"));
}

#[test]
fn check_config_passes_with_credentials() {
    let dir = TempDir::new().unwrap();
    greedwatch(&dir)
        .args(["check", "config"])
        .env("LINE_CHANNEL_ACCESS_TOKEN", "token")
        .env("LINE_CHANNEL_SECRET", "secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:5000"))
        .stdout(predicate::str::contains("No push recipient preset"))
        .stdout(predicate::str::contains("Configuration is ready to use."));
}

#[test]
fn check_config_reports_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bot.toml");
    fs::write(&path, "[schedule]\nutc_offset_hours = 99\n").unwrap();

    greedwatch(&dir)
        .args(["check", "config", "--config"])
        .arg(&path)
        .env("LINE_CHANNEL_ACCESS_TOKEN", "token")
        .env("LINE_CHANNEL_SECRET", "secret")
        .assert()
        .failure()
        .stderr(predicate::str::contains("schedule.utc_offset_hours"));
}

#[test]
fn invalid_port_env_is_reported() {
    let dir = TempDir::new().unwrap();
    greedwatch(&dir)
        .args(["check", "config"])
        .env("PORT", "eighty")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PORT"));
}
