//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("moviectl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("moviectl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--cors-permissive"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let home = std::env::temp_dir().join("moviectl-smoke-no-config");
    let mut cmd = Command::cargo_bin("moviectl").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env("HOME", &home)
        .current_dir(std::env::temp_dir())
        .arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_config_path() {
    let mut cmd = Command::cargo_bin("moviectl").unwrap();
    cmd.arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".moviectl/config.toml"));
}

#[test]
fn test_config_show_masks_password() {
    let home = std::env::temp_dir().join("moviectl-smoke-show");
    let mut cmd = Command::cargo_bin("moviectl").unwrap();
    cmd.env("HOME", &home)
        .env("DATABASE_URL", "postgres://app:s3cret@db/movies")
        .current_dir(std::env::temp_dir())
        .arg("config")
        .arg("show");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("app:****@db"))
        .stdout(predicate::str::contains("s3cret").not());
}
