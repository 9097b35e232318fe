//! End-to-end tests for the packcfg binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn packcfg() -> Command {
    let mut cmd = Command::cargo_bin("packcfg").unwrap();
    cmd.env_remove("PACKCFG_MODE")
        .env_remove("PACKCFG_DEV_HOST")
        .env_remove("PACKCFG_DEV_PORT")
        .env_remove("PACKCFG_DEV_OPEN")
        .env("NO_COLOR", "1");
    cmd
}

fn scaffold() -> TempDir {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("index.js"), "document.title = 'hello';\n").unwrap();
    fs::write(src.join("index.html"), "<!doctype html><body></body>\n").unwrap();
    dir
}

fn print_json(dir: &Path, extra: &[&str]) -> Value {
    let output = packcfg()
        .arg("print")
        .arg("--dir")
        .arg(dir)
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn print_emits_record_for_project_dir() {
    let dir = scaffold();
    let json = print_json(dir.path(), &[]);

    let dist = dir.path().join("dist");
    assert_eq!(json["mode"], "development");
    assert_eq!(json["entry"], dir.path().join("src").join("index.js").to_str().unwrap());
    assert_eq!(json["output"]["path"], dist.to_str().unwrap());
    assert_eq!(json["output"]["filename"], "main.js");
    assert_eq!(json["plugins"][0]["kind"], "html");
    assert_eq!(
        json["plugins"][0]["template"],
        dir.path().join("src").join("index.html").to_str().unwrap()
    );
    assert_eq!(json["devServer"]["static"]["directory"], json["output"]["path"]);
}

#[test]
fn print_mode_flag_overrides_settings() {
    let dir = scaffold();
    fs::write(dir.path().join("packcfg.toml"), "mode = \"development\"\n").unwrap();

    let json = print_json(dir.path(), &["--mode", "production"]);
    assert_eq!(json["mode"], "production");
}

#[test]
fn print_applies_profile() {
    let dir = scaffold();
    fs::write(
        dir.path().join("packcfg.toml"),
        "[profiles.preview.dev]\nport = 5000\nopen = true\n",
    )
    .unwrap();

    let json = print_json(dir.path(), &["--profile", "preview"]);
    assert_eq!(json["devServer"]["port"], 5000);
    assert_eq!(json["devServer"]["open"], true);
}

#[test]
fn print_compact_is_single_line() {
    let dir = scaffold();
    packcfg()
        .args(["print", "--compact", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\{.*\}\n$").unwrap());
}

#[test]
fn print_fails_for_missing_directory() {
    let dir = TempDir::new().unwrap();
    packcfg()
        .args(["print", "--dir"])
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("configuration directory not found"));
}

#[test]
fn check_passes_for_complete_project() {
    let dir = scaffold();
    packcfg()
        .args(["check", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("All checks passed!"));
}

#[test]
fn quiet_check_is_silent_on_success() {
    let dir = scaffold();
    packcfg()
        .args(["-q", "check", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn quiet_check_still_reports_errors() {
    let dir = scaffold();
    fs::remove_file(dir.path().join("src").join("index.js")).unwrap();

    packcfg()
        .args(["--quiet", "check", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry script not found"));
}

#[test]
fn no_color_env_keeps_logs_plain() {
    let dir = scaffold();
    packcfg()
        .args(["-v", "print", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn check_reports_missing_template() {
    let dir = scaffold();
    fs::remove_file(dir.path().join("src").join("index.html")).unwrap();

    packcfg()
        .args(["check", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTML template not found"));
}

#[test]
fn check_skip_fs_ignores_missing_files() {
    let dir = TempDir::new().unwrap();
    packcfg()
        .args(["check", "--skip-fs", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping filesystem checks"));
}

#[test]
fn unknown_profile_fails() {
    let dir = scaffold();
    packcfg()
        .args(["print", "--profile", "nope", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile 'nope' is not defined"));
}

#[test]
fn invalid_mode_in_settings_is_reported_as_mode_error() {
    let dir = scaffold();
    fs::write(dir.path().join("packcfg.toml"), "mode = \"fast\"\n").unwrap();

    packcfg()
        .args(["print", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid mode 'fast'"))
        .stderr(predicate::str::contains("Valid modes are"));
}
