//! Integration tests for the `stitch` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project(pages: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("js")).unwrap();
    fs::write(src.join("js/index.js"), "console.log('hi');").unwrap();
    fs::write(src.join("favicon.ico"), [0u8; 4]).unwrap();
    for page in pages {
        fs::write(src.join(page), "<html><body></body></html>").unwrap();
    }
    dir
}

fn stitch(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stitch").unwrap();
    cmd.env_remove("PORT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--quiet")
        .current_dir(root);
    cmd
}

fn config_json(root: &Path, mode: &str) -> Value {
    let output = stitch(root)
        .args(["config", "--mode", mode])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn plugin_names(config: &Value) -> Vec<&str> {
    config["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["plugin"].as_str().unwrap())
        .collect()
}

#[test]
fn test_production_config_on_stdout() {
    let dir = project(&["index.html", "about.html"]);
    let config = config_json(dir.path(), "production");

    assert_eq!(config["mode"], "production");
    assert_eq!(config["output"]["filename"], "app.[contenthash].js");
    assert!(config.get("devServer").is_none());
    assert!(config.get("devtool").is_none());
    assert_eq!(config["optimization"]["minimize"], true);

    let names = plugin_names(&config);
    assert_eq!(names.iter().filter(|n| **n == "html-template").count(), 2);
    assert!(names.contains(&"clean-output"));
    assert!(names.contains(&"extract-css"));
}

#[test]
fn test_development_config_defaults() {
    let dir = project(&["index.html"]);
    let config = config_json(dir.path(), "development");

    assert_eq!(config["mode"], "development");
    assert_eq!(config["devtool"], "source-map");
    assert_eq!(config["output"]["filename"], "app.js");
    assert_eq!(config["devServer"]["port"], 8080);
    assert_eq!(config["devServer"]["historyApiFallback"], true);
    assert!(!plugin_names(&config).contains(&"clean-output"));
}

#[test]
fn test_port_from_environment() {
    let dir = project(&["index.html"]);
    let output = stitch(dir.path())
        .env("PORT", "4321")
        .args(["config", "--compact"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let config: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(config["devServer"]["port"], 4321);
}

#[test]
fn test_invalid_port_fails() {
    let dir = project(&["index.html"]);
    stitch(dir.path())
        .env("PORT", "not-a-port")
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid environment"));
}

#[test]
fn test_missing_templates_fails() {
    let dir = project(&[]);
    stitch(dir.path())
        .args(["config", "--mode", "production"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "the src directory requires at least one .html file",
        ));
}

#[test]
fn test_unknown_mode_rejected_by_parser() {
    let dir = project(&["index.html"]);
    stitch(dir.path())
        .args(["config", "--mode", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn test_root_flag_and_output_file() {
    let dir = project(&["index.html"]);
    let out = TempDir::new().unwrap();
    let target = out.path().join("bundler.json");

    stitch(out.path())
        .arg("config")
        .arg("--root")
        .arg(dir.path())
        .arg("--output")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let config: Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(config["mode"], "development");
    let entry = config["entry"]["app"].as_str().unwrap();
    assert!(entry.ends_with("index.js"), "{entry}");
}

#[test]
fn test_settings_file_changes_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("web/js")).unwrap();
    fs::write(dir.path().join("web/js/index.js"), "").unwrap();
    fs::write(dir.path().join("web/home.html"), "").unwrap();
    fs::write(
        dir.path().join("stitch.toml"),
        "src_dir = \"web\"\ndist_dir = \"public\"\n",
    )
    .unwrap();

    let config = config_json(dir.path(), "production");
    let path = config["output"]["path"].as_str().unwrap();
    assert!(path.ends_with("public"), "{path}");
    assert_eq!(config["plugins"][0]["options"]["filename"], "home.html");
}

#[test]
fn test_check_passes_on_complete_project() {
    let dir = project(&["index.html"]);
    Command::cargo_bin("stitch")
        .unwrap()
        .env_remove("PORT")
        .env("NO_COLOR", "1")
        .current_dir(dir.path())
        .args(["check", "--mode", "production"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_check_reports_missing_entry() {
    let dir = project(&["index.html"]);
    fs::remove_file(dir.path().join("src/js/index.js")).unwrap();

    stitch(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry path not found"));
}

#[test]
fn test_templates_lists_pages_sorted() {
    let dir = project(&["index.html", "about.html"]);
    fs::write(dir.path().join("src/notes.txt"), "").unwrap();

    stitch(dir.path())
        .arg("templates")
        .assert()
        .success()
        .stdout("about.html\nindex.html\n");
}

#[test]
fn test_missing_root_is_rejected() {
    let dir = TempDir::new().unwrap();
    stitch(dir.path())
        .args(["config", "--root", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_production_ignores_bad_port() {
    let dir = project(&["index.html"]);
    let output = stitch(dir.path())
        .env("PORT", "http")
        .args(["config", "--mode", "production"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let config: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(config.get("devServer").is_none());
}

#[test]
fn test_empty_port_uses_default() {
    let dir = project(&["index.html"]);
    let output = stitch(dir.path()).env("PORT", "").arg("config").output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let config: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["devServer"]["port"], 8080);
}

#[test]
fn test_missing_templates_reported_before_bad_port() {
    let dir = project(&[]);
    stitch(dir.path())
        .env("PORT", "http")
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires at least one .html file"))
        .stderr(predicate::str::contains("invalid environment").not());
}

#[test]
fn test_missing_templates_reported_before_bad_settings() {
    let dir = project(&[]);
    fs::write(dir.path().join("stitch.toml"), "assets = \"x\"\n").unwrap();

    stitch(dir.path())
        .args(["config", "--mode", "production"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires at least one .html file"));
}

#[test]
fn test_profile_output_directory() {
    let dir = project(&["index.html"]);
    fs::write(
        dir.path().join("stitch.toml"),
        "[profiles.production]\ndist_dir = \"build\"\n",
    )
    .unwrap();

    let config = config_json(dir.path(), "production");
    let path = config["output"]["path"].as_str().unwrap();
    assert!(path.ends_with("build"), "{path}");
}

#[test]
fn test_quiet_suppresses_status_output() {
    let dir = project(&["index.html"]);
    stitch(dir.path())
        .args(["check", "--mode", "production"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let target = dir.path().join("bundler.json");
    stitch(dir.path())
        .arg("config")
        .arg("--output")
        .arg(&target)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    assert!(target.exists());
}
