//! End-to-end tests for the gempin CLI
//!
//! These tests verify:
//! - The Gemfile is rewritten with exact pins
//! - Dry-run mode leaves files unchanged
//! - CLI produces the JSON report schema
//! - Exit codes for success and I/O failures
//!
//! A stub `gem` script stands in for the registry.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const GEMFILE: &str = r#"source "https://rubygems.org"

gem "rails", "~> 7.0.8"
gem 'rack', '~> 2.2', require: false
gem "puma"
"#;

const LOCKFILE: &str = r#"GEM
  remote: https://rubygems.org/
  specs:
    puma (6.4.0)
      nio4r (~> 2.0)
    nio4r (2.5.9)
    rack (2.2.7)
    rails (7.0.8)

PLATFORMS
  ruby

DEPENDENCIES
  puma
  rack (~> 2.2)
  rails (~> 7.0.8)
"#;

const STUB_GEM: &str = r#"#!/bin/sh
cat <<'OUT'

*** REMOTE GEMS ***

puma (6.4.0, 6.3.1)
rack (3.0.8, 2.2.8, 2.2.7)
rails (7.1.0, 7.0.9, 7.0.8)
OUT
"#;

const FAILING_GEM: &str = r#"#!/bin/sh
echo "ERROR:  Could not find a valid gem" >&2
exit 2
"#;

/// Create a project directory with a Gemfile, lockfile and stub gem command
fn create_test_project() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("Gemfile"), GEMFILE).unwrap();
    fs::write(temp_dir.path().join("Gemfile.lock"), LOCKFILE).unwrap();
    write_script(temp_dir.path(), "gem", STUB_GEM);
    write_script(temp_dir.path(), "failing-gem", FAILING_GEM);
    temp_dir
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// gempin invocation running inside `dir` with the stub gem command
fn gempin(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gempin").unwrap();
    cmd.current_dir(dir)
        .arg("--gem-command")
        .arg(dir.join("gem"));
    cmd
}

fn read_gemfile(dir: &Path) -> String {
    fs::read_to_string(dir.join("Gemfile")).unwrap()
}

mod pinning {
    use super::*;

    #[test]
    fn test_patch_pins_all_gems() {
        let dir = create_test_project();

        gempin(dir.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Updating \"rack\" from 2.2.7 to 2.2.8"))
            .stderr(predicate::str::contains("Updating \"rails\" from 7.0.8 to 7.0.9"))
            .stderr(predicate::str::contains(
                "No newer patch versions found for \"puma\"",
            ))
            .stderr(predicate::str::contains(
                "You may want to run: \"bundle update rack rails\"",
            ));

        let content = read_gemfile(dir.path());
        assert!(content.contains("gem \"rails\", \"7.0.9\"\n"));
        assert!(content.contains("gem 'rack', '2.2.8', require: false\n"));
        assert!(content.contains("gem \"puma\"\n"));
    }

    #[test]
    fn test_single_gem_with_minor_policy() {
        let dir = create_test_project();

        gempin(dir.path())
            .args(["rails", "--policy", "minor"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Updating \"rails\" from 7.0.8 to 7.1.0"))
            .stderr(predicate::str::contains("rack").not());

        let content = read_gemfile(dir.path());
        assert!(content.contains("gem \"rails\", \"7.1.0\"\n"));
        assert!(content.contains("gem 'rack', '~> 2.2', require: false\n"));
    }

    #[test]
    fn test_no_updates_leaves_gemfile_unchanged() {
        let dir = create_test_project();

        gempin(dir.path())
            .arg("puma")
            .assert()
            .success()
            .stderr(predicate::str::contains("Done"))
            .stderr(predicate::str::contains("bundle update").not());

        assert_eq!(read_gemfile(dir.path()), GEMFILE);
    }

    #[test]
    fn test_explicit_paths() {
        let dir = create_test_project();
        let app = dir.path().join("app");
        fs::create_dir(&app).unwrap();
        fs::rename(dir.path().join("Gemfile"), app.join("Gemfile")).unwrap();
        fs::rename(dir.path().join("Gemfile.lock"), app.join("deps.lock")).unwrap();

        gempin(dir.path())
            .args(["--gemfile", "app/Gemfile", "--lockfile", "app/deps.lock"])
            .assert()
            .success();

        assert!(read_gemfile(&app).contains("gem \"rails\", \"7.0.9\"\n"));
    }
}

mod dry_run {
    use super::*;

    #[test]
    fn test_dry_run_leaves_files_unchanged() {
        let dir = create_test_project();

        gempin(dir.path())
            .args(["--dry-run", "--policy", "available"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Updating \"rack\" from 2.2.7 to 3.0.8"));

        assert_eq!(read_gemfile(dir.path()), GEMFILE);
    }

    #[test]
    fn test_dry_run_with_quiet_mode() {
        let dir = create_test_project();

        gempin(dir.path())
            .args(["-n", "-q"])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());

        assert_eq!(read_gemfile(dir.path()), GEMFILE);
    }
}

mod json_output {
    use super::*;

    #[test]
    fn test_json_output_schema() {
        let dir = create_test_project();

        let output = gempin(dir.path())
            .args(["--json", "-q"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["policy"], "patch");
        assert_eq!(json["dry_run"], false);
        assert_eq!(json["written"], true);

        let updates = json["updates"].as_array().unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0]["name"], "rack");
        assert_eq!(updates[0]["from"], "2.2.7");
        assert_eq!(updates[0]["to"], "2.2.8");

        let unchanged = json["unchanged"].as_array().unwrap();
        assert_eq!(unchanged.len(), 1);
        assert_eq!(unchanged[0]["name"], "puma");
        assert_eq!(unchanged[0]["current"], "6.4.0");
    }

    #[test]
    fn test_json_dry_run_is_not_written() {
        let dir = create_test_project();

        let output = gempin(dir.path())
            .args(["--json", "--dry-run"])
            .output()
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["written"], false);
        assert_eq!(json["updates"].as_array().unwrap().len(), 2);
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn test_exit_code_version() {
        Command::cargo_bin("gempin")
            .unwrap()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("gempin"));
    }

    #[test]
    fn test_exit_code_help() {
        Command::cargo_bin("gempin")
            .unwrap()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--policy"));
    }

    #[test]
    fn test_invalid_policy() {
        let dir = create_test_project();

        gempin(dir.path())
            .args(["--policy", "major"])
            .assert()
            .failure();
    }

    #[test]
    fn test_missing_lockfile() {
        let dir = create_test_project();
        fs::remove_file(dir.path().join("Gemfile.lock")).unwrap();

        gempin(dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("bundle install"));
    }

    #[test]
    fn test_missing_gemfile() {
        let dir = create_test_project();
        fs::remove_file(dir.path().join("Gemfile")).unwrap();

        gempin(dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_failing_gem_command_is_not_fatal() {
        let dir = create_test_project();

        Command::cargo_bin("gempin")
            .unwrap()
            .current_dir(dir.path())
            .arg("--gem-command")
            .arg(dir.path().join("failing-gem"))
            .arg("--verbose")
            .assert()
            .success()
            .stderr(predicate::str::contains("exited with status 2"))
            .stderr(predicate::str::contains(
                "No newer patch versions found for \"rails\"",
            ));

        assert_eq!(read_gemfile(dir.path()), GEMFILE);
    }

    #[test]
    fn test_missing_gem_command_is_not_fatal() {
        let dir = create_test_project();

        Command::cargo_bin("gempin")
            .unwrap()
            .current_dir(dir.path())
            .args(["rack", "--gem-command", "/nonexistent/gem"])
            .assert()
            .success()
            .stderr(predicate::str::contains("No newer patch versions found for \"rack\""));
    }
}
