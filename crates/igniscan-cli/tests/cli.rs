//! Binary smoke tests: argument handling, exit codes, and the
//! reject-before-inference contract for unknown profiles.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const CONFIG: &str = r#"
backend:
  project: test-project
  location: us-central1
  model: gemini-1.5-flash-001
corpus:
  video_uri: gs://bucket/manual.mp4
  document_uri: gs://bucket/spec.pdf
  image_uri_template: gs://bucket/ref_{n}.jpeg
  image_count: 3
"#;

fn write_config(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("igniscan.yaml");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(CONFIG.as_bytes()).unwrap();
    path
}

#[test]
fn profiles_lists_the_three_builtins() {
    Command::cargo_bin("igniscan")
        .unwrap()
        .arg("profiles")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("lenient")
                .and(predicate::str::contains("strict"))
                .and(predicate::str::contains("focused")),
        );
}

#[test]
fn corpus_prints_handles_in_catalog_order() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_config(tmp.path());
    Command::cargo_bin("igniscan")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "corpus"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("video")
                .and(predicate::str::contains("document"))
                .and(predicate::str::contains("reference_image_3")),
        );
}

#[test]
fn unknown_profile_is_rejected_before_any_backend_work() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_config(tmp.path());
    // No access token in the environment: the profile check must fire first.
    Command::cargo_bin("igniscan")
        .unwrap()
        .env_remove("IGNISCAN_ACCESS_TOKEN")
        .args([
            "--config",
            config.to_str().unwrap(),
            "inspect",
            "gs://uploads/probe.jpg",
            "--profile",
            "ultra-strict",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown severity profile"));
}

#[test]
fn missing_config_file_is_a_config_error() {
    Command::cargo_bin("igniscan")
        .unwrap()
        .args(["--config", "nope.yaml", "inspect", "gs://uploads/probe.jpg"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read config"));
}
