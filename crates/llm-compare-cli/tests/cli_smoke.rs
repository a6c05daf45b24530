//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `llm-compare` binary to verify that
//! argument parsing, help text, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

const CSV: &str = "\
Model Name,Model Type,Text Generation,Code Generation,Image Generation,Image Understanding,Research/Citation,Function Calling,Python SDK,Java SDK,TypeScript SDK,Context Window Size
Alpha,Commercial,Yes,Yes,No,Limited,No,Yes,Yes,Limited,Yes,128K
Beta,Open Source,Yes,Limited,No,No,No,No,Yes,No,No,1M
";

fn cmd() -> Command {
    Command::cargo_bin("llm-compare").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help_with_usage_guide() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Usage instructions"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("llm-compare"));
}

#[test]
fn config_prints_default_template() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output_prefix\": \"llm_comparison\""))
        .stdout(predicate::str::contains("\"unknown_ratings\""));
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_requires_input() {
    cmd().arg("generate").assert().failure();
}

#[test]
fn generate_nonexistent_input_errors() {
    cmd()
        .args(["generate", "/nonexistent/models.csv", "-f", "json"])
        .assert()
        .failure();
}

#[test]
fn generate_rejects_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("models.csv");
    std::fs::write(&input, CSV).unwrap();

    cmd()
        .args(["generate", input.to_str().unwrap(), "-f", "gif"])
        .assert()
        .failure();
}

#[test]
fn generate_json_writes_files_and_confirms_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("models.csv");
    std::fs::write(&input, CSV).unwrap();
    let prefix = dir.path().join("course_2025_q2");
    let prefix = prefix.to_str().unwrap();

    cmd()
        .args(["generate", input.to_str().unwrap(), "-o", prefix, "-f", "json", "--report"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Generated visualizations with prefix: {}",
            prefix
        )));

    for suffix in ["_capabilities.json", "_context_window.json", "_sdk_support.json", "_report.html"] {
        assert!(std::path::Path::new(&format!("{}{}", prefix, suffix)).exists());
    }
}

#[test]
fn generate_with_unknown_rating_needs_allow_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("models.csv");
    std::fs::write(&input, CSV.replace("Yes,128K", "Beta,128K")).unwrap();
    let prefix = dir.path().join("run");
    let prefix = prefix.to_str().unwrap();

    cmd()
        .args(["generate", input.to_str().unwrap(), "-o", prefix, "-f", "json"])
        .assert()
        .failure();

    cmd()
        .args(["generate", input.to_str().unwrap(), "-o", prefix, "-f", "json", "--allow-unknown"])
        .assert()
        .success();
}

#[test]
fn generate_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("models.csv");
    std::fs::write(&input, CSV).unwrap();
    let prefix = dir.path().join("from_config");
    let config = dir.path().join("config.json");
    std::fs::write(
        &config,
        format!(
            r#"{{ "output_prefix": {}, "format": "html" }}"#,
            serde_json::to_string(prefix.to_str().unwrap()).unwrap()
        ),
    )
    .unwrap();

    cmd()
        .args(["generate", input.to_str().unwrap(), "-c", config.to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("from_config_capabilities.html").exists());
}

#[test]
fn generate_bad_config_logs_error_and_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("models.csv");
    std::fs::write(&input, CSV).unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, "not json").unwrap();

    cmd()
        .args(["generate", input.to_str().unwrap(), "-c", config.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Generation failed"))
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn generate_missing_config_logs_error_and_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("models.csv");
    std::fs::write(&input, CSV).unwrap();

    cmd()
        .args(["generate", input.to_str().unwrap(), "-c", "/nonexistent/config.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Generation failed"));
}
