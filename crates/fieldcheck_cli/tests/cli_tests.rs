use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the fieldcheck binary
#[allow(deprecated)]
fn fieldcheck() -> Command {
    Command::cargo_bin("fieldcheck").expect("Failed to find fieldcheck binary")
}

// ============================================================================
// demo command tests
// ============================================================================

#[test]
fn test_demo_null_value_fails() {
    fieldcheck()
        .arg("demo")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("VALIDATION REPORT"))
        .stdout(predicate::str::contains("Validation failed"))
        .stdout(predicate::str::contains("The pan field is required."))
        .stdout(predicate::str::contains(
            "The pan field is required when name is mehrab.",
        ));
}

#[test]
fn test_demo_persian_messages() {
    fieldcheck()
        .args(["demo", "--lang", "fa"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("فیلد pan الزامی است."));
}

#[test]
fn test_demo_json_output() {
    let output = fieldcheck()
        .args(["demo", "--value", "\"4111\"", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);

    let errors = json["errors"]["pan"].as_array().unwrap();
    assert!(!errors.is_empty());
    assert!(errors.iter().all(|e| e["rule"] != "required"));
    assert!(errors.iter().any(|e| e["rule"] == "email"));
    assert_eq!(json["summary"]["error_count"], errors.len());
}

#[test]
fn test_demo_static_hosts() {
    let output = fieldcheck()
        .args([
            "demo",
            "--value",
            "\"https://example.com\"",
            "--hosts",
            "example.com,example.org",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let errors = json["errors"]["pan"].as_array().unwrap();
    assert!(errors.iter().all(|e| e["rule"] != "active_url"));
    assert!(errors.iter().all(|e| e["rule"] != "url"));
    assert!(errors.iter().all(|e| e["rule"] != "starts_with"));
}

#[test]
fn test_demo_session_name() {
    let output = fieldcheck()
        .args(["demo", "--name", "someone", "--format", "json"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let errors = json["errors"]["pan"].as_array().unwrap();
    assert!(errors.iter().all(|e| e["rule"] != "required_if"));
    assert!(errors.iter().any(|e| e["rule"] == "required_unless"));
}

#[test]
fn test_demo_invalid_json_value() {
    fieldcheck()
        .args(["demo", "--value", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_demo_unknown_language() {
    fieldcheck()
        .args(["demo", "--lang", "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn test_demo_with_yaml_config() {
    fieldcheck()
        .args(["--config", &fixture_path("fieldcheck_fa.yml"), "demo"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("فیلد pan الزامی است."));
}

#[test]
fn test_demo_with_overlays() {
    fieldcheck()
        .args(["demo", "--config", &fixture_path("fieldcheck.toml")])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please provide the card number."));
}

#[test]
fn test_demo_custom_attribute() {
    fieldcheck()
        .args(["demo", "--attribute", "iban"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("The iban field is required."));
}

// ============================================================================
// lookup command tests
// ============================================================================

#[test]
fn test_lookup_error_template() {
    fieldcheck()
        .args(["lookup", "required"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The {attribute} field is required."));
}

#[test]
fn test_lookup_persian_template() {
    fieldcheck()
        .args(["lookup", "required", "--lang", "fa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("فیلد {attribute} الزامی است."));
}

#[test]
fn test_lookup_messages_section() {
    fieldcheck()
        .args(["lookup", "attributes.email", "--section", "messages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("email address"));
}

#[test]
fn test_lookup_info_section() {
    fieldcheck()
        .args(["lookup", "report_title", "-s", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VALIDATION REPORT"));
}

#[test]
fn test_lookup_falls_back_to_default_language() {
    fieldcheck()
        .args([
            "--config",
            &fixture_path("fieldcheck.toml"),
            "lookup",
            "iban",
            "--lang",
            "fa",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The {attribute} field must be a valid IBAN.",
        ));
}

#[test]
fn test_lookup_missing_key() {
    fieldcheck()
        .args(["lookup", "no_such_rule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_rule"));
}

#[test]
fn test_lookup_unknown_section() {
    fieldcheck()
        .args(["lookup", "required", "--section", "warnings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown catalog section"));
}

// ============================================================================
// coverage command tests
// ============================================================================

#[test]
fn test_coverage_builtin_catalog() {
    fieldcheck()
        .arg("coverage")
        .assert()
        .success()
        .stdout(predicate::str::contains("TRANSLATION COVERAGE"))
        .stdout(predicate::str::contains(
            "All errors keys are translated for 'fa'",
        ));
}

#[test]
fn test_coverage_reports_overlay_gaps() {
    fieldcheck()
        .args(["--config", &fixture_path("fieldcheck.toml"), "coverage"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 errors key(s) missing for 'fa'",
        ))
        .stdout(predicate::str::contains("iban"))
        .stdout(predicate::str::contains(
            "All messages keys are translated for 'fa'",
        ));
}

#[test]
fn test_coverage_json_output() {
    let output = fieldcheck()
        .args([
            "--config",
            &fixture_path("fieldcheck.toml"),
            "coverage",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["fa"]["errors"], serde_json::json!(["iban"]));
    assert_eq!(json["fa"]["messages"], serde_json::json!([]));
}

// ============================================================================
// configuration tests
// ============================================================================

#[test]
fn test_invalid_config_language() {
    fieldcheck()
        .args(["--config", &fixture_path("invalid_config.yml"), "coverage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_missing_overlay_file() {
    fieldcheck()
        .args(["--config", &fixture_path("missing_overlay.yml"), "coverage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog overlays"));
}

#[test]
fn test_missing_config_file() {
    fieldcheck()
        .args(["--config", "nonexistent.yml", "lookup", "required"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_config_from_temp_dir() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("fieldcheck.yaml");
    fs::write(
        &config,
        "language: en\ncatalog_overlays:\n  - language: en\n    path: lang/en.yml\n",
    )
    .unwrap();
    fs::create_dir(dir.path().join("lang")).unwrap();
    fs::write(
        dir.path().join("lang/en.yml"),
        "errors:\n  numeric: \"{attribute} needs digits\"\n",
    )
    .unwrap();

    fieldcheck()
        .args(["--config", config.to_str().unwrap(), "demo"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("pan needs digits"));
}

#[test]
fn test_zero_timeout_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("fieldcheck.toml");
    fs::write(&config, "capability_timeout_ms = 0\n").unwrap();

    fieldcheck()
        .args(["--config", config.to_str().unwrap(), "coverage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("capability_timeout_ms"));
}

// ============================================================================
// general CLI tests
// ============================================================================

#[test]
fn test_cli_help() {
    fieldcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("coverage"));
}

#[test]
fn test_cli_version() {
    fieldcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fieldcheck"));
}

#[test]
fn test_demo_help() {
    fieldcheck()
        .args(["demo", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--value"))
        .stdout(predicate::str::contains("--hosts"));
}
