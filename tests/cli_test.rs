//! End-to-end checks for the `groundops-cli` binary.

use std::process::{Command, Output};

use serde_json::Value;

fn run_cli(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_groundops-cli");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run groundops-cli")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn parse_prints_breakdown_for_valid_command() {
    let output = run_cli(&["parse", "CHK15|BAG25|CLEAN10|PBB90"]);

    assert!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Check-in: 15 minutes"));
    assert!(stdout.contains("Jet-bridge angle: 90°"));
    assert!(stdout.contains("Result: valid"));
}

#[test]
fn parse_json_wraps_result_in_response_envelope() {
    let output = run_cli(&["--json", "parse", "CHK15|CHK20"]);

    assert_eq!(output.status.code(), Some(2));
    let body = stdout_json(&output);
    assert_eq!(body["data"]["isValid"], Value::Bool(false));
    assert_eq!(
        body["data"]["errors"][0],
        Value::from("Duplicate command types found: CHK")
    );
}

#[test]
fn validate_reports_invalid_with_exit_code_two() {
    let output = run_cli(&["validate", "PBB45"]);

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("invalid"));
}

#[test]
fn examples_lists_canonical_command_first() {
    let output = run_cli(&["--json", "examples"]);

    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body[0], Value::from("CHK15|BAG25|CLEAN10|PBB90"));
    assert_eq!(body.as_array().map(Vec::len), Some(5));
}

#[test]
fn help_describes_every_code() {
    let output = run_cli(&["help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for code in ["CHK", "BAG", "CLEAN", "PBB"] {
        assert!(stdout.contains(code), "missing {code} in help output");
    }
}

#[test]
fn submit_emits_trimmed_payload() {
    let output = run_cli(&["submit", "--flight-id", "FL123", "  CHK15|PBB180  "]);

    assert!(output.status.success(), "status: {:?}", output.status);
    let body = stdout_json(&output);
    assert_eq!(body["flightId"], Value::from("FL123"));
    assert_eq!(body["command"], Value::from("CHK15|PBB180"));
}

#[test]
fn submit_refuses_invalid_command() {
    let output = run_cli(&["--json", "submit", "--flight-id", "FL123", "FOO1"]);

    assert_eq!(output.status.code(), Some(2));
    let body = stdout_json(&output);
    assert_eq!(body["error"], Value::from("Validation error"));
    assert!(body["message"]
        .as_str()
        .is_some_and(|m| m.contains("Unknown command type: FOO")));
}
