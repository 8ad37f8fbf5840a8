//! Basic CLI E2E tests.
//!
//! Tests invoke read-only CLI commands via cargo run against the dev data
//! directory and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "liftlog-cli", "--"])
        .args(args)
        .env("LIFTLOG_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_plan_show() {
    let (stdout, _, code) = run_cli(&["plan", "show"]);
    assert_eq!(code, 0, "plan show failed");
    assert!(stdout.contains("Monday"));
    assert!(stdout.contains("Barbell Bench Press"));
}

#[test]
fn test_plan_show_json_has_five_days() {
    let (stdout, _, code) = run_cli(&["plan", "show", "--json"]);
    assert_eq!(code, 0, "plan show --json failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let days = parsed.as_array().expect("expected a JSON array");
    assert_eq!(days.len(), 5);
}

#[test]
fn test_plan_show_single_day() {
    let (stdout, _, code) = run_cli(&["plan", "show", "--day", "wed", "--json"]);
    assert_eq!(code, 0, "plan show --day failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let days = parsed.as_array().expect("expected a JSON array");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["day"], "wednesday");
}

#[test]
fn test_plan_show_rejects_weekend_day() {
    let (_, stderr, code) = run_cli(&["plan", "show", "--day", "sunday"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown training day"));
}

#[test]
fn test_config_list_is_json() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert!(parsed.get("fitness_level").is_some());
    assert!(parsed.get("dark_mode").is_some());
}

#[test]
fn test_stats_summary_json_shape() {
    let (stdout, _, code) = run_cli(&["stats", "summary", "--json"]);
    assert_eq!(code, 0, "stats summary failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert!(parsed.get("weekly_completion").is_some());
    assert!(parsed.get("current_streak_days").is_some());
    assert_eq!(
        parsed["per_day_completion"]
            .as_array()
            .expect("expected array")
            .len(),
        5
    );
}

#[test]
fn test_log_rejects_unknown_exercise() {
    let (_, stderr, code) = run_cli(&["log", "show", "Underwater Basket Press"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown exercise"));
}
