use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PRICES: &str = "timestamp,close\n2024-01-01,1\n2024-01-02,2\n2024-01-03,3\n2024-01-04,4\n2024-01-05,5\n";

fn rollsig(dir: &Path, window: usize) -> Output {
    fs::write(dir.join("data.csv"), PRICES).unwrap();
    fs::write(
        dir.join("config.yaml"),
        format!("seed: 42\nwindow: {window}\nversion: v1\n"),
    )
    .unwrap();

    Command::new(env!("CARGO_BIN_EXE_rollsig"))
        .arg("--input")
        .arg(dir.join("data.csv"))
        .arg("--config")
        .arg(dir.join("config.yaml"))
        .arg("--output")
        .arg(dir.join("metrics.json"))
        .arg("--log-file")
        .arg(dir.join("run.log"))
        .env_remove("RUST_LOG")
        .env_remove("ROLLSIG_CONFIG")
        .output()
        .unwrap()
}

#[test]
fn successful_run_exits_zero_and_logs() {
    let dir = TempDir::new().unwrap();

    let output = rollsig(dir.path(), 3);

    assert!(output.status.success());
    let metrics: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("metrics.json")).unwrap()).unwrap();
    assert_eq!(metrics["status"], "success");
    assert_eq!(metrics["value"], 1.0);

    let log = fs::read_to_string(dir.path().join("run.log")).unwrap();
    assert!(log.contains("Job started"));
    assert!(log.contains("Rows loaded"));
    assert!(log.contains("Job completed successfully"));
    assert!(!log.contains("\u{1b}["), "log file must not contain ANSI escapes");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"metric\": \"signal_rate\""));
}

#[test]
fn invalid_window_exits_non_zero_without_metrics() {
    let dir = TempDir::new().unwrap();

    let output = rollsig(dir.path(), 9);

    assert_eq!(output.status.code(), Some(4));
    assert!(!dir.path().join("metrics.json").exists());

    let log = fs::read_to_string(dir.path().join("run.log")).unwrap();
    assert!(log.contains("Job failed"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"status\": \"error\""));
}

#[test]
fn missing_config_exits_with_config_code() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rollsig"))
        .arg("--config")
        .arg(dir.path().join("absent.yaml"))
        .arg("--log-file")
        .arg(dir.path().join("run.log"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"version\": \"unknown\""));
}

#[test]
fn log_file_is_appended_across_runs() {
    let dir = TempDir::new().unwrap();

    assert!(rollsig(dir.path(), 3).status.success());
    assert!(rollsig(dir.path(), 3).status.success());

    let log = fs::read_to_string(dir.path().join("run.log")).unwrap();
    assert_eq!(log.matches("Job started").count(), 2);
}

#[test]
fn unusable_log_file_reports_error_record() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yaml"), "seed: 42\nwindow: 3\nversion: v1\n").unwrap();

    // A directory cannot be opened for appending.
    let output = Command::new(env!("CARGO_BIN_EXE_rollsig"))
        .arg("--config")
        .arg(dir.path().join("config.yaml"))
        .arg("--log-file")
        .arg(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["status"], "error");
    assert_eq!(record["version"], "v1");
    assert!(record["error_message"]
        .as_str()
        .unwrap()
        .contains("Failed to open log file"));
}
