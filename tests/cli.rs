//! CLI binary tests: exit codes, stderr messaging, artifact handling.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn tstriage() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tstriage"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_missing_log_exits_2_and_leaves_no_artifact() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("typescript-errors.log");
    let out = dir.path().join("typescript_errors_analysis.json");

    let res = tstriage()
        .arg("--log")
        .arg(&log)
        .arg("--json-out")
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(res.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&res.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("Log file not found"), "stderr: {stderr}");
    assert!(!out.exists(), "no artifact may be written on fatal input");
}

#[test]
fn test_run_end_to_end_writes_report_and_artifact() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("typescript-errors.log");
    let out = dir.path().join("typescript_errors_analysis.json");
    fs::write(
        &log,
        "\
src/api/auth.ts(10,5): error TS2339: Property 'mfaRequired' does not exist on type 'LoginResponse'.
src/screens/Login.tsx(22,7): error TS2304: Cannot find name 'useAuth'.
",
    )
    .unwrap();

    let res = tstriage()
        .arg("--log")
        .arg(&log)
        .arg("--json-out")
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(res.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&res.stdout);
    assert!(stdout.contains("# TypeScript Error Analysis Report"));
    assert!(stdout.contains("Total Errors: 2"));
    assert!(stdout.contains("Quick Stats for Visualization:"));
    assert!(stdout.contains("- Backend Errors: 1 (50.0%)"));
    assert!(stdout.contains("- Frontend Errors: 1 (50.0%)"));

    let back: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(back["summary"]["total_errors"], 2);
}

#[test]
fn test_zero_matches_notes_and_exits_0() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("typescript-errors.log");
    let out = dir.path().join("typescript_errors_analysis.json");
    fs::write(&log, "Starting type check...\nFound 0 errors.\n").unwrap();

    let res = tstriage()
        .arg("--log")
        .arg(&log)
        .arg("--json-out")
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(res.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&res.stderr);
    assert!(stderr.contains("note:"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&res.stdout);
    assert!(stdout.contains("Total Errors: 0"));
    assert!(stdout.contains("(0.0%)"));
    assert!(out.exists());
}
