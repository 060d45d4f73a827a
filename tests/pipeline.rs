//! Library-surface tests: parse → analyze → render/export over one log.

use std::fs;
use tempfile::TempDir;
use tstriage::{analyze::analyze, output, parse::parse_log, report};

const LOG: &str = "\
Starting type check...

src/api/auth.ts(10,5): error TS2339: Property 'mfaRequired' does not exist on type 'LoginResponse'.
src/components/Button/Button.tsx(3,1): error TS9999: something else
src/screens/Login.tsx(22,7): error TS2304: Cannot find name 'useAuth'.
Found 3 errors in 3 files.
";

#[test]
fn test_parse_analyze_render_export() {
    let diagnostics = parse_log(LOG);
    assert_eq!(diagnostics.len(), 3);

    let analysis = analyze(&diagnostics);
    assert_eq!(analysis.backend, 1);
    assert_eq!(analysis.frontend, 2);

    let rendered = report::render(&analysis);
    assert!(rendered.contains("Total Errors: 3"));
    assert!(rendered.contains("- 'mfaRequired': 1 occurrences"));

    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("typescript_errors_analysis.json");
    output::write_export(&out_path, &analysis).unwrap();
    let back: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(back["summary"]["total_errors"], 3);
    assert_eq!(back["by_screen"]["Component:Button"], 1);
    assert_eq!(back["missing_properties"][0]["property"], "mfaRequired");
}

#[test]
fn test_write_export_overwrites_previous_artifact() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("typescript_errors_analysis.json");
    fs::write(&out_path, "{\"stale\": true}").unwrap();

    let analysis = analyze(&parse_log(""));
    output::write_export(&out_path, &analysis).unwrap();

    let back: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert!(back.get("stale").is_none());
    assert_eq!(back["summary"]["total_errors"], 0);
}

#[test]
fn test_empty_log_renders_without_division_error() {
    let analysis = analyze(&parse_log("no diagnostics here\n"));
    let rendered = report::render(&analysis);
    assert!(rendered.contains("Total Errors: 0"));
    assert!(rendered.contains("(0.0%)"));
}
