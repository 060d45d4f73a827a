//! JSON export composition and stdout printing.
//!
//! `compose_export` is pure so tests can assert on the document shape;
//! the write and the quick-stats trailer are the only I/O.

use crate::analyze::{Analysis, TOP_MISSING_PROPS};
use owo_colors::OwoColorize;
use serde_json::{json, Map, Value as JsonVal};
use std::io;
use std::path::Path;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn tally_map(entries: impl Iterator<Item = (String, usize)>) -> JsonVal {
    let mut map = Map::new();
    for (k, c) in entries {
        map.insert(k, json!(c));
    }
    JsonVal::Object(map)
}

/// Compose the visualization JSON document (pure) for writing/snapshot
/// purposes. Map keys keep first-encounter order.
pub fn compose_export(analysis: &Analysis) -> JsonVal {
    let top_5_screens: Vec<JsonVal> = analysis
        .top_5_screens
        .iter()
        .map(|(screen, count)| json!({"screen": screen, "count": count}))
        .collect();
    let common_patterns: Vec<JsonVal> = analysis
        .most_common_patterns
        .iter()
        .map(|(pattern, count)| json!({"pattern": pattern, "count": count}))
        .collect();
    let missing: Vec<JsonVal> = analysis
        .common_missing_properties
        .iter()
        .take(TOP_MISSING_PROPS)
        .map(|p| serde_json::to_value(p).expect("missing-property serializes"))
        .collect();

    json!({
        "summary": {
            "total_errors": analysis.total_errors,
            "backend_errors": analysis.backend,
            "frontend_errors": analysis.frontend,
        },
        "by_category": tally_map(analysis.by_category.iter().map(|(k, c)| (k.to_string(), c))),
        "by_screen": tally_map(analysis.by_screen.iter().map(|(k, c)| (k.to_string(), c))),
        "top_5_screens": top_5_screens,
        "error_distribution": [
            {"type": "Backend", "count": analysis.backend},
            {"type": "Frontend", "count": analysis.frontend},
        ],
        "common_patterns": common_patterns,
        "missing_properties": missing,
    })
}

/// Write the export document, pretty-printed, overwriting any previous
/// artifact at `path`.
pub fn write_export(path: &Path, analysis: &Analysis) -> io::Result<()> {
    let doc = compose_export(analysis);
    let mut text = serde_json::to_string_pretty(&doc).expect("export serializes");
    text.push('\n');
    std::fs::write(path, text)
}

/// Print the saved-file note and the three quick-stat lines.
pub fn print_quick_stats(analysis: &Analysis, export_path: &Path) {
    let color = use_colors();
    let saved = format!("JSON data saved to {}", export_path.to_string_lossy());
    if color {
        println!("\n{}", saved.bold());
    } else {
        println!("\n{saved}");
    }
    println!("\nQuick Stats for Visualization:");
    println!("- Total Errors: {}", analysis.total_errors);
    println!(
        "- Backend Errors: {} ({:.1}%)",
        analysis.backend,
        analysis.pct(analysis.backend)
    );
    println!(
        "- Frontend Errors: {} ({:.1}%)",
        analysis.frontend,
        analysis.pct(analysis.frontend)
    );
}
