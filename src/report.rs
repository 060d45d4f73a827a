//! Human-readable triage report.
//!
//! Pure string construction over an [`Analysis`]; printing and any
//! colorization live in `output`.

use crate::analyze::{Analysis, TOP_CODES};

/// Render the full text report, sections in fixed order.
pub fn render(analysis: &Analysis) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push("# TypeScript Error Analysis Report".to_string());
    out.push(format!("\nTotal Errors: {}", analysis.total_errors));

    out.push("\n## Backend vs Frontend Distribution".to_string());
    out.push(format!(
        "- Backend-related: {} ({:.1}%)",
        analysis.backend,
        analysis.pct(analysis.backend)
    ));
    out.push(format!(
        "- Frontend-only: {} ({:.1}%)",
        analysis.frontend,
        analysis.pct(analysis.frontend)
    ));

    out.push("\n## Top 5 Screens/Components with Most Errors".to_string());
    for (screen, count) in &analysis.top_5_screens {
        out.push(format!("- {screen}: {count} errors"));
    }

    out.push("\n## Most Common Error Patterns".to_string());
    for (category, count) in &analysis.most_common_patterns {
        out.push(format!("- {category}: {count} occurrences"));
    }

    out.push("\n## Common Missing Properties (Backend Integration Issues)".to_string());
    for prop in analysis.common_missing_properties.iter().take(5) {
        out.push(format!("- '{}': {} occurrences", prop.property, prop.count));
        out.push(format!("  Files: {}", prop.files.join(", ")));
    }

    out.push("\n## Error Code Distribution".to_string());
    for (code, count) in analysis.by_code.most_common(TOP_CODES) {
        out.push(format!("- {code}: {count} errors"));
    }

    out.join("\n")
}
