//! Screen/grouping-key extraction from file paths.
//!
//! The label is decided by an ordered rule list evaluated top to
//! bottom; the first rule that applies wins. Order carries the
//! priority semantics (`screens` beats `components` beats `src`, and
//! so on), so the rules live in one explicit slice rather than a
//! nested conditional.

type Rule = fn(&[&str]) -> Option<String>;

const RULES: &[Rule] = &[
    screens_rule,
    components_rule,
    tests_rule,
    src_module_rule,
    parent_dir_rule,
];

/// Derive the reporting group for a diagnostic's file path.
pub fn screen_of(file: &str) -> String {
    let parts: Vec<&str> = file.split('/').collect();
    RULES
        .iter()
        .find_map(|rule| rule(&parts))
        .unwrap_or_else(|| "Root".to_string())
}

fn segment_after<'a>(parts: &[&'a str], name: &str) -> Option<&'a str> {
    let idx = parts.iter().position(|p| *p == name)?;
    parts.get(idx + 1).copied()
}

fn screens_rule(parts: &[&str]) -> Option<String> {
    let next = segment_after(parts, "screens")?;
    Some(
        next.strip_suffix(".tsx")
            .or_else(|| next.strip_suffix(".ts"))
            .unwrap_or(next)
            .to_string(),
    )
}

fn components_rule(parts: &[&str]) -> Option<String> {
    segment_after(parts, "components").map(|next| format!("Component:{next}"))
}

fn tests_rule(parts: &[&str]) -> Option<String> {
    parts
        .iter()
        .any(|p| *p == "__tests__")
        .then(|| "Tests".to_string())
}

fn src_module_rule(parts: &[&str]) -> Option<String> {
    segment_after(parts, "src").map(|next| format!("Module:{next}"))
}

fn parent_dir_rule(parts: &[&str]) -> Option<String> {
    (parts.len() > 1).then(|| parts[parts.len() - 2].to_string())
}
