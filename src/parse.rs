//! Line parser for `tsc`-style diagnostic logs.
//!
//! Each line is expected in the shape
//! `<file>(<line>,<column>): error <code>: <message>`. Anything else
//! (headers, blank lines, wrapped continuation text) is silently
//! skipped; the parse is intentionally best-effort and never fails.

use crate::classify::{categorize, is_backend_related};
use crate::models::Diagnostic;
use regex::Regex;
use std::sync::OnceLock;

fn line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+?)\((\d+),(\d+)\): error (TS\d+): (.+)$").expect("diagnostic line regex")
    })
}

/// Parse a whole log into classified diagnostics.
///
/// Lines are right-trimmed before matching. Diagnostics come out in
/// input order, already carrying their derived `category` and
/// `is_backend_related` fields.
pub fn parse_log(text: &str) -> Vec<Diagnostic> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse one line, returning `None` for anything that does not match
/// the diagnostic shape (including digit runs too large for `u32`).
pub fn parse_line(raw: &str) -> Option<Diagnostic> {
    let caps = line_re().captures(raw.trim_end())?;
    let file = caps[1].to_string();
    let line: u32 = caps[2].parse().ok()?;
    let column: u32 = caps[3].parse().ok()?;
    let code = caps[4].to_string();
    let message = caps[5].to_string();
    let category = categorize(&code, &message);
    let is_backend = is_backend_related(&file, &message);
    Some(Diagnostic {
        file,
        line,
        column,
        code,
        message,
        category,
        is_backend_related: is_backend,
    })
}
