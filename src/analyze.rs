//! Aggregation over the classified diagnostic set.
//!
//! Everything here is a full recompute over the in-memory list; there
//! is no incremental state. Rankings use a stable sort over tallies
//! that remember first-encounter order, so equal counts rank in the
//! order their keys first appeared in the log.

use crate::models::{ApiRelatedError, Diagnostic, MissingProperty};
use crate::screen::screen_of;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Ranking limits for the report and the JSON export.
pub const TOP_SCREENS: usize = 5;
pub const TOP_PATTERNS: usize = 5;
pub const TOP_MISSING_PROPS: usize = 10;
pub const TOP_CODES: usize = 10;
/// Contributing file paths listed per missing property.
pub const FILES_PER_PROP: usize = 3;

/// An occurrence counter that remembers first-encounter key order.
#[derive(Debug, Default)]
pub struct Tally {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl Tally {
    pub fn add(&mut self, key: &str) {
        if let Some(n) = self.counts.get_mut(key) {
            *n += 1;
        } else {
            self.order.push(key.to_string());
            self.counts.insert(key.to_string(), 1);
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Keys and counts in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order.iter().map(|k| (k.as_str(), self.counts[k]))
    }

    /// Up to `n` entries with the highest counts, descending. The sort
    /// is stable, so ties keep first-encounter order.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut all: Vec<(String, usize)> =
            self.iter().map(|(k, c)| (k.to_string(), c)).collect();
        all.sort_by(|a, b| b.1.cmp(&a.1));
        all.truncate(n);
        all
    }
}

/// The full derived view over one run's diagnostics.
#[derive(Debug, Default)]
pub struct Analysis {
    pub total_errors: usize,
    pub by_category: Tally,
    pub by_screen: Tally,
    pub by_file: Tally,
    pub by_code: Tally,
    pub backend: usize,
    pub frontend: usize,
    pub common_missing_properties: Vec<MissingProperty>,
    pub api_related_errors: Vec<ApiRelatedError>,
    pub top_5_screens: Vec<(String, usize)>,
    pub most_common_patterns: Vec<(String, usize)>,
}

impl Analysis {
    /// Percentage of `part` against the total, `0.0` when there is no
    /// data. Keeps the renderers free of division-by-zero guards.
    pub fn pct(&self, part: usize) -> f64 {
        if self.total_errors == 0 {
            0.0
        } else {
            part as f64 / self.total_errors as f64 * 100.0
        }
    }
}

fn missing_prop_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Property '(.+?)' does not exist").expect("property regex"))
}

/// Aggregate counts, rankings, and missing-property clusters.
pub fn analyze(diagnostics: &[Diagnostic]) -> Analysis {
    let mut out = Analysis {
        total_errors: diagnostics.len(),
        ..Analysis::default()
    };

    // prop -> (count, first 3 distinct files), insertion-ordered
    let mut prop_order: Vec<String> = Vec::new();
    let mut props: HashMap<String, (usize, Vec<String>)> = HashMap::new();

    for d in diagnostics {
        out.by_category.add(&d.category);
        out.by_screen.add(&screen_of(&d.file));
        out.by_file.add(&d.file);
        out.by_code.add(&d.code);
        if d.is_backend_related {
            out.backend += 1;
            out.api_related_errors.push(ApiRelatedError {
                file: d.file.clone(),
                message: d.message.clone(),
                category: d.category.clone(),
            });
        } else {
            out.frontend += 1;
        }

        if d.message.contains("Property") && d.message.contains("does not exist") {
            if let Some(caps) = missing_prop_re().captures(&d.message) {
                let prop = caps[1].to_string();
                let entry = props.entry(prop.clone()).or_insert_with(|| {
                    prop_order.push(prop.clone());
                    (0, Vec::new())
                });
                entry.0 += 1;
                if entry.1.len() < FILES_PER_PROP && !entry.1.contains(&d.file) {
                    entry.1.push(d.file.clone());
                }
            }
        }
    }

    let mut missing: Vec<MissingProperty> = prop_order
        .into_iter()
        .map(|prop| {
            let (count, files) = props.remove(&prop).unwrap_or((0, Vec::new()));
            MissingProperty {
                property: prop,
                count,
                files,
            }
        })
        .collect();
    missing.sort_by(|a, b| b.count.cmp(&a.count));
    missing.truncate(TOP_MISSING_PROPS);
    out.common_missing_properties = missing;

    out.top_5_screens = out.by_screen.most_common(TOP_SCREENS);
    out.most_common_patterns = out.by_category.most_common(TOP_PATTERNS);
    out
}
