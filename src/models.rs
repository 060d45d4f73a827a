//! Shared data models for parsed diagnostics and analysis output.

use serde::Serialize;

/// One parsed compiler diagnostic line.
///
/// `category` and `is_backend_related` are derived at classification time
/// and never change afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub code: String,
    pub message: String,
    pub category: String,
    pub is_backend_related: bool,
}

/// A missing-property cluster extracted from `TS2339`-style messages.
#[derive(Debug, Clone, Serialize)]
pub struct MissingProperty {
    pub property: String,
    pub count: usize,
    /// Up to 3 distinct contributing file paths.
    pub files: Vec<String>,
}

/// A backend-related diagnostic, reduced to the fields triage cares about.
#[derive(Debug, Clone, Serialize)]
pub struct ApiRelatedError {
    pub file: String,
    pub message: String,
    pub category: String,
}
