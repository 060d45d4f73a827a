//! tstriage core library.
//!
//! This crate exposes programmatic APIs for parsing, classifying, and
//! aggregating TypeScript compiler diagnostics from a build log.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `parse`: Best-effort line parser for `tsc` diagnostic output.
//! - `classify`: Fixed code→category table and backend heuristics.
//! - `screen`: Ordered-rule screen/grouping-key extraction.
//! - `analyze`: Aggregation into counts, rankings, and clusters.
//! - `report`: Human-readable text report renderer.
//! - `output`: JSON export composition, file write, quick stats.
//! - `utils`: Supporting helpers.

pub mod analyze;
pub mod classify;
pub mod cli;
pub mod models;
pub mod output;
pub mod parse;
pub mod report;
pub mod screen;
pub mod utils;
