//! CLI argument parsing via `clap`.
//!
//! All classification tables and top-N limits are compile-time
//! constants; only the two file locations can be overridden, and their
//! defaults match the fixed names a flagless run uses.

use clap::Parser;

/// Default input log location.
pub const DEFAULT_LOG: &str = "typescript-errors.log";
/// Default JSON export location, overwritten on every run.
pub const DEFAULT_EXPORT: &str = "typescript_errors_analysis.json";

#[derive(Parser)]
#[command(
    name = "tstriage",
    version,
    about = "Triage tsc diagnostic logs",
    long_about = "tstriage — parse a TypeScript compiler log, classify each diagnostic,\nand emit a triage report plus a JSON aggregate for visualization.",
    after_help = "Examples:\n  tstriage\n  tstriage --log build/tsc.log --json-out out/errors.json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, help = "Input diagnostic log (default: typescript-errors.log)")]
    pub log: Option<String>,
    #[arg(
        long = "json-out",
        help = "JSON export path (default: typescript_errors_analysis.json)"
    )]
    pub json_out: Option<String>,
}
