//! tstriage CLI binary entry point.
//! One linear pass: read log, parse, classify, aggregate, render, write.

mod analyze;
mod classify;
mod cli;
mod models;
mod output;
mod parse;
mod report;
mod screen;
mod utils;

use clap::Parser;
use cli::Cli;
use std::fs;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    let log_path = cli.log.as_deref().unwrap_or(cli::DEFAULT_LOG);
    let export_path = cli.json_out.as_deref().unwrap_or(cli::DEFAULT_EXPORT);

    // Missing input is the one fatal condition; nothing is written then.
    let text = match fs::read_to_string(log_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!("Log file not found: {log_path} ({e}). Pass --log to point elsewhere.")
            );
            std::process::exit(2);
        }
    };

    let diagnostics = parse::parse_log(&text);
    if diagnostics.is_empty() {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            format!("No diagnostic lines matched in {log_path}; writing an empty analysis.")
        );
    }
    let analysis = analyze::analyze(&diagnostics);

    println!("{}", report::render(&analysis));

    if let Err(e) = output::write_export(Path::new(export_path), &analysis) {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!("Failed to write {export_path}: {e}")
        );
        std::process::exit(2);
    }
    output::print_quick_stats(&analysis, Path::new(export_path));
}
