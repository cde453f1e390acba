//! # chatstat CLI
//!
//! Command-line front end for the chatstat library.

use std::fs;
use std::process;

use clap::Parser as ClapParser;
use tracing::{info, warn};

use chatstat::ChatstatError;
use chatstat::cli::{Args, OutputFormat};
use chatstat::logging::init_logging;
use chatstat::report::{
    render_text, report_to_json, stats_to_csv, write_report_json, write_stats_csv,
};
use chatstat::session::AnalysisSession;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let mut session = AnalysisSession::new()
        .with_parser_config(args.parser_config())
        .with_analysis_config(args.analysis_config());

    if let Err(e) = session.load_stop_words() {
        warn!(
            path = %session.config().stopwords_path.display(),
            error = %e,
            "stop-word list unavailable, continuing without one"
        );
    }

    session.load_file(&args.input)?;

    if args.list_users {
        for user in session.users() {
            println!("{user}");
        }
        return Ok(());
    }

    let selection = args.selection();
    let mut report = session.analyze(&selection);
    if let Some((a, b)) = args.compare_pair() {
        report = report.with_comparison(session.compare(a, b)?);
    }

    match (args.format, args.output.as_deref()) {
        (OutputFormat::Text, None) => print!("{}", render_text(&report)),
        (OutputFormat::Text, Some(path)) => fs::write(path, render_text(&report))?,
        (OutputFormat::Json, None) => println!("{}", report_to_json(&report)?),
        (OutputFormat::Json, Some(path)) => write_report_json(&report, path)?,
        (OutputFormat::Csv, None) => print!("{}", stats_to_csv(&report.stats)?),
        (OutputFormat::Csv, Some(path)) => write_stats_csv(&report.stats, path)?,
    }

    if let Some(path) = &args.output {
        info!(path = %path.display(), format = %args.format, "report written");
    }
    Ok(())
}
