//! Command dispatch and handlers.
//!
//! Handlers write user-facing text to the given writer. Usage, validation and
//! nothing-to-undo outcomes are ordinary output, not errors; only store and
//! I/O failures propagate.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use clap::error::ErrorKind;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::catalog;
use crate::cli::args::{Args, Commands};
use crate::constants;
use crate::state::{report, store};

/// Outcome of parsing the command line.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// A well-formed command to execute.
    Run(Commands),
    /// Text to print instead of running anything (usage, help, version).
    Message(String),
}

/// Parses `argv` (including the program name) without exiting the process.
pub fn parse<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    match Args::try_parse_from(argv.iter()) {
        Ok(Args {
            command: Some(command),
        }) => Invocation::Run(command),
        Ok(Args { command: None }) => Invocation::Message(constants::MSG_USAGE.to_string()),
        Err(err) => Invocation::Message(message_for(&err, &argv)),
    }
}

fn message_for(err: &clap::Error, argv: &[OsString]) -> String {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            err.render().to_string().trim_end().to_string()
        }
        kind => {
            tracing::debug!(?kind, "rejected command line");
            argv.get(1)
                .and_then(|arg| arg.to_str())
                .and_then(Commands::usage)
                .unwrap_or(constants::MSG_UNKNOWN_COMMAND)
                .to_string()
        }
    }
}

/// Runs one command against the store at `store_path`.
///
/// # Errors
///
/// Fails if the store cannot be read, is corrupt, or cannot be written, or if
/// writing to `out` fails.
pub fn run(command: Commands, store_path: &Path, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Add { criteria_number } => add(store_path, &criteria_number, out),
        Commands::Report => show_report(store_path, out),
        Commands::Find { text } => find(&text.join(" "), out),
        Commands::Oops => oops(store_path, out),
    }
}

fn add(store_path: &Path, id: &str, out: &mut impl Write) -> Result<()> {
    let Some(title) = catalog::lookup(id) else {
        writeln!(out, "Error: Criteria {id} not valid.")?;
        return Ok(());
    };

    let mut issues = load(store_path)?;
    let count = issues.add(id);
    save(store_path, &issues)?;
    tracing::info!(%id, count, "issue added");

    writeln!(out, "Issue {id} ({title}) added.")?;
    Ok(())
}

fn oops(store_path: &Path, out: &mut impl Write) -> Result<()> {
    let mut issues = load(store_path)?;
    let Some(id) = issues.undo_last() else {
        writeln!(out, "{}", constants::MSG_NOTHING_TO_UNDO)?;
        return Ok(());
    };
    save(store_path, &issues)?;
    tracing::info!(%id, "issue removed");

    let title = catalog::lookup(&id).unwrap_or(constants::UNKNOWN_CRITERIA_TITLE);
    writeln!(out, "Issue {id} ({title}) removed.")?;
    Ok(())
}

fn show_report(store_path: &Path, out: &mut impl Write) -> Result<()> {
    let issues = load(store_path)?;
    let Some(report) = report::build(&issues) else {
        writeln!(out, "{}", constants::MSG_NO_ISSUES)?;
        return Ok(());
    };

    let w = constants::REPORT_COLUMN_WIDTH;
    writeln!(out, "total number of issues is {}", report.total)?;
    writeln!(
        out,
        "{:<w$} {:<w$} {}",
        constants::REPORT_HEADER_ID,
        constants::REPORT_HEADER_COUNT,
        constants::REPORT_HEADER_TITLE,
    )?;
    writeln!(out, "{}", "-".repeat(constants::REPORT_RULE_WIDTH))?;
    for row in &report.rows {
        writeln!(
            out,
            "{:<w$} {:<w$} ({}) ({:.2}%)",
            row.id, row.count, row.title, row.percentage
        )?;
    }
    Ok(())
}

fn find(text: &str, out: &mut impl Write) -> Result<()> {
    let mut found = false;
    for criterion in catalog::search(text) {
        writeln!(out, "{}: {}", criterion.id, criterion.title)?;
        found = true;
    }
    if !found {
        writeln!(out, "{}", constants::MSG_NO_CRITERIA)?;
    }
    Ok(())
}

fn load(path: &Path) -> Result<store::IssueStore> {
    store::load(path).wrap_err("could not load issues")
}

fn save(path: &Path, issues: &store::IssueStore) -> Result<()> {
    store::save(path, issues).wrap_err("could not save issues")
}
