//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::constants;

/// wcag-tally - count accessibility audit findings per WCAG criterion
#[derive(Parser, Debug)]
#[command(name = "wcag-tally", author, version, about, long_about = None)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Record one issue against a success criterion
    Add {
        /// Criterion number, e.g. 1.4.3
        criteria_number: String,
    },
    /// Show issue counts, most frequent first
    Report,
    /// Search criteria titles (case-insensitive)
    Find {
        /// Text to look for; several words are searched as one phrase
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Undo the most recent add
    Oops,
}

impl Commands {
    /// Usage line printed when this command gets the wrong arguments.
    #[must_use]
    pub fn usage(name: &str) -> Option<&'static str> {
        match name {
            "add" => Some(constants::MSG_USAGE_ADD),
            "find" => Some(constants::MSG_USAGE_FIND),
            "report" => Some(constants::MSG_USAGE_REPORT),
            "oops" => Some(constants::MSG_USAGE_OOPS),
            _ => None,
        }
    }
}
