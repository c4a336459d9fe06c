//! Application-wide constants and user-facing messages.
//!
//! This module defines the static values used throughout wcag-tally,
//! including file names, log defaults, and every line printed to stdout.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Default location of the issue store, relative to the working directory.
pub const DEFAULT_STORE_FILE_NAME: &str = "issues.json";
/// Name of the configuration file inside the app config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Store Format ===

/// Reserved key holding the most recently added criterion id.
pub const LAST_ADDED_KEY: &str = "last";
/// Indentation used when pretty-printing the store.
pub const STORE_INDENT: &[u8] = b"    ";

// === Logging ===

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// === Messages: Usage ===

pub const MSG_USAGE: &str = "Usage: wcag-tally <command> [<args>]";
pub const MSG_USAGE_ADD: &str = "Usage: wcag-tally add <criteria_number>";
pub const MSG_USAGE_FIND: &str = "Usage: wcag-tally find <text>";
pub const MSG_USAGE_REPORT: &str = "Usage: wcag-tally report";
pub const MSG_USAGE_OOPS: &str = "Usage: wcag-tally oops";
pub const MSG_UNKNOWN_COMMAND: &str = "Unknown command.";

// === Messages: Results ===

pub const MSG_NO_ISSUES: &str = "No issues found.";
pub const MSG_NO_CRITERIA: &str = "No criteria found.";
pub const MSG_NOTHING_TO_UNDO: &str = "I didn't find the last issue you added :()";
/// Title shown for a stored id that has no catalog entry.
pub const UNKNOWN_CRITERIA_TITLE: &str = "Unknown Criteria";

// === Report Layout ===

pub const REPORT_HEADER_ID: &str = "WCAG Criterion";
pub const REPORT_HEADER_COUNT: &str = "Count";
pub const REPORT_HEADER_TITLE: &str = "Description";
/// Width of the horizontal rule under the report header.
pub const REPORT_RULE_WIDTH: usize = 50;
/// Minimum width of the id and count columns.
pub const REPORT_COLUMN_WIDTH: usize = 10;
