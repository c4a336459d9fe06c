//! Tally of accessibility audit findings per WCAG success criterion.
//!
//! Counts live in a small JSON store; the criteria themselves come from a
//! fixed catalog compiled into the binary.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod state;
