//! Persistent issue state and the reports derived from it.

pub mod report;
pub mod store;

pub use report::{Report, ReportRow};
pub use store::{IssueStore, StoreError};
