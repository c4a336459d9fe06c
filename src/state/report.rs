//! Report computation over an [`IssueStore`].

use crate::catalog;
use crate::constants;
use crate::state::IssueStore;

/// One line of the breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: String,
    pub count: u64,
    pub title: &'static str,
    /// Share of the total, in percent.
    pub percentage: f64,
}

/// Issue breakdown sorted by count, highest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub total: u64,
    pub rows: Vec<ReportRow>,
}

/// Builds the report, or `None` when there are no issues.
///
/// Ties on count fall back to catalog order; ids missing from the catalog
/// sort after every known id.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build(store: &IssueStore) -> Option<Report> {
    let total = store.total();
    if total == 0 {
        return None;
    }

    let mut rows: Vec<ReportRow> = store
        .counts
        .iter()
        .map(|(id, &count)| ReportRow {
            id: id.clone(),
            count,
            title: catalog::lookup(id).unwrap_or(constants::UNKNOWN_CRITERIA_TITLE),
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| tie_rank(&a.id).cmp(&tie_rank(&b.id)))
    });

    Some(Report { total, rows })
}

fn tie_rank(id: &str) -> (usize, &str) {
    (catalog::position(id).unwrap_or(usize::MAX), id)
}
