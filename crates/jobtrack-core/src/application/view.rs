//! Read-only projections over the application collection.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::NaiveDate;

use super::model::{ApplicationRecord, ApplicationStatus};

/// Per-status tallies across a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    counts: BTreeMap<ApplicationStatus, usize>,
    total: usize,
}

impl StatusSummary {
    pub fn from_records(records: &[ApplicationRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            *summary.counts.entry(record.status).or_default() += 1;
            summary.total += 1;
        }
        summary
    }

    pub fn count(&self, status: ApplicationStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Counts for every status in pipeline order, including zeros.
    pub fn iter(&self) -> impl Iterator<Item = (ApplicationStatus, usize)> + '_ {
        ApplicationStatus::all()
            .into_iter()
            .map(|status| (status, self.count(status)))
    }
}

/// Renders a stored `YYYY-MM-DD` date with a chrono format string.
///
/// Dates that do not parse, and format strings chrono rejects, leave the
/// input unchanged.
pub fn format_date(date_applied: &str, format: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(date_applied.trim(), "%Y-%m-%d") else {
        return date_applied.to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date_applied.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::model::ApplicationDraft;

    fn record(id: u64, status: ApplicationStatus) -> ApplicationRecord {
        ApplicationRecord::from_draft(
            id,
            ApplicationDraft::new("Acme", "Engineer", "2024-03-01").with_status(status),
        )
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            record(1, ApplicationStatus::Applied),
            record(2, ApplicationStatus::Interview),
            record(3, ApplicationStatus::Applied),
        ];
        let summary = StatusSummary::from_records(&records);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.count(ApplicationStatus::Applied), 2);
        assert_eq!(summary.count(ApplicationStatus::Offer), 0);
        assert_eq!(summary.iter().count(), 4);
    }

    #[test]
    fn test_format_date_long_form() {
        assert_eq!(format_date("2024-01-15", "%B %-d, %Y"), "January 15, 2024");
    }

    #[test]
    fn test_format_date_passthrough() {
        assert_eq!(format_date("next tuesday", "%B %-d, %Y"), "next tuesday");
    }

    #[test]
    fn test_format_date_invalid_format_falls_back() {
        assert_eq!(format_date("2024-01-15", "%Q"), "2024-01-15");
        assert_eq!(format_date("2024-01-15", "%B %"), "2024-01-15");
    }
}
