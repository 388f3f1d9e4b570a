//! Terminal rendering of tracker state.

use colored::{ColoredString, Colorize};

use jobtrack_core::application::{
    ApplicationDraft, ApplicationRecord, ApplicationStatus, StatusSummary, format_date,
};

pub fn status_badge(status: ApplicationStatus) -> ColoredString {
    let label = format!(" {} ", status);
    match status {
        ApplicationStatus::Applied => label.blue().bold(),
        ApplicationStatus::Interview => label.yellow().bold(),
        ApplicationStatus::Offer => label.green().bold(),
        ApplicationStatus::Rejected => label.red().bold(),
    }
}

/// Renders one application as a card; details only when expanded.
pub fn card(record: &ApplicationRecord, expanded: bool, date_format: &str) -> String {
    let mut out = format!(
        "{} {}\n    {}\n    Applied: {}  {}",
        format!("#{}", record.id).bright_black(),
        record.company_name.bold(),
        record.job_title,
        format_date(&record.date_applied, date_format),
        status_badge(record.status),
    );

    if expanded {
        if record.details.trim().is_empty() {
            out.push_str(&format!("\n    {}", "No details".bright_black()));
        } else {
            for line in record.details.lines() {
                out.push_str(&format!("\n    {}", line.cyan()));
            }
        }
    } else if !record.details.trim().is_empty() {
        out.push_str(&format!(
            "\n    {}",
            format!("(details {} to show)", record.id).bright_black()
        ));
    }
    out
}

/// Renders the open edit's scratch copy.
pub fn edit_overlay(id: u64, draft: &ApplicationDraft) -> String {
    let details = if draft.details.is_empty() {
        "-".to_string()
    } else {
        draft.details.clone()
    };
    format!(
        "{}\n  companyName* : {}\n  jobTitle*    : {}\n  dateApplied* : {}\n  status       : {}\n  details      : {}\n{}",
        format!("Editing application #{}", id).bright_magenta().bold(),
        draft.company_name,
        draft.job_title,
        draft.date_applied,
        draft.status,
        details,
        "Use 'set <field> <value>', then 'save' or 'cancel'.".bright_black(),
    )
}

pub fn summary(summary: &StatusSummary) -> String {
    let mut out = format!("{} applications", summary.total()).bold().to_string();
    for (status, count) in summary.iter() {
        out.push_str(&format!("\n  {} {}", status_badge(status), count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ApplicationRecord {
        ApplicationRecord::from_draft(
            4,
            ApplicationDraft::new("Acme", "Engineer", "2024-03-01").with_details("Referral"),
        )
    }

    #[test]
    fn test_card_hides_details_until_expanded() {
        colored::control::set_override(false);

        let collapsed = card(&record(), false, "%B %-d, %Y");
        assert!(collapsed.contains("Acme"));
        assert!(collapsed.contains("March 1, 2024"));
        assert!(!collapsed.contains("Referral"));

        let expanded = card(&record(), true, "%B %-d, %Y");
        assert!(expanded.contains("Referral"));
    }

    #[test]
    fn test_card_with_bad_date_format_shows_raw_date() {
        colored::control::set_override(false);

        let text = card(&record(), false, "%Q");
        assert!(text.contains("Applied: 2024-03-01"));
    }

    #[test]
    fn test_edit_overlay_lists_fields() {
        colored::control::set_override(false);

        let text = edit_overlay(4, &record().draft());
        assert!(text.contains("Editing application #4"));
        assert!(text.contains("companyName* : Acme"));
        assert!(text.contains("status       : Applied"));
    }
}
