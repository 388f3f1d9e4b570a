//! Job application domain models.
//!
//! This module contains the application record entity, its status value
//! object, and the draft type used for both creation and editing.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{JobTrackError, Result};

/// Where an application currently stands in the hiring pipeline.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ApplicationStatus {
    /// Submitted, no response yet.
    #[default]
    Applied,
    /// At least one interview scheduled or completed.
    Interview,
    /// An offer has been extended.
    Offer,
    /// The application was turned down.
    Rejected,
}

impl ApplicationStatus {
    /// All statuses in pipeline order.
    pub fn all() -> Vec<ApplicationStatus> {
        ApplicationStatus::iter().collect()
    }
}

/// Editable fields of an application, addressed by name from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum ApplicationField {
    #[strum(to_string = "companyName", serialize = "company")]
    CompanyName,
    #[strum(to_string = "jobTitle", serialize = "title")]
    JobTitle,
    #[strum(to_string = "dateApplied", serialize = "date")]
    DateApplied,
    #[strum(to_string = "status")]
    Status,
    #[strum(to_string = "details")]
    Details,
}

impl ApplicationField {
    /// The field's canonical name, matching the persisted key.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The fields of an application without its identity.
///
/// Used as the candidate for new records and as the scratch copy while a
/// record is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub company_name: String,
    pub job_title: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date_applied: String,
    pub status: ApplicationStatus,
    pub details: String,
}

impl ApplicationDraft {
    /// Creates a draft with the required fields set, status `Applied` and no details.
    pub fn new(
        company_name: impl Into<String>,
        job_title: impl Into<String>,
        date_applied: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            job_title: job_title.into(),
            date_applied: date_applied.into(),
            status: ApplicationStatus::default(),
            details: String::new(),
        }
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Checks that every required field is non-empty after trimming.
    ///
    /// Status is constrained by its type and details are free-form, so only
    /// company name, job title and date applied are inspected. The error
    /// lists every offending field, not just the first.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&'static str> = [
            (ApplicationField::CompanyName, &self.company_name),
            (ApplicationField::JobTitle, &self.job_title),
            (ApplicationField::DateApplied, &self.date_applied),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.name())
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(JobTrackError::validation(missing))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Sets a single field from its textual form.
    ///
    /// Text fields take the value as-is. The status field must name one of
    /// the known statuses, otherwise a validation error is returned and the
    /// draft is left unchanged.
    pub fn set_field(&mut self, field: ApplicationField, value: &str) -> Result<()> {
        match field {
            ApplicationField::CompanyName => self.company_name = value.to_string(),
            ApplicationField::JobTitle => self.job_title = value.to_string(),
            ApplicationField::DateApplied => self.date_applied = value.to_string(),
            ApplicationField::Details => self.details = value.to_string(),
            ApplicationField::Status => {
                self.status = value
                    .trim()
                    .parse()
                    .map_err(|_| JobTrackError::validation([ApplicationField::Status.name()]))?;
            }
        }
        Ok(())
    }
}

/// A tracked job application.
///
/// Persisted through the versioned DTO in the infrastructure crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    /// Unique identifier within the collection.
    pub id: u64,
    pub company_name: String,
    pub job_title: String,
    pub date_applied: String,
    pub status: ApplicationStatus,
    pub details: String,
}

impl ApplicationRecord {
    /// Creates a record from a draft and an already-allocated id.
    pub fn from_draft(id: u64, draft: ApplicationDraft) -> Self {
        Self {
            id,
            company_name: draft.company_name,
            job_title: draft.job_title,
            date_applied: draft.date_applied,
            status: draft.status,
            details: draft.details,
        }
    }

    /// Returns a copy of the record's fields, suitable as an edit scratch copy.
    pub fn draft(&self) -> ApplicationDraft {
        ApplicationDraft {
            company_name: self.company_name.clone(),
            job_title: self.job_title.clone(),
            date_applied: self.date_applied.clone(),
            status: self.status,
            details: self.details.clone(),
        }
    }

    /// Replaces every field with the draft's, keeping the id.
    pub fn apply(&mut self, draft: ApplicationDraft) {
        self.company_name = draft.company_name;
        self.job_title = draft.job_title;
        self.date_applied = draft.date_applied;
        self.status = draft.status;
        self.details = draft.details;
    }
}
