use std::collections::BTreeSet;

use jobtrack_core::application::{
    ApplicationDraft, ApplicationField, ApplicationRecord, ApplicationRepository, IdGenerator,
    StatusSummary,
};
use jobtrack_core::error::{JobTrackError, Result};

use crate::edit::EditState;

const ENTITY: &str = "application";

fn no_active_edit() -> JobTrackError {
    JobTrackError::not_found("edit", "none in progress")
}

/// Owns the application collection and the transient selection state.
///
/// `ApplicationTracker` is responsible for:
/// - Loading the collection once at construction
/// - Creating, editing and deleting records
/// - Writing the collection through to the repository after every change
/// - Tracking which record is being edited and which records are expanded
///
/// If a write-through fails, the in-memory collection is rolled back so it
/// never runs ahead of what was last persisted.
pub struct ApplicationTracker<R> {
    repository: R,
    records: Vec<ApplicationRecord>,
    edit: EditState,
    expanded: BTreeSet<u64>,
    ids: IdGenerator,
}

impl<R: ApplicationRepository> ApplicationTracker<R> {
    /// Loads the persisted collection and returns a ready tracker.
    ///
    /// Loading cannot fail; unusable stored data yields the default sample
    /// collection.
    pub fn initialize(repository: R) -> Self {
        Self::initialize_with_ids(repository, IdGenerator::new())
    }

    /// Like [`ApplicationTracker::initialize`], with a caller-supplied id generator.
    pub fn initialize_with_ids(repository: R, mut ids: IdGenerator) -> Self {
        let records = repository.load();
        for record in &records {
            ids.observe(record.id);
        }
        tracing::info!(count = records.len(), "Application tracker initialized");

        Self {
            repository,
            records,
            edit: EditState::Idle,
            expanded: BTreeSet::new(),
            ids,
        }
    }

    // ============================================================================
    // Read accessors
    // ============================================================================

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    pub fn record(&self, id: u64) -> Option<&ApplicationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<u64> {
        self.edit.editing_id()
    }

    pub fn edit_draft(&self) -> Option<&ApplicationDraft> {
        self.edit.draft()
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expanded_ids(&self) -> &BTreeSet<u64> {
        &self.expanded
    }

    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_records(&self.records)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    // ============================================================================
    // Operations
    // ============================================================================

    /// Validates and appends a new record, then persists the collection.
    pub fn add_record(&mut self, draft: ApplicationDraft) -> Result<ApplicationRecord> {
        draft.validate()?;
        let id = self.ids.next_id()?;

        let previous = self.records.clone();
        let record = ApplicationRecord::from_draft(id, draft);
        self.records.push(record.clone());
        self.persist(previous)?;

        tracing::info!(id = record.id, company = %record.company_name, "Added application");
        Ok(record)
    }

    /// Opens the record with `id` for editing and returns its scratch copy.
    ///
    /// Calling this while another record is open redirects the edit.
    pub fn begin_edit(&mut self, id: u64) -> Result<&ApplicationDraft> {
        let draft = self
            .record(id)
            .map(ApplicationRecord::draft)
            .ok_or_else(|| JobTrackError::not_found(ENTITY, id.to_string()))?;

        tracing::debug!(id, "Begin edit");
        self.edit = EditState::Editing { id, draft };
        self.edit
            .draft()
            .ok_or_else(|| JobTrackError::internal("edit state lost after begin_edit"))
    }

    /// Updates one field of the scratch copy.
    pub fn update_edit_field(&mut self, field: ApplicationField, value: &str) -> Result<()> {
        match &mut self.edit {
            EditState::Editing { draft, .. } => draft.set_field(field, value),
            EditState::Idle => Err(no_active_edit()),
        }
    }

    /// Replaces the fields of the record being edited and persists.
    ///
    /// On a validation failure the edit stays open and nothing changes.
    pub fn commit_edit(&mut self, draft: ApplicationDraft) -> Result<ApplicationRecord> {
        let id = self
            .edit
            .editing_id()
            .ok_or_else(no_active_edit)?;
        draft.validate()?;

        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            self.edit = EditState::Idle;
            return Err(JobTrackError::not_found(ENTITY, id.to_string()));
        };

        let previous = self.records.clone();
        self.records[index].apply(draft);
        self.persist(previous)?;

        self.edit = EditState::Idle;
        tracing::info!(id, "Updated application");
        Ok(self.records[index].clone())
    }

    /// Commits the current scratch copy.
    pub fn commit_pending_edit(&mut self) -> Result<ApplicationRecord> {
        let draft = self
            .edit
            .draft()
            .cloned()
            .ok_or_else(no_active_edit)?;
        self.commit_edit(draft)
    }

    /// Closes the edit without saving.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.edit.editing_id() {
            tracing::debug!(id, "Cancel edit");
        }
        self.edit = EditState::Idle;
    }

    /// Removes the record with `id` and persists. Unknown ids are a no-op.
    pub fn delete_record(&mut self, id: u64) -> Result<()> {
        let previous = self.records.clone();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != previous.len();
        self.persist(previous)?;

        self.expanded.remove(&id);
        if self.edit.editing_id() == Some(id) {
            self.edit = EditState::Idle;
        }

        if removed {
            tracing::info!(id, "Deleted application");
        }
        Ok(())
    }

    /// Shows or hides the details of `id`. Returns whether they are now shown.
    pub fn toggle_details(&mut self, id: u64) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Discards everything stored and restores the default sample collection.
    pub fn reset_to_default(&mut self) -> Result<()> {
        let records = self.repository.reset()?;
        for record in &records {
            self.ids.observe(record.id);
        }
        self.records = records;
        self.edit = EditState::Idle;
        self.expanded.clear();
        Ok(())
    }

    fn persist(&mut self, previous: Vec<ApplicationRecord>) -> Result<()> {
        if let Err(e) = self.repository.save(&self.records) {
            tracing::error!(error = %e, "Failed to persist applications, rolling back");
            self.records = previous;
            return Err(e);
        }
        Ok(())
    }
}
