//! Application repository implementation.
//!
//! Stores the whole application collection as one JSON array under the
//! `jobApplications` key of a [`KeyValueStore`].

use jobtrack_core::application::{ApplicationRecord, ApplicationRepository, STORAGE_KEY};
use jobtrack_core::error::Result;
use jobtrack_core::storage::KeyValueStore;

use crate::dto::{decode_collection, encode_collection};
use crate::seed::default_applications;

/// Key-value backed application repository.
///
/// Falls back to the default sample collection whenever the stored value is
/// missing, holds zero records, or cannot be parsed. Those fallbacks are
/// logged and never surface as errors.
pub struct KvApplicationRepository<S> {
    store: S,
}

impl<S: KeyValueStore> KvApplicationRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> ApplicationRepository for KvApplicationRepository<S> {
    fn load(&self) -> Vec<ApplicationRecord> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("No stored applications, loading default data");
                return default_applications();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored applications, loading default data");
                return default_applications();
            }
        };

        match decode_collection(&raw) {
            Ok(records) if !records.is_empty() => {
                tracing::debug!(count = records.len(), "Loaded applications from store");
                records
            }
            Ok(_) => {
                tracing::info!("Stored application list is empty, loading default data");
                default_applications()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored applications are unreadable, loading default data");
                default_applications()
            }
        }
    }

    fn save(&mut self, records: &[ApplicationRecord]) -> Result<()> {
        let serialized = encode_collection(records)?;
        self.store.set(STORAGE_KEY, &serialized)?;
        tracing::debug!(count = records.len(), "Saved applications to store");
        Ok(())
    }

    fn reset(&mut self) -> Result<Vec<ApplicationRecord>> {
        self.store.remove(STORAGE_KEY)?;
        tracing::info!("Reset applications to default data");
        Ok(default_applications())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use jobtrack_core::application::{ApplicationDraft, ApplicationStatus};

    fn sample_records() -> Vec<ApplicationRecord> {
        vec![
            ApplicationRecord::from_draft(
                100,
                ApplicationDraft::new("Acme", "Engineer", "2024-03-01"),
            ),
            ApplicationRecord::from_draft(
                101,
                ApplicationDraft::new("Globex", "Lead", "2024-03-02")
                    .with_status(ApplicationStatus::Rejected)
                    .with_details("No sponsorship"),
            ),
        ]
    }

    #[test]
    fn test_load_default_when_not_exists() {
        let repo = KvApplicationRepository::new(MemoryStore::new());

        assert_eq!(repo.load(), default_applications());
        // Loading never writes
        assert!(!repo.store().contains_key(STORAGE_KEY));
    }

    #[test]
    fn test_load_default_when_empty_array() {
        let repo = KvApplicationRepository::new(MemoryStore::with_entry(STORAGE_KEY, "[]"));

        assert_eq!(repo.load(), default_applications());
    }

    #[test]
    fn test_load_default_when_corrupt() {
        let repo =
            KvApplicationRepository::new(MemoryStore::with_entry(STORAGE_KEY, "{not json"));

        assert_eq!(repo.load(), default_applications());
        // The corrupt value is left for the next save to overwrite
        assert_eq!(
            repo.store().get(STORAGE_KEY).unwrap(),
            Some("{not json".to_string())
        );
    }

    #[test]
    fn test_save_and_load() {
        let mut repo = KvApplicationRepository::new(MemoryStore::new());
        let records = sample_records();

        repo.save(&records).unwrap();

        assert_eq!(repo.load(), records);
    }

    #[test]
    fn test_stored_records_are_not_revalidated() {
        let raw = r#"[{"id":9,"companyName":"","jobTitle":"","dateApplied":"","status":"Applied","details":""}]"#;
        let repo = KvApplicationRepository::new(MemoryStore::with_entry(STORAGE_KEY, raw));

        let loaded = repo.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 9);
    }

    #[test]
    fn test_reset_removes_key() {
        let mut repo = KvApplicationRepository::new(MemoryStore::new());
        repo.save(&sample_records()).unwrap();

        let fresh = repo.reset().unwrap();

        assert_eq!(fresh, default_applications());
        assert!(!repo.store().contains_key(STORAGE_KEY));
    }
}
