use std::collections::HashSet;

use jobtrack_application::ApplicationTracker;
use jobtrack_core::application::{
    ApplicationDraft, ApplicationRecord, ApplicationRepository, ApplicationStatus, STORAGE_KEY,
};
use jobtrack_core::storage::KeyValueStore;
use jobtrack_infrastructure::seed::default_applications;
use jobtrack_infrastructure::{FileStore, KvApplicationRepository, MemoryStore};
use tempfile::TempDir;

fn assert_valid_seed(records: &[ApplicationRecord]) {
    assert!(!records.is_empty(), "seed should not be empty");
    let ids: HashSet<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), records.len(), "seed ids should be unique");
    assert!(records.iter().all(|r| r.draft().is_valid()));
}

#[test]
fn test_empty_store_initializes_with_seed() {
    let tracker = ApplicationTracker::initialize(KvApplicationRepository::new(MemoryStore::new()));

    assert_eq!(tracker.records(), default_applications().as_slice());
    assert_valid_seed(tracker.records());
}

#[test]
fn test_corrupt_store_initializes_with_seed() {
    let store = MemoryStore::with_entry(STORAGE_KEY, "definitely not json");
    let tracker = ApplicationTracker::initialize(KvApplicationRepository::new(store));

    assert_eq!(tracker.records(), default_applications().as_slice());
}

#[test]
fn test_add_acme_scenario() {
    let mut tracker =
        ApplicationTracker::initialize(KvApplicationRepository::new(MemoryStore::new()));
    let before = tracker.records().len();
    let existing: HashSet<u64> = tracker.records().iter().map(|r| r.id).collect();

    let record = tracker
        .add_record(
            ApplicationDraft::new("Acme", "Engineer", "2024-03-01")
                .with_status(ApplicationStatus::Applied),
        )
        .unwrap();

    assert_eq!(record.company_name, "Acme");
    assert_eq!(record.job_title, "Engineer");
    assert_eq!(record.date_applied, "2024-03-01");
    assert_eq!(record.status, ApplicationStatus::Applied);
    assert_eq!(record.details, "");
    assert!(!existing.contains(&record.id));
    assert_eq!(tracker.records().len(), before + 1);

    // Written through to the store
    let stored = tracker.repository().load();
    assert_eq!(stored, tracker.records());
}

#[test]
fn test_changes_survive_restart() {
    let temp_dir = TempDir::new().unwrap();

    let added = {
        let repo = KvApplicationRepository::new(FileStore::new(temp_dir.path()));
        let mut tracker = ApplicationTracker::initialize(repo);
        tracker.delete_record(3).unwrap();
        tracker.begin_edit(1).unwrap();
        tracker
            .commit_edit(
                ApplicationDraft::new("TechCorp Solutions", "Staff Engineer", "2024-01-15")
                    .with_status(ApplicationStatus::Offer),
            )
            .unwrap();
        tracker
            .add_record(ApplicationDraft::new("Acme", "Engineer", "2024-03-01"))
            .unwrap()
    };

    let repo = KvApplicationRepository::new(FileStore::new(temp_dir.path()));
    let tracker = ApplicationTracker::initialize(repo);

    assert_eq!(tracker.records().len(), 6);
    assert!(tracker.record(3).is_none());
    assert_eq!(tracker.records().last(), Some(&added));
    let edited = tracker.record(1).unwrap();
    assert_eq!(edited.job_title, "Staff Engineer");
    assert_eq!(edited.status, ApplicationStatus::Offer);
    // Selection state is not persisted
    assert_eq!(tracker.editing_id(), None);
    assert!(tracker.expanded_ids().is_empty());
}

#[test]
fn test_reset_after_corruption() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileStore::new(temp_dir.path());
    store.set(STORAGE_KEY, "[{\"id\": \"oops\"}]").unwrap();

    let mut tracker = ApplicationTracker::initialize(KvApplicationRepository::new(store));
    tracker.toggle_details(2);
    tracker.reset_to_default().unwrap();

    assert_valid_seed(tracker.records());
    assert!(tracker.expanded_ids().is_empty());
    assert_eq!(
        FileStore::new(temp_dir.path()).get(STORAGE_KEY).unwrap(),
        None
    );
}

#[test]
fn test_deleting_everything_reloads_seed() {
    let temp_dir = TempDir::new().unwrap();
    let mut tracker =
        ApplicationTracker::initialize(KvApplicationRepository::new(FileStore::new(temp_dir.path())));

    let ids: Vec<u64> = tracker.records().iter().map(|r| r.id).collect();
    for id in ids {
        tracker.delete_record(id).unwrap();
    }
    assert!(tracker.records().is_empty());

    // An empty stored list counts as "nothing stored"
    let reopened =
        ApplicationTracker::initialize(KvApplicationRepository::new(FileStore::new(temp_dir.path())));
    assert_eq!(reopened.records(), default_applications().as_slice());
}
