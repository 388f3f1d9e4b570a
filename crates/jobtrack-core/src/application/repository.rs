//! Application repository trait.

use super::model::ApplicationRecord;
use crate::error::Result;

/// Key under which the whole collection is persisted.
pub const STORAGE_KEY: &str = "jobApplications";

/// Repository for the persisted application collection.
///
/// The collection is stored and replaced as a whole; there are no
/// per-record operations.
pub trait ApplicationRepository {
    /// Loads the persisted collection.
    ///
    /// Never fails: when nothing usable is stored (missing, empty or
    /// unreadable) the default sample collection is returned instead.
    /// Loading never writes to storage.
    fn load(&self) -> Vec<ApplicationRecord>;

    /// Overwrites the persisted collection.
    fn save(&mut self, records: &[ApplicationRecord]) -> Result<()>;

    /// Removes the persisted collection and returns a fresh default one.
    fn reset(&mut self) -> Result<Vec<ApplicationRecord>>;
}
