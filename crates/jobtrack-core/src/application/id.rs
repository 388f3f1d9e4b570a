//! Record id allocation.

use chrono::Utc;

use crate::error::{JobTrackError, Result};

/// Allocates record ids that are unique by construction.
///
/// Ids track wall-clock milliseconds so they stay roughly chronological,
/// but each id is strictly greater than every id handed out before and
/// every id the generator has been told about via [`IdGenerator::observe`].
/// Two creations inside the same millisecond therefore still get distinct ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: u64,
    clock: fn() -> u64,
}

fn system_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::with_clock(system_millis)
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator driven by a custom millisecond clock.
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self { last: 0, clock }
    }

    /// Records an id already in use so it is never handed out again.
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    /// Returns the next id, or an error once every id up to `u64::MAX` is taken.
    pub fn next_id(&mut self) -> Result<u64> {
        let floor = self
            .last
            .checked_add(1)
            .ok_or_else(|| JobTrackError::internal("id space exhausted"))?;
        let candidate = (self.clock)().max(floor);
        self.last = candidate;
        Ok(candidate)
    }
}
