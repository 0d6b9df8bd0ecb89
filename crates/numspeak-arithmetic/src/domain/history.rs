//! Bounded in-memory calculation history.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use numspeak_core::error::DomainError;
use numspeak_core::repository::{HistoryRepository, StoredCalculation};

/// Number of calculations kept when no capacity is configured.
pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// A `HistoryRepository` that keeps the most recent calculations in memory
/// and evicts the oldest once `capacity` is reached.
#[derive(Debug)]
pub struct InMemoryHistory {
    capacity: NonZeroUsize,
    entries: Mutex<VecDeque<StoredCalculation>>,
}

impl InMemoryHistory {
    /// Creates an empty history holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity.get())),
        }
    }

    /// Maximum number of entries retained.
    #[must_use]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    fn lock(&self) -> Result<MutexGuard<'_, VecDeque<StoredCalculation>>, DomainError> {
        self.entries
            .lock()
            .map_err(|_| DomainError::Infrastructure("history lock poisoned".to_owned()))
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryRepository for InMemoryHistory {
    fn append(&self, calculation: StoredCalculation) -> Result<(), DomainError> {
        let mut entries = self.lock()?;
        if entries.len() == self.capacity.get() {
            entries.pop_front();
        }
        entries.push_back(calculation);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<StoredCalculation>, DomainError> {
        let entries = self.lock()?;
        let start = entries.len().saturating_sub(limit);
        Ok(entries.range(start..).cloned().collect())
    }
}
