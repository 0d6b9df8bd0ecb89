//! Test repositories — mock `HistoryRepository` implementations for tests.

use std::sync::Mutex;

use numspeak_core::error::DomainError;
use numspeak_core::repository::{HistoryRepository, StoredCalculation};

/// A history repository that records every appended calculation and
/// answers `recent` from what it has recorded. Unbounded.
#[derive(Debug, Default)]
pub struct RecordingHistoryRepository {
    appended: Mutex<Vec<StoredCalculation>>,
}

impl RecordingHistoryRepository {
    /// Create an empty recording repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all calculations that were appended.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended(&self) -> Vec<StoredCalculation> {
        self.appended.lock().unwrap().clone()
    }
}

impl HistoryRepository for RecordingHistoryRepository {
    fn append(&self, calculation: StoredCalculation) -> Result<(), DomainError> {
        self.appended.lock().unwrap().push(calculation);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<StoredCalculation>, DomainError> {
        let appended = self.appended.lock().unwrap();
        let start = appended.len().saturating_sub(limit);
        Ok(appended[start..].to_vec())
    }
}

/// A history repository that always fails with an infrastructure error.
/// Useful for testing error propagation.
#[derive(Debug)]
pub struct FailingHistoryRepository;

impl HistoryRepository for FailingHistoryRepository {
    fn append(&self, _calculation: StoredCalculation) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("history unavailable".into()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<StoredCalculation>, DomainError> {
        Err(DomainError::Infrastructure("history unavailable".into()))
    }
}
