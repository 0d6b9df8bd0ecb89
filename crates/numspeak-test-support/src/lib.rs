//! Shared test mocks and utilities for the numspeak services.

mod clock;
mod repository;

pub use clock::{FixedClock, SequenceClock};
pub use repository::{FailingHistoryRepository, RecordingHistoryRepository};
