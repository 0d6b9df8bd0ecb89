//! Shared application state.

use std::sync::Arc;

use numspeak_core::clock::Clock;
use numspeak_core::repository::HistoryRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to timestamp recorded calculations.
    pub clock: Arc<dyn Clock>,
    /// Calculation history.
    pub history: Arc<dyn HistoryRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, history: Arc<dyn HistoryRepository>) -> Self {
        Self { clock, history }
    }
}
