//! Query handlers for the Arithmetic context.

use numspeak_core::error::DomainError;
use numspeak_core::repository::{HistoryRepository, StoredCalculation};

/// Number of entries returned when the caller does not ask for a count.
pub const DEFAULT_HISTORY_ITEMS: i64 = 1;

/// Retrieves up to `num_items` of the most recent calculations, oldest
/// first. Zero or negative counts yield an empty list.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if history is unavailable.
pub fn handle_recent_calculations(
    num_items: i64,
    repo: &dyn HistoryRepository,
) -> Result<Vec<StoredCalculation>, DomainError> {
    let Ok(limit) = usize::try_from(num_items) else {
        return Ok(Vec::new());
    };
    repo.recent(limit)
}
