//! Command handlers for the Arithmetic context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: validate input, compute, record history.

use numspeak_core::clock::Clock;
use numspeak_core::command::Command;
use numspeak_core::error::DomainError;
use numspeak_core::repository::{HistoryRepository, StoredCalculation};
use tracing::debug;

use crate::domain::calculation::{Calculation, CalculationResult};
use crate::domain::commands::RecordCalculation;

/// Handles the `RecordCalculation` command: parses the submitted values,
/// computes sum and product, and appends the calculation to history.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the values are not a non-empty JSON
/// list of numbers, or `DomainError::Infrastructure` if history is
/// unavailable.
pub fn handle_record_calculation(
    command: &RecordCalculation,
    clock: &dyn Clock,
    repo: &dyn HistoryRepository,
) -> Result<CalculationResult, DomainError> {
    let calculation = Calculation::parse(&command.values)?;
    let result = calculation.result();

    debug!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        count = calculation.values().len(),
        "calculation computed"
    );

    repo.append(StoredCalculation {
        ip: command.caller.clone(),
        timestamp: clock.now(),
        values: calculation.into_values(),
        sum: result.sum,
        product: result.product,
    })?;

    Ok(result)
}
