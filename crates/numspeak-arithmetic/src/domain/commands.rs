//! Commands for the Arithmetic context.

use numspeak_core::command::Command;
use uuid::Uuid;

/// Command to calculate and record the sum and product of a list of values.
#[derive(Debug, Clone)]
pub struct RecordCalculation {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The raw `values` parameter, expected to be a JSON list of numbers.
    pub values: String,
    /// Address of the caller.
    pub caller: String,
}

impl Command for RecordCalculation {
    fn command_type(&self) -> &'static str {
        "arithmetic.record_calculation"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
