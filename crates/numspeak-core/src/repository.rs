//! History repository abstraction.
//!
//! The arithmetic service keeps a record of every successful calculation.
//! Storage sits behind `HistoryRepository` so the HTTP layer and the tests
//! can swap implementations.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::error::DomainError;
use crate::numeric::Numeric;

/// Format used when a calculation timestamp is serialized.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A calculation as it is kept in history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredCalculation {
    /// Address of the caller that submitted the values.
    pub ip: String,
    /// When the calculation was performed.
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// The submitted values, in submission order.
    pub values: Vec<Numeric>,
    /// Sum of `values`.
    pub sum: Numeric,
    /// Product of `values`.
    pub product: Numeric,
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

/// Storage for calculation history.
pub trait HistoryRepository: Send + Sync {
    /// Appends a calculation, evicting the oldest entries if the store is
    /// bounded and full.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store is unavailable.
    fn append(&self, calculation: StoredCalculation) -> Result<(), DomainError>;

    /// Returns up to `limit` of the most recent calculations, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store is unavailable.
    fn recent(&self, limit: usize) -> Result<Vec<StoredCalculation>, DomainError>;
}
