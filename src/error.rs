use thiserror::Error;

use crate::core::ChartSlot;

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Failure while retrieving a statistics snapshot.
///
/// Recovered at the call site by delegating to an external error reporter;
/// never retried internally and never fatal to the view.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("snapshot request failed: {0}")]
    Transport(String),

    #[error("statistics endpoint returned status {0}")]
    Status(u16),

    #[error("snapshot body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("snapshot fetch failed")]
    Fetch(#[from] FetchError),

    /// Chart construction failed for a present container. A programming or
    /// configuration defect in the supplied descriptors, not an operational
    /// fault; never caught per-slot.
    #[error("chart construction failed for slot `{slot}`: {reason}")]
    Reconciliation { slot: ChartSlot, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
