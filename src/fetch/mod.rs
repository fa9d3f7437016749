//! Snapshot fetch boundary.
//!
//! The transport is an external collaborator behind [`SnapshotTransport`]:
//! one invocation is one request, with no internal retry and no shared-state
//! mutation beyond the network call itself.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::Snapshot;
use crate::error::FetchError;

#[cfg(feature = "http-transport")]
mod http;
#[cfg(feature = "http-transport")]
pub use http::HttpTransport;

/// Externally supplied filter set for the statistics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Hospital selection; `None` means the deployment default.
    pub hospital: Option<String>,
    /// Restrict to a calendar year; `None` means the current year to date.
    pub year: Option<i32>,
}

impl FilterParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hospital(mut self, hospital: impl Into<String>) -> Self {
        self.hospital = Some(hospital.into());
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Query-parameter encoding used by the HTTP transport.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(hospital) = &self.hospital {
            query.push(("hospital", hospital.clone()));
        }
        if let Some(year) = self.year {
            query.push(("year", year.to_string()));
        }
        query
    }
}

/// Contract implemented by any snapshot transport.
pub trait SnapshotTransport {
    /// Issues exactly one request for the latest statistics snapshot.
    fn fetch(&mut self, filter: &FilterParams) -> Result<Snapshot, FetchError>;
}

/// Scripted transport for tests and offline hosts.
///
/// Replays a fixed queue of prepared outcomes and records the filter each
/// call was issued with.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    outcomes: VecDeque<Result<Snapshot, FetchError>>,
    calls: Vec<FilterParams>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.outcomes.push_back(Ok(snapshot));
        self
    }

    #[must_use]
    pub fn with_failure(mut self, error: FetchError) -> Self {
        self.outcomes.push_back(Err(error));
        self
    }

    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.outcomes.push_back(Ok(snapshot));
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Filters the transport was invoked with, in call order.
    #[must_use]
    pub fn calls(&self) -> &[FilterParams] {
        &self.calls
    }
}

impl SnapshotTransport for ScriptedTransport {
    fn fetch(&mut self, filter: &FilterParams) -> Result<Snapshot, FetchError> {
        self.calls.push(filter.clone());
        self.outcomes
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("scripted outcomes exhausted".to_owned())))
    }
}
