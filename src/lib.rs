//! wardview: chart-state reconciliation for clinical statistics dashboards.
//!
//! This crate owns the lifecycle mechanics between a statistics endpoint and a
//! set of dashboard chart widgets: debounced refresh triggers, snapshot
//! fetching, and per-slot reconciliation against an opaque rendering backend.

pub mod api;
pub mod core;
pub mod error;
pub mod fetch;
pub mod render;
pub mod telemetry;

pub use api::{DashboardConfig, DashboardEngine};
pub use error::{DashboardError, DashboardResult, FetchError};
