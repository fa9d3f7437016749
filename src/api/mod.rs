mod engine;
mod plan;
mod reconciler;
mod refresh;
mod registry;

pub use engine::{DashboardConfig, DashboardEngine};
pub use plan::standard_slots;
pub use reconciler::reconcile;
pub use refresh::{RefreshDebounce, TriggerDecision};
pub use registry::SlotRegistry;
