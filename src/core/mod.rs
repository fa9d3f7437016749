pub mod data;
pub mod instance;
pub mod snapshot;
pub mod types;

pub use data::{AxisBounds, ChartData, ChartOptions, DataSeries, SlotDescriptor, SlotPlan};
pub use instance::ChartInstance;
pub use snapshot::Snapshot;
pub use types::{ChartKind, ChartSlot};
