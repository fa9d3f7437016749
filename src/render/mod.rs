mod null_driver;

pub use null_driver::NullDriver;

use indexmap::IndexMap;

use crate::core::{ChartInstance, ChartSlot};
use crate::error::DashboardResult;

/// Opaque handle to a host-provided drawing surface.
///
/// The core never inspects the handle; it only checks presence and passes it
/// through to chart construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartSurface(u64);

impl ChartSurface {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Presence lookup for slot drawing surfaces, answered by the host view layer
/// at reconciliation time.
pub trait ContainerHost {
    /// Returns the surface currently backing `slot`, or `None` when the
    /// slot's container is not present (e.g. a mode-gated panel).
    fn surface(&self, slot: ChartSlot) -> Option<ChartSurface>;
}

/// Contract implemented by any charting backend.
///
/// The reconciler confirms container presence and instance existence before
/// calling in; backends only draw.
pub trait RenderDriver {
    /// Binds a freshly constructed chart to its drawing surface.
    ///
    /// A failure here propagates out of reconciliation unchanged: it reflects
    /// a malformed container or descriptor, not an operational fault.
    fn mount(&mut self, instance: &ChartInstance) -> DashboardResult<()>;

    /// Synchronously reflects the instance's current dataset and options onto
    /// its surface. Completion is immediate; there is nothing to await.
    fn apply(&mut self, instance: &ChartInstance);
}

/// Fixed map-backed container host for tests and static layouts.
#[derive(Debug, Clone, Default)]
pub struct StaticContainers {
    surfaces: IndexMap<ChartSlot, ChartSurface>,
}

impl StaticContainers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_surface(mut self, slot: ChartSlot, surface: ChartSurface) -> Self {
        self.surfaces.insert(slot, surface);
        self
    }

    pub fn insert(&mut self, slot: ChartSlot, surface: ChartSurface) {
        self.surfaces.insert(slot, surface);
    }

    /// Removes a slot's container, e.g. when the host hides a mode-gated
    /// panel.
    pub fn remove(&mut self, slot: ChartSlot) -> Option<ChartSurface> {
        self.surfaces.shift_remove(&slot)
    }
}

impl ContainerHost for StaticContainers {
    fn surface(&self, slot: ChartSlot) -> Option<ChartSurface> {
        self.surfaces.get(&slot).copied()
    }
}
