use crate::core::{ChartData, ChartKind, ChartOptions, ChartSlot};
use crate::render::ChartSurface;

/// A live chart bound to a slot's drawing surface.
///
/// Owned exclusively by the slot registry: at most one instance exists per
/// slot, created once and kept until the enclosing view is torn down. The
/// chart kind is fixed at creation and never changes for the lifetime of the
/// instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    slot: ChartSlot,
    kind: ChartKind,
    surface: ChartSurface,
    data: ChartData,
    options: ChartOptions,
    applied_passes: u64,
}

impl ChartInstance {
    pub(crate) fn new(slot: ChartSlot, kind: ChartKind, surface: ChartSurface) -> Self {
        Self {
            slot,
            kind,
            surface,
            data: ChartData::default(),
            options: ChartOptions::default(),
            applied_passes: 0,
        }
    }

    #[must_use]
    pub fn slot(&self) -> ChartSlot {
        self.slot
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn surface(&self) -> ChartSurface {
        self.surface
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Number of reconciliation passes applied to this chart so far.
    #[must_use]
    pub fn applied_passes(&self) -> u64 {
        self.applied_passes
    }

    /// Full replace of dataset and options; nothing is merged.
    pub(crate) fn rebind(&mut self, data: ChartData, options: ChartOptions) {
        self.data = data;
        self.options = options;
        self.applied_passes += 1;
    }
}
