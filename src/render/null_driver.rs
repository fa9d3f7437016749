use crate::core::{ChartInstance, ChartSlot};
use crate::error::{DashboardError, DashboardResult};
use crate::render::RenderDriver;

/// No-op driver used by tests and headless hosts.
///
/// It records mount and apply activity per slot so tests can observe the
/// reconciler's lifecycle decisions, and can be armed to reject a mount to
/// exercise construction-failure propagation.
#[derive(Debug, Default)]
pub struct NullDriver {
    mounted: Vec<ChartSlot>,
    applied: Vec<ChartSlot>,
    reject_mounts_for: Option<ChartSlot>,
}

impl NullDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `mount` for `slot` fail.
    pub fn reject_mounts_for(&mut self, slot: ChartSlot) {
        self.reject_mounts_for = Some(slot);
    }

    #[must_use]
    pub fn mount_count(&self, slot: ChartSlot) -> usize {
        self.mounted.iter().filter(|s| **s == slot).count()
    }

    #[must_use]
    pub fn apply_count(&self, slot: ChartSlot) -> usize {
        self.applied.iter().filter(|s| **s == slot).count()
    }

    #[must_use]
    pub fn total_applies(&self) -> usize {
        self.applied.len()
    }
}

impl RenderDriver for NullDriver {
    fn mount(&mut self, instance: &ChartInstance) -> DashboardResult<()> {
        if self.reject_mounts_for == Some(instance.slot()) {
            return Err(DashboardError::Reconciliation {
                slot: instance.slot(),
                reason: "driver rejected mount".to_owned(),
            });
        }
        self.mounted.push(instance.slot());
        Ok(())
    }

    fn apply(&mut self, instance: &ChartInstance) {
        self.applied.push(instance.slot());
    }
}
