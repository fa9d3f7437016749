use tracing::{debug, trace};

use crate::core::{ChartInstance, SlotDescriptor};
use crate::error::{DashboardError, DashboardResult};
use crate::render::{ContainerHost, RenderDriver};

use super::SlotRegistry;

/// Brings chart instances into agreement with one snapshot's slot plan.
///
/// For each descriptor, independently: skip when the slot's container is
/// absent (containers can be mode-gated, so absence is an expected state and
/// the slot is left exactly as-is); otherwise create the instance on first
/// sight or reuse the existing one, then replace its dataset and options
/// wholesale and push the update through the driver. Slots are independent by
/// design, so processing order never affects the outcome.
///
/// A mount failure propagates unchanged and leaves the failed slot
/// unregistered; creation is retried on the next pass.
pub fn reconcile<D: RenderDriver>(
    registry: &mut SlotRegistry,
    containers: &dyn ContainerHost,
    driver: &mut D,
    descriptors: &[SlotDescriptor],
) -> DashboardResult<()> {
    let mut created = 0_usize;
    let mut updated = 0_usize;
    let mut skipped = 0_usize;

    for descriptor in descriptors {
        let slot = descriptor.slot;
        let Some(surface) = containers.surface(slot) else {
            trace!(%slot, "container absent, slot left untouched");
            skipped += 1;
            continue;
        };

        descriptor.data.validate()?;

        if registry.contains(slot) {
            // Chart kind is fixed at creation; a differing descriptor kind is
            // ignored on reuse.
            updated += 1;
        } else {
            let instance = ChartInstance::new(slot, descriptor.kind, surface);
            driver.mount(&instance)?;
            registry.register(instance);
            created += 1;
        }

        let instance = registry
            .get_mut(slot)
            .ok_or_else(|| DashboardError::Reconciliation {
                slot,
                reason: "instance missing after registration".to_owned(),
            })?;
        instance.rebind(descriptor.data.clone(), descriptor.options.clone());
        driver.apply(instance);
        trace!(%slot, kind = ?instance.kind(), "slot reconciled");
    }

    debug!(created, updated, skipped, "reconciled slot plan");
    Ok(())
}
