use indexmap::IndexMap;

use crate::core::{ChartInstance, ChartSlot};

/// Owner of all live chart instances, keyed by slot.
///
/// At most one instance exists per slot at any time. Instances are created by
/// the reconciler and live until the registry is disposed with the enclosing
/// view; the registry never drops an instance on its own.
#[derive(Debug, Default)]
pub struct SlotRegistry {
    instances: IndexMap<ChartSlot, ChartInstance>,
}

impl SlotRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, slot: ChartSlot) -> Option<&ChartInstance> {
        self.instances.get(&slot)
    }

    pub fn get_mut(&mut self, slot: ChartSlot) -> Option<&mut ChartInstance> {
        self.instances.get_mut(&slot)
    }

    #[must_use]
    pub fn contains(&self, slot: ChartSlot) -> bool {
        self.instances.contains_key(&slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Instances in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ChartInstance> {
        self.instances.values()
    }

    /// Registers a freshly created instance.
    ///
    /// Registering a slot that already holds an instance is a reconciler
    /// logic error: development builds assert, release builds keep the
    /// existing instance and ignore the new one.
    pub fn register(&mut self, instance: ChartInstance) {
        let slot = instance.slot();
        debug_assert!(
            !self.instances.contains_key(&slot),
            "slot `{slot}` already registered"
        );
        self.instances.entry(slot).or_insert(instance);
    }

    /// Drops every instance. Called when the enclosing view is torn down.
    pub fn dispose_all(&mut self) {
        self.instances.clear();
    }
}
