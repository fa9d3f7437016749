use proptest::prelude::*;

use wardview::api::{SlotRegistry, reconcile, standard_slots};
use wardview::core::{ChartSlot, Snapshot};
use wardview::render::{ChartSurface, NullDriver, StaticContainers};

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    prop::collection::vec(prop::option::of(0.0f64..=100.0), 1..12).prop_map(|points| {
        let months = (1..=points.len()).map(|i| format!("M{i}")).collect();
        Snapshot::new(months)
            .with_series("stroke_unit_access", points)
            .with_metric("stroke_unit_access_percentage", 50.0)
    })
}

proptest! {
    #[test]
    fn reconciling_twice_equals_reconciling_once(snapshot in snapshot_strategy()) {
        let containers = StaticContainers::new()
            .with_surface(ChartSlot::StrokeUnitAccess, ChartSurface::new(1));
        let mut registry = SlotRegistry::new();
        let mut driver = NullDriver::new();
        let plan = standard_slots(&snapshot);

        reconcile(&mut registry, &containers, &mut driver, &plan).expect("first pass");
        let instance = registry.get(ChartSlot::StrokeUnitAccess).expect("instance");
        let data_after_one = instance.data().clone();
        let options_after_one = instance.options().clone();

        reconcile(&mut registry, &containers, &mut driver, &plan).expect("second pass");
        let instance = registry.get(ChartSlot::StrokeUnitAccess).expect("instance");
        prop_assert_eq!(registry.len(), 1);
        prop_assert_eq!(instance.data(), &data_after_one);
        prop_assert_eq!(instance.options(), &options_after_one);
        prop_assert_eq!(driver.mount_count(ChartSlot::StrokeUnitAccess), 1);
    }

    #[test]
    fn absent_container_is_a_complete_no_op(snapshot in snapshot_strategy()) {
        let containers = StaticContainers::new();
        let mut registry = SlotRegistry::new();
        let mut driver = NullDriver::new();
        let plan = standard_slots(&snapshot);

        reconcile(&mut registry, &containers, &mut driver, &plan).expect("pass");
        prop_assert!(registry.is_empty());
        prop_assert_eq!(driver.total_applies(), 0);
        prop_assert_eq!(driver.mount_count(ChartSlot::StrokeUnitAccess), 0);
    }
}
