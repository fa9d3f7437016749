//! Concurrent fetch cycles that bypass the debouncer race on the registry.
//! The accepted resolution is last-write-wins per slot: whichever cycle
//! completes reconciliation last is the one reflected, regardless of fetch
//! start order.

use wardview::api::{DashboardConfig, DashboardEngine};
use wardview::core::{ChartSlot, Snapshot};
use wardview::fetch::ScriptedTransport;
use wardview::render::{ChartSurface, NullDriver, StaticContainers};

fn snapshot(value: f64) -> Snapshot {
    Snapshot::new(vec!["Jan".to_owned(), "Feb".to_owned()])
        .with_series("stroke_unit_access", vec![Some(value), Some(value + 10.0)])
        .with_metric("stroke_unit_access_percentage", value)
}

fn containers() -> StaticContainers {
    StaticContainers::new().with_surface(ChartSlot::StrokeUnitAccess, ChartSurface::new(1))
}

#[test]
fn later_completed_reconciliation_wins_even_if_fetched_earlier() {
    let containers = containers();
    let mut engine =
        DashboardEngine::new(ScriptedTransport::new(), NullDriver::new(), DashboardConfig::new());

    // Fetch A started first but its response lands last: B's reconciliation
    // completes, then A's does.
    let snapshot_a = snapshot(60.0);
    let snapshot_b = snapshot(80.0);
    engine.apply_snapshot(&containers, snapshot_b).expect("apply B");
    engine.apply_snapshot(&containers, snapshot_a).expect("apply A");

    let instance = engine
        .registry()
        .get(ChartSlot::StrokeUnitAccess)
        .expect("instance");
    assert_eq!(instance.data().series[0].points, vec![Some(60.0), Some(70.0)]);
    assert_eq!(engine.snapshot().and_then(|s| s.metric("stroke_unit_access_percentage")), Some(60.0));
}

#[test]
fn reversed_arrival_order_reverses_the_winner() {
    let containers = containers();
    let mut engine =
        DashboardEngine::new(ScriptedTransport::new(), NullDriver::new(), DashboardConfig::new());

    let snapshot_a = snapshot(60.0);
    let snapshot_b = snapshot(80.0);
    engine.apply_snapshot(&containers, snapshot_a).expect("apply A");
    engine.apply_snapshot(&containers, snapshot_b).expect("apply B");

    let instance = engine
        .registry()
        .get(ChartSlot::StrokeUnitAccess)
        .expect("instance");
    assert_eq!(instance.data().series[0].points, vec![Some(80.0), Some(90.0)]);
}

#[test]
fn racing_cycles_still_construct_the_chart_only_once() {
    let containers = containers();
    let mut engine =
        DashboardEngine::new(ScriptedTransport::new(), NullDriver::new(), DashboardConfig::new());

    engine.apply_snapshot(&containers, snapshot(60.0)).expect("apply");
    engine.apply_snapshot(&containers, snapshot(80.0)).expect("apply");
    engine.apply_snapshot(&containers, snapshot(40.0)).expect("apply");

    assert_eq!(engine.driver().mount_count(ChartSlot::StrokeUnitAccess), 1);
    assert_eq!(engine.driver().apply_count(ChartSlot::StrokeUnitAccess), 3);
    assert_eq!(engine.registry().len(), 1);
}
