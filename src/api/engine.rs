use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::core::{SlotPlan, Snapshot};
use crate::error::DashboardResult;
use crate::fetch::{FilterParams, SnapshotTransport};
use crate::render::{ContainerHost, RenderDriver};

use super::{RefreshDebounce, SlotRegistry, TriggerDecision, reconcile, standard_slots};

type Planner = Box<dyn Fn(&Snapshot) -> SlotPlan>;

/// Configuration for [`DashboardEngine`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardConfig {
    pub cooldown: Option<Duration>,
    pub filter: FilterParams,
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh cooldown window; defaults to [`RefreshDebounce::DEFAULT_WINDOW`].
    #[must_use]
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterParams) -> Self {
        self.filter = filter;
        self
    }
}

/// Facade over the full trigger → fetch → plan → reconcile pipeline.
///
/// The engine owns the slot registry, the debounce state, the planner and the
/// active filter, and runs entirely on the caller's thread: suspension exists
/// only at the transport boundary, and the registry is mutated from nowhere
/// else, so no locking is involved. Container presence is never cached; the
/// host is queried per reconciliation pass.
///
/// If debouncing is bypassed (`refresh_now`, or snapshots applied directly),
/// overlapping cycles race on the registry and whichever cycle completes last
/// wins, per slot. That race is accepted and documented; the engine does not
/// queue.
pub struct DashboardEngine<T: SnapshotTransport, D: RenderDriver> {
    transport: T,
    driver: D,
    registry: SlotRegistry,
    debounce: RefreshDebounce,
    planner: Planner,
    filter: FilterParams,
    snapshot: Option<Snapshot>,
    last_updated: Option<DateTime<Utc>>,
    loading: bool,
}

impl<T: SnapshotTransport, D: RenderDriver> DashboardEngine<T, D> {
    #[must_use]
    pub fn new(transport: T, driver: D, config: DashboardConfig) -> Self {
        let window = config.cooldown.unwrap_or(RefreshDebounce::DEFAULT_WINDOW);
        Self {
            transport,
            driver,
            registry: SlotRegistry::new(),
            debounce: RefreshDebounce::new(window),
            planner: Box::new(standard_slots),
            filter: config.filter,
            snapshot: None,
            last_updated: None,
            loading: false,
        }
    }

    /// Debounced refresh entry point for initial load and filter changes.
    ///
    /// Returns `Ok(true)` when a fetch-and-render cycle ran, `Ok(false)` when
    /// the request was coalesced into the pending trailing execution. Fetch
    /// failures propagate for the caller's error reporter; the charts keep
    /// their last rendered state.
    pub fn refresh(
        &mut self,
        containers: &dyn ContainerHost,
        now: Instant,
    ) -> DashboardResult<bool> {
        match self.debounce.on_trigger(now) {
            TriggerDecision::RunNow => {
                self.run_cycle(containers)?;
                Ok(true)
            }
            TriggerDecision::Coalesced => Ok(false),
        }
    }

    /// Fires a due coalesced refresh, if any. The host event loop calls this
    /// on its tick; no timer thread exists.
    pub fn poll(&mut self, containers: &dyn ContainerHost, now: Instant) -> DashboardResult<bool> {
        if self.debounce.poll(now) {
            self.run_cycle(containers)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Runs one fetch-and-render cycle immediately, bypassing the debouncer.
    pub fn refresh_now(&mut self, containers: &dyn ContainerHost) -> DashboardResult<()> {
        self.run_cycle(containers)
    }

    /// Reconciles an already-fetched snapshot onto the registry, replacing
    /// the previous snapshot wholesale.
    pub fn apply_snapshot(
        &mut self,
        containers: &dyn ContainerHost,
        snapshot: Snapshot,
    ) -> DashboardResult<()> {
        let plan = (self.planner)(&snapshot);
        reconcile(&mut self.registry, containers, &mut self.driver, &plan)?;
        self.snapshot = Some(snapshot);
        self.last_updated = Some(Utc::now());
        Ok(())
    }

    /// Replaces the active filter and re-derives the debounced pipeline:
    /// pending work scheduled against the old filter is dropped.
    pub fn set_filter(&mut self, filter: FilterParams) {
        self.filter = filter;
        self.debounce.rebind();
    }

    /// Replaces the slot planner and re-derives the debounced pipeline.
    pub fn set_planner(&mut self, planner: impl Fn(&Snapshot) -> SlotPlan + 'static) {
        self.planner = Box::new(planner);
        self.debounce.rebind();
    }

    /// Drops a pending trailing refresh without touching chart state.
    pub fn cancel_pending(&mut self) {
        self.debounce.cancel();
    }

    /// Tears the view down: cancels pending work and disposes every chart
    /// instance.
    pub fn teardown(&mut self) {
        self.debounce.cancel();
        self.registry.dispose_all();
    }

    #[must_use]
    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    #[must_use]
    pub fn filter(&self) -> &FilterParams {
        &self.filter
    }

    /// Last successfully applied snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// When the current snapshot was applied, for the view's caption.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// `true` while a fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn trailing_pending(&self) -> bool {
        self.debounce.trailing_pending()
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    #[must_use]
    pub fn into_driver(self) -> D {
        self.driver
    }

    fn run_cycle(&mut self, containers: &dyn ContainerHost) -> DashboardResult<()> {
        self.loading = true;
        let fetched = self.transport.fetch(&self.filter);
        self.loading = false;

        match fetched {
            Ok(snapshot) => self.apply_snapshot(containers, snapshot),
            Err(err) => {
                warn!(error = %err, "snapshot fetch failed; charts keep last rendered state");
                Err(err.into())
            }
        }
    }
}
