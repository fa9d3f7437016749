use std::time::{Duration, Instant};

/// Outcome of handing one refresh request to the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerDecision {
    /// First request in a silent period: run the pipeline immediately.
    RunNow,
    /// Request arrived inside the cooldown window: coalesced into the single
    /// trailing execution at the window's end.
    Coalesced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Idle,
    /// Cooldown window open until `until`; `trailing` records whether a
    /// coalesced execution is scheduled for the window's end.
    Cooldown { until: Instant, trailing: bool },
}

/// Leading-edge debounce for the fetch-and-render pipeline.
///
/// An explicit state machine rather than closure state: the host event loop
/// supplies the clock through [`on_trigger`](Self::on_trigger) and
/// [`poll`](Self::poll), so there is no timer thread to race against and
/// every transition is deterministic. At most one pipeline execution happens
/// per cooldown window, plus the immediate leading execution that opened it.
#[derive(Debug, Clone)]
pub struct RefreshDebounce {
    window: Duration,
    state: DebounceState,
    generation: u64,
}

impl RefreshDebounce {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1000);

    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: DebounceState::Idle,
            generation: 0,
        }
    }

    /// Handles one refresh request at `now`.
    ///
    /// A request that finds a due-but-unpolled trailing execution merges with
    /// it into one immediate run; no request is ever silently dropped.
    pub fn on_trigger(&mut self, now: Instant) -> TriggerDecision {
        self.settle(now);
        match self.state {
            DebounceState::Idle => {
                self.open_window(now);
                TriggerDecision::RunNow
            }
            DebounceState::Cooldown { until, .. } if now >= until => {
                self.open_window(now);
                TriggerDecision::RunNow
            }
            DebounceState::Cooldown { until, .. } => {
                self.state = DebounceState::Cooldown {
                    until,
                    trailing: true,
                };
                TriggerDecision::Coalesced
            }
        }
    }

    /// Fires a due trailing execution.
    ///
    /// Returns `true` when a coalesced execution is due at `now`; the caller
    /// runs the pipeline once and a fresh cooldown window opens.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            DebounceState::Cooldown {
                until,
                trailing: true,
            } if now >= until => {
                self.open_window(now);
                true
            }
            _ => {
                self.settle(now);
                false
            }
        }
    }

    /// Drops any pending trailing execution, e.g. on view teardown.
    pub fn cancel(&mut self) {
        self.state = DebounceState::Idle;
    }

    /// Re-derives the debounced identity after the underlying pipeline
    /// definition changed. Pending work scheduled against the old definition
    /// is dropped; the next trigger is a fresh leading edge.
    pub fn rebind(&mut self) {
        self.generation += 1;
        self.state = DebounceState::Idle;
    }

    /// Identity of the current pipeline binding; bumped by `rebind`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` while a coalesced trailing execution waits for its window end.
    #[must_use]
    pub fn trailing_pending(&self) -> bool {
        matches!(
            self.state,
            DebounceState::Cooldown { trailing: true, .. }
        )
    }

    fn open_window(&mut self, now: Instant) {
        self.state = DebounceState::Cooldown {
            until: now + self.window,
            trailing: false,
        };
    }

    /// Collapses an expired cooldown with no trailing work back to idle.
    fn settle(&mut self, now: Instant) {
        if let DebounceState::Cooldown {
            until,
            trailing: false,
        } = self.state
        {
            if now >= until {
                self.state = DebounceState::Idle;
            }
        }
    }
}

impl Default for RefreshDebounce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{RefreshDebounce, TriggerDecision};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn burst_runs_leading_then_single_trailing() {
        let mut debounce = RefreshDebounce::new(ms(1000));
        let t0 = Instant::now();

        assert_eq!(debounce.on_trigger(t0), TriggerDecision::RunNow);
        assert_eq!(debounce.on_trigger(t0 + ms(100)), TriggerDecision::Coalesced);
        assert_eq!(debounce.on_trigger(t0 + ms(300)), TriggerDecision::Coalesced);

        assert!(!debounce.poll(t0 + ms(700)));
        assert!(debounce.trailing_pending());
        assert!(debounce.poll(t0 + ms(1000)));
        assert!(!debounce.trailing_pending());
        assert!(!debounce.poll(t0 + ms(1100)));
    }

    #[test]
    fn lone_trigger_runs_immediately_without_trailing() {
        let mut debounce = RefreshDebounce::new(ms(1000));
        let t0 = Instant::now();

        assert_eq!(debounce.on_trigger(t0), TriggerDecision::RunNow);
        assert!(!debounce.poll(t0 + ms(1000)));
        assert!(!debounce.poll(t0 + ms(2000)));
    }

    #[test]
    fn trigger_after_expired_window_is_a_fresh_leading_edge() {
        let mut debounce = RefreshDebounce::new(ms(1000));
        let t0 = Instant::now();

        assert_eq!(debounce.on_trigger(t0), TriggerDecision::RunNow);
        assert_eq!(debounce.on_trigger(t0 + ms(1500)), TriggerDecision::RunNow);
    }

    #[test]
    fn due_trailing_merges_with_late_trigger_into_one_run() {
        let mut debounce = RefreshDebounce::new(ms(1000));
        let t0 = Instant::now();

        assert_eq!(debounce.on_trigger(t0), TriggerDecision::RunNow);
        assert_eq!(debounce.on_trigger(t0 + ms(200)), TriggerDecision::Coalesced);

        // Host never polled; the pending trailing and the late trigger merge.
        assert_eq!(debounce.on_trigger(t0 + ms(1500)), TriggerDecision::RunNow);
        assert!(!debounce.trailing_pending());
        assert!(!debounce.poll(t0 + ms(1600)));
    }

    #[test]
    fn cancel_drops_pending_trailing() {
        let mut debounce = RefreshDebounce::new(ms(1000));
        let t0 = Instant::now();

        debounce.on_trigger(t0);
        debounce.on_trigger(t0 + ms(100));
        assert!(debounce.trailing_pending());

        debounce.cancel();
        assert!(!debounce.trailing_pending());
        assert!(!debounce.poll(t0 + ms(1000)));
    }

    #[test]
    fn rebind_bumps_generation_and_drops_pending_work() {
        let mut debounce = RefreshDebounce::new(ms(1000));
        let t0 = Instant::now();

        debounce.on_trigger(t0);
        debounce.on_trigger(t0 + ms(100));
        assert_eq!(debounce.generation(), 0);

        debounce.rebind();
        assert_eq!(debounce.generation(), 1);
        assert!(!debounce.poll(t0 + ms(1000)));
        // Next trigger after rebind is leading again.
        assert_eq!(debounce.on_trigger(t0 + ms(1100)), TriggerDecision::RunNow);
    }

    #[test]
    fn trailing_run_opens_a_fresh_cooldown_window() {
        let mut debounce = RefreshDebounce::new(ms(1000));
        let t0 = Instant::now();

        debounce.on_trigger(t0);
        debounce.on_trigger(t0 + ms(100));
        assert!(debounce.poll(t0 + ms(1000)));

        // Still inside the window opened by the trailing run.
        assert_eq!(debounce.on_trigger(t0 + ms(1200)), TriggerDecision::Coalesced);
        assert!(debounce.poll(t0 + ms(2000)));
    }
}
