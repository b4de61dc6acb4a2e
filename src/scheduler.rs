//! Cadence bookkeeping for the game tick and autosave.
//!
//! The scheduler owns no thread and never sleeps; the host loop polls
//! it with the current instant and receives the list of tasks that have
//! come due. Each task fires at a fixed interval measured from the
//! previous firing, so a slow poll produces at most one firing per
//! interval elapsed.

use crate::constants::{AUTOSAVE_INTERVAL_MS, TICK_INTERVAL_MS};
use std::time::{Duration, Instant};

/// Work the host loop is expected to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Advance passive accrual by one tick.
    Tick,
    /// Persist the current state.
    Autosave,
}

/// Tracks when the tick and autosave last fired.
pub struct Scheduler {
    tick_interval: Duration,
    autosave_interval: Duration,
    last_tick: Instant,
    last_autosave: Instant,
    running: bool,
}

impl Scheduler {
    /// Scheduler with the standard cadences, anchored at `now`. Nothing
    /// is due until a full interval has elapsed.
    pub fn new(now: Instant) -> Self {
        Self::with_intervals(
            now,
            Duration::from_millis(TICK_INTERVAL_MS),
            Duration::from_millis(AUTOSAVE_INTERVAL_MS),
        )
    }

    /// Explicit cadences (used by tests).
    pub fn with_intervals(now: Instant, tick_interval: Duration, autosave_interval: Duration) -> Self {
        Self {
            tick_interval,
            autosave_interval,
            last_tick: now,
            last_autosave: now,
            running: true,
        }
    }

    /// Returns every task due at `now`, at most once each per poll.
    /// A stopped scheduler returns nothing.
    pub fn poll_at(&mut self, now: Instant) -> Vec<ScheduledTask> {
        let mut due = Vec::new();
        if !self.running {
            return due;
        }

        if now.duration_since(self.last_tick) >= self.tick_interval {
            self.last_tick = now;
            due.push(ScheduledTask::Tick);
        }
        if now.duration_since(self.last_autosave) >= self.autosave_interval {
            self.last_autosave = now;
            due.push(ScheduledTask::Autosave);
        }
        due
    }

    /// Stops both cadences. Subsequent polls yield nothing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
