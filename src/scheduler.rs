//! Tick scheduling between the animation and its host.
//!
//! The animation never loops on its own: each tick ends by requesting the next one, and the host
//! decides when (and whether) a requested tick actually runs.

use tracing::trace;

/// A source of refresh-aligned ticks.
pub trait Scheduler {
    /// Asks for one more tick at the next opportunity.
    fn request_next_tick(&mut self);

    /// Consumes an outstanding request, returning whether a tick should run now.
    fn tick_due(&mut self) -> bool;
}

/// The production scheduler: the host checks it once per display refresh.
#[derive(Debug, Default)]
pub struct RefreshScheduler {
    pending: bool,
    requests: u64,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total requests received since creation.
    pub fn requests(&self) -> u64 {
        self.requests
    }
}

impl Scheduler for RefreshScheduler {
    fn request_next_tick(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    fn tick_due(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Delivers exactly `budget` ticks, then reports none due regardless of further requests.
///
/// Lets a fixed number of ticks be driven deterministically, without a display.
#[derive(Debug)]
pub struct FixedTicks {
    remaining: u64,
    delivered: u64,
    pending: bool,
}

impl FixedTicks {
    pub fn new(budget: u64) -> Self {
        Self {
            remaining: budget,
            delivered: 0,
            pending: false,
        }
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Whether a request is waiting, even if the budget is spent.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Scheduler for FixedTicks {
    fn request_next_tick(&mut self) {
        self.pending = true;
    }

    fn tick_due(&mut self) -> bool {
        if !self.pending || self.remaining == 0 {
            if self.pending {
                trace!(delivered = self.delivered, "Tick budget exhausted");
            }
            return false;
        }

        self.pending = false;
        self.remaining -= 1;
        self.delivered += 1;
        true
    }
}
