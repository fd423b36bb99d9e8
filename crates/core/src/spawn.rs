//! Spawn scheduler - periodic spawn requests driven by elapsed game time.
//!
//! Works like an auto-repeat accumulator: elapsed time piles up and every full
//! interval in the pile is one spawn request.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnScheduler {
    interval_ms: u32,
    accumulator_ms: u32,
    running: bool,
}

impl SpawnScheduler {
    /// A stopped scheduler with the given interval.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
            running: false,
        }
    }

    /// Start (or restart) the periodic timer. The first request fires one
    /// full interval from now.
    pub fn start(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.accumulator_ms = 0;
        self.running = true;
    }

    /// Replace the running timer with one at `interval_ms`.
    ///
    /// The old timer's partial interval is discarded and the new one starts
    /// from zero, so the boundary that was pending neither fires now nor
    /// fires twice. A stopped scheduler stays stopped with the new interval.
    pub fn reconfigure(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.accumulator_ms = 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time left until the next request, if running.
    pub fn until_next_ms(&self) -> Option<u32> {
        self.running
            .then(|| self.interval_ms.saturating_sub(self.accumulator_ms))
    }

    /// Advance by `elapsed_ms`; returns how many spawn requests fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let fired = self.accumulator_ms / self.interval_ms;
        self.accumulator_ms %= self.interval_ms;
        fired
    }
}
