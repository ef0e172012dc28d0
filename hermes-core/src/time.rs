//! Time management for the control loop
//!
//! The node has a single monotonic millisecond counter, started at boot.
//! It is a fixed-width 32-bit value, like the tick counters found on
//! most microcontrollers, and wraps after roughly 49.7 days. Every
//! interval in the engine is therefore measured with wrapping subtraction,
//! never by comparing two raw timestamps.

/// Milliseconds since boot, wrapping at `u32::MAX`
pub type Millis = u32;

/// Elapsed milliseconds from `since` to `now`, tolerating counter wraparound
///
/// A reading taken just after the counter overflowed is numerically smaller
/// than one taken just before, but the unsigned difference is still correct:
///
/// ```rust
/// use hermes_core::time::elapsed;
///
/// assert_eq!(elapsed(1_500, 1_000), 500);
/// assert_eq!(elapsed(49, u32::MAX - 50), 100);
/// ```
#[inline]
pub const fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

pub use crate::traits::TimeSource;

/// Manually driven time source for tests and replays
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Millis,
}

impl FixedTime {
    pub fn new(timestamp: Millis) -> Self {
        Self { timestamp }
    }

    pub fn set(&mut self, timestamp: Millis) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward, wrapping like the hardware counter
    pub fn advance(&mut self, ms: Millis) {
        self.timestamp = self.timestamp.wrapping_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now_ms(&self) -> Millis {
        self.timestamp
    }
}

/// Gate for a recurring action with a fixed period
///
/// The timer starts armed at the boot instant, so the first action is due
/// one full period after `start`. It is restarted from the instant the
/// action actually ran, not from the ideal schedule, so a late poll
/// delays the following period instead of bunching two together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTimer {
    period: Millis,
    last: Millis,
}

impl PeriodicTimer {
    /// Create a timer whose first expiry is `period` after `start`
    pub const fn new(period: Millis, start: Millis) -> Self {
        Self { period, last: start }
    }

    /// Configured period in milliseconds
    pub const fn period(&self) -> Millis {
        self.period
    }

    /// Instant the timer was last restarted
    pub const fn last(&self) -> Millis {
        self.last
    }

    /// True once at least one period has elapsed since the last restart
    pub fn is_due(&self, now: Millis) -> bool {
        elapsed(now, self.last) >= self.period
    }

    /// Restart the period from `now`
    pub fn restart(&mut self, now: Millis) {
        self.last = now;
    }

    /// Restart and report whether the timer had expired
    pub fn poll(&mut self, now: Millis) -> bool {
        if self.is_due(now) {
            self.restart(now);
            true
        } else {
            false
        }
    }
}
