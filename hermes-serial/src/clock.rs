//! Monotonic millisecond clock for host builds

use std::time::Instant;

use hermes_core::time::Millis;
use hermes_core::traits::TimeSource;

/// Milliseconds since construction, wrapping at `u32::MAX` like a board counter
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    boot: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self { boot: Instant::now() }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for StdClock {
    fn now_ms(&self) -> Millis {
        // Truncation is the wrap
        self.boot.elapsed().as_millis() as Millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_near_zero_and_moves_forward() {
        let clock = StdClock::new();
        let first = clock.now_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = clock.now_ms();
        assert!(first < 1_000);
        assert!(second >= first + 5);
    }
}
