//! Time Source Abstraction
//!
//! The control loop reads the clock exactly once per iteration and measures
//! both of its cadences against that single reading.
//!
//! ## Common Implementations
//!
//! - `FixedTime`: manually driven clock for tests
//! - A hardware tick counter on the target (e.g. `millis()` equivalents)
//! - `std::time::Instant` truncated to 32 bits on a host

use crate::time::Millis;

/// Monotonic millisecond clock
///
/// ## Implementation Requirements
///
/// - Values count milliseconds since an arbitrary boot instant
/// - The counter is allowed to wrap at `u32::MAX`; consumers only ever
///   take wrapping differences
/// - Reading the clock must not block
///
/// ## Example Implementation
///
/// ```rust
/// use hermes_core::traits::TimeSource;
/// use hermes_core::time::Millis;
///
/// struct SysTick {
///     ticks: u64,
/// }
///
/// impl TimeSource for SysTick {
///     fn now_ms(&self) -> Millis {
///         // 1 kHz tick, truncated to the 32-bit counter width
///         self.ticks as Millis
///     }
/// }
/// ```
pub trait TimeSource {
    /// Current milliseconds since boot
    fn now_ms(&self) -> Millis;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}
