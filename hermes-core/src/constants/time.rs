//! Control Loop Timing
//!
//! The loop runs two cadences off the same monotonic millisecond clock: a short
//! poll interval that always services the status indicator, and a coarse
//! acquisition period that gates a full telemetry cycle.

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Default poll interval of the control loop (milliseconds).
///
/// Short enough that the fastest indicator toggle (100 ms) is rendered on time.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// Default acquisition period (milliseconds).
///
/// One full acquire, classify, build and emit cycle every 5 seconds.
pub const DEFAULT_SAMPLE_PERIOD_MS: u32 = 5000;
