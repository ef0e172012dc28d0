//! Status Indicator Cadence
//!
//! A status is rendered as a burst of blink cycles. One cycle is two
//! transitions (lit, then dark).

/// Transitions per blink cycle (on, then off).
pub const TRANSITIONS_PER_CYCLE: u8 = 2;

/// Blink cycles rendered for a Normal status.
pub const NORMAL_BLINK_CYCLES: u8 = 1;

/// Blink cycles rendered for an Attention status.
pub const ATTENTION_BLINK_CYCLES: u8 = 2;

/// Blink cycles rendered for a Critical status.
pub const CRITICAL_BLINK_CYCLES: u8 = 5;

/// Interval between toggles while rendering Attention (milliseconds).
///
/// Deliberately slower than the other patterns. Do not unify.
pub const ATTENTION_TOGGLE_INTERVAL_MS: u32 = 150;

/// Interval between toggles for every other pattern (milliseconds).
pub const DEFAULT_TOGGLE_INTERVAL_MS: u32 = 100;
