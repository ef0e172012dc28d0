//! Window Sizes and Fixed Capacities
//!
//! All storage in the engine is sized at compile time.

/// Number of samples in the moving-average window.
///
/// 12 readings at the default 5 s period cover one minute of history.
pub const MOVING_AVERAGE_WINDOW: usize = 12;

/// Capacity of the status detail text (bytes).
///
/// The longest detail, all four signals joined with `", "`, is 39 bytes.
pub const STATUS_DETAIL_CAPACITY: usize = 48;
