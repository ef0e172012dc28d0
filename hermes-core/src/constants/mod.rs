//! Constants for the Hermes Telemetry Engine
//!
//! Every numeric value the engine depends on is defined here, next to a short
//! note on where it comes from. Nothing in the rest of the crate should carry
//! a bare literal for a threshold, a period or a range.
//!
//! ## Organization
//!
//! - **Thresholds**: normal operating bands used by the health classifier
//! - **Time**: control loop poll interval and acquisition period
//! - **Buffers**: sliding window size and bounded text capacities
//! - **Indicator**: blink pattern lengths and toggle cadence
//! - **Substitution**: fallback ranges for unavailable sensor readings
//! - **Device**: identity and hardware ranges of the reference node

/// Normal operating bands for each monitored signal.
pub mod thresholds;

/// Control loop timing.
pub mod time;

/// Window sizes and fixed capacities.
pub mod buffers;

/// Status indicator cadence.
pub mod indicator;

/// Fallback value ranges for unavailable sensors.
pub mod substitution;

/// Device identity and hardware limits.
pub mod device;

pub use thresholds::{
    TEMP_MIN_NORMAL_C, TEMP_MAX_NORMAL_C,
    HUMIDITY_MIN_NORMAL_PCT, HUMIDITY_MAX_NORMAL_PCT,
    LIGHT_MIN_NORMAL, LIGHT_MAX_NORMAL, VIBRATION_MAX_NORMAL,
};

pub use time::{MS_PER_SECOND, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SAMPLE_PERIOD_MS};

pub use buffers::{MOVING_AVERAGE_WINDOW, STATUS_DETAIL_CAPACITY};

pub use device::{DEFAULT_DEVICE_ID, DEFAULT_FIRMWARE_VERSION};
