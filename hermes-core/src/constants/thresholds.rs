//! Normal Operating Thresholds
//!
//! Each signal is compared against a closed interval. A reading inside the
//! interval (bounds included) is OK, anything else raises an alert for that
//! signal. The bands describe the environment a rotating machine cabinet is
//! expected to sit in, not the physical limits of the sensors.

// ===== TEMPERATURE =====

/// Lowest cabinet temperature considered normal (°C).
///
/// Below this, condensation and lubricant viscosity become a concern.
pub const TEMP_MIN_NORMAL_C: f32 = 15.0;

/// Highest cabinet temperature considered normal (°C).
///
/// Above this, bearing and winding temperatures leave their rated range.
pub const TEMP_MAX_NORMAL_C: f32 = 35.0;

// ===== HUMIDITY =====

/// Lowest relative humidity considered normal (%RH).
///
/// Dry air favours electrostatic discharge on exposed electronics.
pub const HUMIDITY_MIN_NORMAL_PCT: f32 = 30.0;

/// Highest relative humidity considered normal (%RH).
pub const HUMIDITY_MAX_NORMAL_PCT: f32 = 70.0;

// ===== LIGHT =====

/// Lowest light level considered normal (raw ADC counts).
///
/// A dark cabinet usually means a failed enclosure lamp or an open door
/// sensor blocked by debris.
pub const LIGHT_MIN_NORMAL: i32 = 200;

/// Highest light level considered normal (raw ADC counts).
pub const LIGHT_MAX_NORMAL: i32 = 800;

// ===== VIBRATION =====

/// Highest vibration intensity considered normal (raw ADC counts).
///
/// There is no lower bound: a quiet machine is never an alert.
pub const VIBRATION_MAX_NORMAL: i32 = 500;
