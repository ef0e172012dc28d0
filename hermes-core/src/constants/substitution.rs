//! Fallback Ranges for Unavailable Sensors
//!
//! When the temperature/humidity sensor reports no value, the engine keeps the
//! telemetry stream alive with a uniformly distributed stand-in drawn from
//! `[center - span, center + span)`. This is a simulation fallback for bench
//! and demo setups, not an estimate of the missing reading.
//!
//! The ranges are empirical and carry no derivation.

/// Center of the substituted temperature range (°C).
pub const SUBSTITUTE_TEMPERATURE_CENTER_C: f32 = 20.0;

/// Half-width of the substituted temperature range (°C).
pub const SUBSTITUTE_TEMPERATURE_SPAN_C: f32 = 15.0;

/// Center of the substituted humidity range (%RH).
pub const SUBSTITUTE_HUMIDITY_CENTER_PCT: f32 = 50.0;

/// Half-width of the substituted humidity range (%RH).
pub const SUBSTITUTE_HUMIDITY_SPAN_PCT: f32 = 30.0;

/// Default seed of the substitution noise generator.
pub const DEFAULT_NOISE_SEED: u32 = 0x2545_F491;
