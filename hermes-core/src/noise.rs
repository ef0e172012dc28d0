//! Substitution Noise for Unavailable Readings
//!
//! When the temperature/humidity sensor does not answer, the control loop
//! does not abort the cycle and does not emit a partial record. It replaces
//! the missing value with a uniformly distributed stand-in drawn from a
//! configured range, so a bench node without its sensor still produces a
//! live telemetry stream. The stand-in is not an estimate of the real
//! value, and a persistently missing sensor is never escalated.
//!
//! The generator is a 32-bit linear congruential generator, deterministic
//! for a given seed.

use crate::constants::substitution::{
    SUBSTITUTE_HUMIDITY_CENTER_PCT, SUBSTITUTE_HUMIDITY_SPAN_PCT,
    SUBSTITUTE_TEMPERATURE_CENTER_C, SUBSTITUTE_TEMPERATURE_SPAN_C,
};

/// Uniform range `[center - span, center + span)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseRange {
    pub center: f32,
    pub span: f32,
}

impl NoiseRange {
    pub const fn new(center: f32, span: f32) -> Self {
        Self { center, span }
    }

    pub fn min(&self) -> f32 {
        self.center - self.span
    }

    pub fn max(&self) -> f32 {
        self.center + self.span
    }

    /// A usable range has a finite center and a finite, non-negative span
    pub fn is_valid(&self) -> bool {
        self.center.is_finite() && self.span.is_finite() && self.span >= 0.0
    }
}

/// Stand-in ranges for the two continuous channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstitutionRanges {
    pub temperature: NoiseRange,
    pub humidity: NoiseRange,
}

impl Default for SubstitutionRanges {
    fn default() -> Self {
        Self {
            temperature: NoiseRange::new(
                SUBSTITUTE_TEMPERATURE_CENTER_C,
                SUBSTITUTE_TEMPERATURE_SPAN_C,
            ),
            humidity: NoiseRange::new(SUBSTITUTE_HUMIDITY_CENTER_PCT, SUBSTITUTE_HUMIDITY_SPAN_PCT),
        }
    }
}

/// Deterministic pseudo-random source for substituted readings
#[derive(Debug, Clone)]
pub struct SubstitutionNoise {
    state: u32,
}

impl SubstitutionNoise {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0.0, 1.0)`
    pub fn next_unit(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        // Top 24 bits fit an f32 mantissa exactly, so the result stays below 1.0
        (self.state >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Next value uniformly distributed in `range`
    pub fn sample(&mut self, range: NoiseRange) -> f32 {
        range.min() + self.next_unit() * 2.0 * range.span
    }

    /// `reading` if it is present and finite, otherwise a value drawn from `range`
    ///
    /// The flag is `true` when the reading was substituted.
    pub fn fill(&mut self, reading: Option<f32>, range: NoiseRange) -> (f32, bool) {
        match reading {
            Some(value) if value.is_finite() => (value, false),
            _ => (self.sample(range), true),
        }
    }
}
