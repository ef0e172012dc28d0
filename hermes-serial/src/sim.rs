//! Simulated sensor bank
//!
//! Replaces the DHT22, the light-dependent resistor and the vibration
//! potentiometer when the node runs on a host. Temperature and humidity
//! wander around room conditions and drop out with a configurable
//! probability, exercising the substitution path. The two analog channels
//! follow a slow random walk over the ADC range with per-read jitter
//! layered on top, then get clamped like a real 10-bit conversion.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hermes_core::constants::device::{ADC_MAX, ADC_MIN};
use hermes_core::sample::RawReading;
use hermes_core::traits::SensorSource;

const TEMPERATURE_NOMINAL_C: f32 = 25.0;
const TEMPERATURE_SWING_C: f32 = 12.0;
const HUMIDITY_NOMINAL_PCT: f32 = 50.0;
const HUMIDITY_SWING_PCT: f32 = 25.0;

/// Light jitter, half-open like the board's `random(-50, 50)`
const LIGHT_JITTER: (i32, i32) = (-50, 50);
const VIBRATION_JITTER: (i32, i32) = (-100, 200);
/// Largest step of the analog random walk per reading
const ANALOG_DRIFT: i32 = 60;

pub struct SimulatedSensors {
    rng: StdRng,
    dropout: f64,
    light_base: i32,
    vibration_base: i32,
}

impl SimulatedSensors {
    /// `dropout` is the probability that the temperature/humidity sensor
    /// fails to answer on a given read, clamped to `[0, 1]`
    pub fn new(seed: u64, dropout: f64) -> Self {
        let dropout = if dropout.is_nan() { 0.0 } else { dropout.clamp(0.0, 1.0) };
        Self {
            rng: StdRng::seed_from_u64(seed),
            dropout,
            light_base: 500,
            vibration_base: 200,
        }
    }

    pub fn dropout(&self) -> f64 {
        self.dropout
    }

    fn continuous(&mut self, nominal: f32, swing: f32) -> Option<f32> {
        if self.rng.gen_bool(self.dropout) {
            return None;
        }
        Some(nominal + self.rng.gen_range(-swing..=swing))
    }

    fn analog(rng: &mut StdRng, base: &mut i32, jitter: (i32, i32)) -> i32 {
        *base = (*base + rng.gen_range(-ANALOG_DRIFT..=ANALOG_DRIFT)).clamp(ADC_MIN, ADC_MAX);
        (*base + rng.gen_range(jitter.0..jitter.1)).clamp(ADC_MIN, ADC_MAX)
    }
}

impl SensorSource for SimulatedSensors {
    fn acquire(&mut self) -> RawReading {
        let temperature = self.continuous(TEMPERATURE_NOMINAL_C, TEMPERATURE_SWING_C);
        // One physical sensor: when it is down, both channels are down
        let humidity = temperature
            .map(|_| HUMIDITY_NOMINAL_PCT + self.rng.gen_range(-HUMIDITY_SWING_PCT..=HUMIDITY_SWING_PCT));

        let light = Self::analog(&mut self.rng, &mut self.light_base, LIGHT_JITTER);
        let vibration = Self::analog(&mut self.rng, &mut self.vibration_base, VIBRATION_JITTER);

        RawReading {
            temperature,
            humidity,
            light,
            vibration,
        }
    }
}
