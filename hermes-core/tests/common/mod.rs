//! Shared fixtures for the control-loop integration tests
//!
//! Provides:
//! - Scripted sensors and a reading generator with a fixed seed
//! - A light that records every write
//! - A sink that keeps every record it is given
//! - A driver that polls a loop over a span of simulated time

#![allow(dead_code)]

use hermes_core::config::EngineConfig;
use hermes_core::engine::{ControlLoop, CycleReport};
use hermes_core::record::TelemetryRecord;
use hermes_core::sample::RawReading;
use hermes_core::time::{FixedTime, Millis};
use hermes_core::traits::{IndicatorDevice, SensorSource, TelemetrySink};

/// Replays a fixed list of readings, wrapping around at the end
pub struct ScriptedSensors {
    readings: Vec<RawReading>,
    next: usize,
}

impl ScriptedSensors {
    pub fn new(readings: Vec<RawReading>) -> Self {
        assert!(!readings.is_empty(), "script needs at least one reading");
        Self { readings, next: 0 }
    }

    pub fn constant(reading: RawReading) -> Self {
        Self::new(vec![reading])
    }
}

impl SensorSource for ScriptedSensors {
    fn acquire(&mut self) -> RawReading {
        let reading = self.readings[self.next % self.readings.len()];
        self.next += 1;
        reading
    }
}

/// Reading generator spanning in-band and out-of-band values
///
/// Same LCG as the firmware's substitution noise, so runs are reproducible.
pub struct ReadingGenerator {
    seed: u32,
}

impl ReadingGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    fn next_unit(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.seed >> 8) as f32 / (1u32 << 24) as f32
    }

    pub fn next_reading(&mut self) -> RawReading {
        let temperature = 5.0 + self.next_unit() * 40.0;
        let humidity = 15.0 + self.next_unit() * 70.0;
        let light = (self.next_unit() * 1023.0) as i32;
        let vibration = (self.next_unit() * 1023.0) as i32;
        RawReading::new(temperature, humidity, light, vibration)
    }

    pub fn readings(&mut self, count: usize) -> Vec<RawReading> {
        (0..count).map(|_| self.next_reading()).collect()
    }
}

/// Light that keeps every level it was driven to
#[derive(Debug, Default)]
pub struct RecordingLight {
    pub writes: Vec<bool>,
}

impl RecordingLight {
    /// Number of on/off changes, starting from dark
    pub fn toggles(&self) -> usize {
        let mut lit = false;
        let mut toggles = 0;
        for &level in &self.writes {
            if level != lit {
                toggles += 1;
                lit = level;
            }
        }
        toggles
    }

    pub fn is_lit(&self) -> bool {
        self.writes.last().copied().unwrap_or(false)
    }
}

impl IndicatorDevice for RecordingLight {
    fn set_lit(&mut self, lit: bool) {
        self.writes.push(lit);
    }
}

#[derive(Debug, Default)]
pub struct CollectingSink {
    pub records: Vec<TelemetryRecord>,
}

impl TelemetrySink for CollectingSink {
    type Error = ();

    fn emit(&mut self, record: &TelemetryRecord) -> Result<(), ()> {
        self.records.push(record.clone());
        Ok(())
    }
}

pub type TestLoop = ControlLoop<ScriptedSensors, RecordingLight, CollectingSink, FixedTime>;

pub fn test_loop(sensors: ScriptedSensors, boot_ms: Millis) -> TestLoop {
    test_loop_with(EngineConfig::default(), sensors, boot_ms)
}

pub fn test_loop_with(config: EngineConfig, sensors: ScriptedSensors, boot_ms: Millis) -> TestLoop {
    ControlLoop::new(
        config,
        sensors,
        RecordingLight::default(),
        CollectingSink::default(),
        FixedTime::new(boot_ms),
    )
    .expect("test configuration is valid")
}

/// Poll every `step_ms` for `duration_ms`, starting one step after `start`
///
/// Returns the reports of the cycles that ran. Timestamps wrap.
pub fn run_for(node: &mut TestLoop, start: Millis, duration_ms: Millis, step_ms: Millis) -> Vec<CycleReport> {
    let mut reports = Vec::new();
    let mut offset = step_ms;
    while offset <= duration_ms {
        if let Ok(report) = node.poll_at(start.wrapping_add(offset)) {
            reports.push(report);
        }
        offset += step_ms;
    }
    reports
}
