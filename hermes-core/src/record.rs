//! Telemetry Record Assembly
//!
//! ## Overview
//!
//! Once per cycle the raw sample, its moving averages and its health
//! assessment are folded into one [`TelemetryRecord`]. The record is a plain
//! value: it is built, handed to the sink, and dropped. Nothing in the engine
//! keeps a previous record around.
//!
//! ## Wire Shape
//!
//! With the `serde` feature the record serializes to the structure below
//! (camelCase keys, enums as fixed upper-case tokens):
//!
//! ```text
//! {
//!   "deviceId": "HR-PRED-MAINT-01",
//!   "firmwareVersion": "1.0.0",
//!   "sequenceId": 7,
//!   "timestampMs": 35000,
//!   "perSignal": {
//!     "temperature": { "value": 40.0, "unit": "°C", "status": "ALERT", "movingAverage": 27.13 },
//!     "humidity":    { "value": 50.0, "unit": "%",  "status": "OK",    "movingAverage": 49.9 },
//!     "lightLevel":  { "value": 500,  "unit": "lux", "status": "OK" },
//!     "vibration":   { "value": 100,  "unit": "intensity", "status": "OK" }
//!   },
//!   "assessment": {
//!     "status": "ATTENTION", "riskLevel": "MEDIUM",
//!     "nextMaintenanceWindow": "24H", "statusDetail": "Temperature"
//!   },
//!   "operationalStats": {
//!     "uptimeMs": 35000, "totalReadings": 7,
//!     "avgTemperature": 27.13, "avgHumidity": 49.9
//!   }
//! }
//! ```
//!
//! ## Rounding
//!
//! Continuous values are rounded to two decimal places here, once. Sinks
//! must print them as they are.

use core::fmt;

use heapless::String;

use crate::classifier::{
    HealthAssessment, HealthStatus, MaintenanceWindow, RiskLevel, SignalFlag, Thresholds,
};
use crate::constants::{DEFAULT_DEVICE_ID, DEFAULT_FIRMWARE_VERSION, MS_PER_SECOND, STATUS_DETAIL_CAPACITY};
use crate::sample::{Sample, Signal};
use crate::time::Millis;
use crate::window::MovingAverages;

/// Round to two decimal places
pub fn round2(value: f32) -> f32 {
    libm::roundf(value * 100.0) / 100.0
}

/// Immutable identity stamped on every record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub device_id: &'static str,
    pub firmware_version: &'static str,
}

impl DeviceIdentity {
    pub const fn new(device_id: &'static str, firmware_version: &'static str) -> Self {
        Self { device_id, firmware_version }
    }
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_ID, DEFAULT_FIRMWARE_VERSION)
    }
}

/// Reading value as carried in the record
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Measurement {
    /// Continuous signal, rounded to two decimals
    Continuous(f32),
    /// Raw ADC counts
    Discrete(i32),
}

impl Measurement {
    pub fn as_f32(&self) -> f32 {
        match *self {
            Measurement::Continuous(value) => value,
            Measurement::Discrete(value) => value as f32,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Continuous(value) => write!(f, "{:.1}", value),
            Measurement::Discrete(value) => write!(f, "{}", value),
        }
    }
}

/// One signal's entry in the record
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SignalEntry {
    pub value: Measurement,
    pub unit: &'static str,
    pub status: SignalFlag,
    /// Present for smoothed signals only
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub moving_average: Option<f32>,
}

/// Entries for all four signals
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PerSignal {
    pub temperature: SignalEntry,
    pub humidity: SignalEntry,
    pub light_level: SignalEntry,
    pub vibration: SignalEntry,
}

impl PerSignal {
    pub fn get(&self, signal: Signal) -> &SignalEntry {
        match signal {
            Signal::Temperature => &self.temperature,
            Signal::Humidity => &self.humidity,
            Signal::Light => &self.light_level,
            Signal::Vibration => &self.vibration,
        }
    }

    /// Entries in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Signal, &SignalEntry)> + '_ {
        Signal::ALL.into_iter().map(move |signal| (signal, self.get(signal)))
    }
}

/// Assessment block of the record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssessmentSummary {
    pub status: HealthStatus,
    pub risk_level: RiskLevel,
    pub next_maintenance_window: MaintenanceWindow,
    pub status_detail: String<STATUS_DETAIL_CAPACITY>,
}

/// Counters the control loop passes to the builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Milliseconds since boot at build time
    pub uptime_ms: Millis,
    /// Readings taken so far, this one included
    pub total_readings: u32,
}

/// Operational statistics block of the record
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OperationalStats {
    pub uptime_ms: Millis,
    pub total_readings: u32,
    pub avg_temperature: f32,
    pub avg_humidity: f32,
}

/// Structured telemetry for one cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TelemetryRecord {
    pub device_id: &'static str,
    pub firmware_version: &'static str,
    pub sequence_id: u32,
    pub timestamp_ms: Millis,
    pub per_signal: PerSignal,
    pub assessment: AssessmentSummary,
    pub operational_stats: OperationalStats,
}

impl TelemetryRecord {
    /// Human-readable one-line summary, formatted without allocation
    pub fn summary(&self) -> SummaryLine<'_> {
        SummaryLine(self)
    }
}

/// Display adapter for the summary line of a record
///
/// ```text
/// [HR-PRED-MAINT-01] #7 up 35s | T 40.0°C H 50.0% L 500 V 100 | ATTENTION | risk MEDIUM | maint 24H
/// ```
pub struct SummaryLine<'a>(&'a TelemetryRecord);

impl fmt::Display for SummaryLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let signals = &record.per_signal;
        write!(
            f,
            "[{}] #{} up {}s | T {}{} H {}{} L {} V {} | {} | risk {} | maint {}",
            record.device_id,
            record.sequence_id,
            record.operational_stats.uptime_ms / MS_PER_SECOND,
            signals.temperature.value,
            signals.temperature.unit,
            signals.humidity.value,
            signals.humidity.unit,
            signals.light_level.value,
            signals.vibration.value,
            record.assessment.status,
            record.assessment.risk_level,
            record.assessment.next_maintenance_window,
        )
    }
}

/// Composes samples, averages and assessments into records
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TelemetryRecordBuilder {
    identity: DeviceIdentity,
    thresholds: Thresholds,
}

impl TelemetryRecordBuilder {
    pub const fn new(identity: DeviceIdentity, thresholds: Thresholds) -> Self {
        Self { identity, thresholds }
    }

    pub const fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// Build the record for one cycle
    ///
    /// Per-signal status is evaluated against the same thresholds the
    /// classifier uses, so it always agrees with `assessment.flags` for a
    /// sample classified by a classifier sharing this builder's thresholds.
    pub fn build(
        &self,
        sample: &Sample,
        assessment: &HealthAssessment,
        averages: MovingAverages,
        stats: CycleStats,
    ) -> TelemetryRecord {
        let flags = self.thresholds.evaluate(sample);
        debug_assert_eq!(flags, assessment.flags, "record flags diverged from assessment");

        let avg_temperature = round2(averages.temperature);
        let avg_humidity = round2(averages.humidity);

        let per_signal = PerSignal {
            temperature: SignalEntry {
                value: Measurement::Continuous(round2(sample.temperature)),
                unit: Signal::Temperature.unit(),
                status: flags.get(Signal::Temperature),
                moving_average: Some(avg_temperature),
            },
            humidity: SignalEntry {
                value: Measurement::Continuous(round2(sample.humidity)),
                unit: Signal::Humidity.unit(),
                status: flags.get(Signal::Humidity),
                moving_average: Some(avg_humidity),
            },
            light_level: SignalEntry {
                value: Measurement::Discrete(sample.light),
                unit: Signal::Light.unit(),
                status: flags.get(Signal::Light),
                moving_average: None,
            },
            vibration: SignalEntry {
                value: Measurement::Discrete(sample.vibration),
                unit: Signal::Vibration.unit(),
                status: flags.get(Signal::Vibration),
                moving_average: None,
            },
        };

        TelemetryRecord {
            device_id: self.identity.device_id,
            firmware_version: self.identity.firmware_version,
            sequence_id: sample.sequence_id,
            timestamp_ms: sample.timestamp_ms,
            per_signal,
            assessment: AssessmentSummary {
                status: assessment.status,
                risk_level: assessment.risk_level(),
                next_maintenance_window: assessment.maintenance_window(),
                status_detail: assessment.status_detail(),
            },
            operational_stats: OperationalStats {
                uptime_ms: stats.uptime_ms,
                total_readings: stats.total_readings,
                avg_temperature,
                avg_humidity,
            },
        }
    }
}
