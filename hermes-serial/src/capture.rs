//! Recovering telemetry from a serial capture
//!
//! A capture of the node's port interleaves banners, summary lines and the
//! structured `JSON_DATA: ` lines. [`extract_readings`] keeps only the
//! structured lines and flattens each one into a [`CapturedReading`] row
//! ready for a spreadsheet or a dashboard. Lines that carry the prefix but
//! do not parse are logged and skipped; only a failing reader aborts the
//! extraction.

use std::io::BufRead;

use hermes_core::classifier::{HealthStatus, MaintenanceWindow, RiskLevel, SignalFlag};
use hermes_core::sample::Signal;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::sink::JSON_PREFIX;
use crate::SerialResult;

// Wire shape of one structured line, owned for parsing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    device_id: String,
    firmware_version: String,
    sequence_id: u32,
    timestamp_ms: u32,
    per_signal: WirePerSignal,
    assessment: WireAssessment,
    operational_stats: WireStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePerSignal {
    temperature: WireSignal,
    humidity: WireSignal,
    light_level: WireSignal,
    vibration: WireSignal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSignal {
    value: f64,
    status: SignalFlag,
    moving_average: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAssessment {
    status: HealthStatus,
    risk_level: RiskLevel,
    next_maintenance_window: MaintenanceWindow,
    #[serde(default)]
    status_detail: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStats {
    uptime_ms: u32,
    total_readings: u32,
    avg_temperature: f64,
    avg_humidity: f64,
}

/// One telemetry record flattened into a single row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapturedReading {
    pub device_id: String,
    pub firmware_version: String,
    pub sequence_id: u32,
    pub timestamp_ms: u32,

    pub temperature: f64,
    pub temperature_moving_average: Option<f64>,
    pub temperature_status: SignalFlag,
    pub humidity: f64,
    pub humidity_moving_average: Option<f64>,
    pub humidity_status: SignalFlag,
    pub light_level: i32,
    pub light_level_status: SignalFlag,
    pub vibration: i32,
    pub vibration_status: SignalFlag,

    pub status: HealthStatus,
    pub risk_level: RiskLevel,
    pub next_maintenance_window: MaintenanceWindow,
    pub status_detail: String,

    pub uptime_ms: u32,
    pub total_readings: u32,
    pub avg_temperature: f64,
    pub avg_humidity: f64,
}

impl CapturedReading {
    pub fn status_of(&self, signal: Signal) -> SignalFlag {
        match signal {
            Signal::Temperature => self.temperature_status,
            Signal::Humidity => self.humidity_status,
            Signal::Light => self.light_level_status,
            Signal::Vibration => self.vibration_status,
        }
    }
}

impl From<WireRecord> for CapturedReading {
    fn from(wire: WireRecord) -> Self {
        let signals = wire.per_signal;
        Self {
            device_id: wire.device_id,
            firmware_version: wire.firmware_version,
            sequence_id: wire.sequence_id,
            timestamp_ms: wire.timestamp_ms,

            temperature: signals.temperature.value,
            temperature_moving_average: signals.temperature.moving_average,
            temperature_status: signals.temperature.status,
            humidity: signals.humidity.value,
            humidity_moving_average: signals.humidity.moving_average,
            humidity_status: signals.humidity.status,
            light_level: signals.light_level.value as i32,
            light_level_status: signals.light_level.status,
            vibration: signals.vibration.value as i32,
            vibration_status: signals.vibration.status,

            status: wire.assessment.status,
            risk_level: wire.assessment.risk_level,
            next_maintenance_window: wire.assessment.next_maintenance_window,
            status_detail: wire.assessment.status_detail,

            uptime_ms: wire.operational_stats.uptime_ms,
            total_readings: wire.operational_stats.total_readings,
            avg_temperature: wire.operational_stats.avg_temperature,
            avg_humidity: wire.operational_stats.avg_humidity,
        }
    }
}

/// Parse one line, `None` when it is not a structured line
pub fn parse_line(line: &str) -> Option<Result<CapturedReading, serde_json::Error>> {
    let start = line.find(JSON_PREFIX)?;
    let payload = line[start + JSON_PREFIX.len()..].trim();
    Some(serde_json::from_str::<WireRecord>(payload).map(CapturedReading::from))
}

/// Extract every structured reading from a serial capture, in order
pub fn extract_readings<R: BufRead>(reader: R) -> SerialResult<Vec<CapturedReading>> {
    let mut readings = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Some(Ok(reading)) => readings.push(reading),
            Some(Err(e)) => {
                skipped += 1;
                warn!("line {}: malformed telemetry skipped: {}", index + 1, e);
            }
            None => {}
        }
    }

    debug!("extracted {} readings, skipped {}", readings.len(), skipped);
    Ok(readings)
}

/// Range and mean of one continuous signal over a capture
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SignalStats {
    /// `None` for an empty series
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        (count > 0).then(|| Self {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

/// Aggregate view of a capture
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CaptureSummary {
    pub readings: usize,
    /// Span between the earliest and latest reading, 0 below two readings
    pub duration_ms: u32,
    pub temperature: Option<SignalStats>,
    pub humidity: Option<SignalStats>,
    pub normal: usize,
    pub attention: usize,
    pub critical: usize,
    /// Alert count per signal, in reporting order
    pub alerts: [usize; Signal::COUNT],
}

impl CaptureSummary {
    pub fn from_readings(readings: &[CapturedReading]) -> Self {
        let first = readings.iter().map(|r| r.timestamp_ms).min().unwrap_or(0);
        let last = readings.iter().map(|r| r.timestamp_ms).max().unwrap_or(0);

        let mut summary = Self {
            readings: readings.len(),
            duration_ms: last - first,
            temperature: SignalStats::from_values(readings.iter().map(|r| r.temperature)),
            humidity: SignalStats::from_values(readings.iter().map(|r| r.humidity)),
            ..Self::default()
        };

        for reading in readings {
            match reading.status {
                HealthStatus::Normal => summary.normal += 1,
                HealthStatus::Attention => summary.attention += 1,
                HealthStatus::Critical => summary.critical += 1,
            }
            for signal in Signal::ALL {
                if reading.status_of(signal) == SignalFlag::Alert {
                    summary.alerts[signal.index()] += 1;
                }
            }
        }

        summary
    }

    pub fn alerts_for(&self, signal: Signal) -> usize {
        self.alerts[signal.index()]
    }
}
