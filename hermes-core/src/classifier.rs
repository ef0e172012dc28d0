//! Threshold-Based Health Classification
//!
//! ## Overview
//!
//! Every signal of a [`Sample`] is checked against a fixed normal band and
//! flagged OK or Alert. The number of alerts alone decides the overall
//! status:
//!
//! | Alerts | Status    | Risk   | Maintenance |
//! |--------|-----------|--------|-------------|
//! | 0      | Normal    | Low    | Scheduled   |
//! | 1-2    | Attention | Medium | within 24 h |
//! | 3-4    | Critical  | High   | Immediate   |
//!
//! This is an ordinal mapping, not a weighted score. A vibration alert and a
//! light alert count the same, and two alerts of any kind still read as
//! Attention. Operators who need to know which signals tripped should read
//! the per-signal flags or the status detail.
//!
//! ## Allocation
//!
//! Classification works on enums only. Text is produced at the record
//! boundary ([`HealthAssessment::status_detail`]) into a fixed-capacity
//! `heapless::String`.
//!
//! ## Non-finite input
//!
//! The check is "inside the band", so a NaN reading is never inside and is
//! flagged Alert. The control loop substitutes unavailable readings before
//! classification, so NaN only reaches the classifier when it is called
//! directly.

use core::fmt;

use heapless::String;

use crate::constants::{
    STATUS_DETAIL_CAPACITY,
    TEMP_MIN_NORMAL_C, TEMP_MAX_NORMAL_C,
    HUMIDITY_MIN_NORMAL_PCT, HUMIDITY_MAX_NORMAL_PCT,
    LIGHT_MIN_NORMAL, LIGHT_MAX_NORMAL, VIBRATION_MAX_NORMAL,
};
use crate::sample::{Sample, Signal};

/// Separator between signal names in the status detail
pub const STATUS_DETAIL_SEPARATOR: &str = ", ";

/// Closed interval of normal values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalBand<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> NormalBand<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// True when `value` lies inside the band, bounds included
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// True when the band is not inverted
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Normal bands for the four signals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub temperature: NormalBand<f32>,
    pub humidity: NormalBand<f32>,
    pub light: NormalBand<i32>,
    /// Only the upper bound is meaningful; the lower bound is `i32::MIN`
    pub vibration: NormalBand<i32>,
}

impl Thresholds {
    /// Bands of the reference installation
    pub const fn standard() -> Self {
        Self {
            temperature: NormalBand::new(TEMP_MIN_NORMAL_C, TEMP_MAX_NORMAL_C),
            humidity: NormalBand::new(HUMIDITY_MIN_NORMAL_PCT, HUMIDITY_MAX_NORMAL_PCT),
            light: NormalBand::new(LIGHT_MIN_NORMAL, LIGHT_MAX_NORMAL),
            vibration: NormalBand::new(i32::MIN, VIBRATION_MAX_NORMAL),
        }
    }

    /// Flag every signal of `sample`
    pub fn evaluate(&self, sample: &Sample) -> SignalFlags {
        SignalFlags([
            SignalFlag::from_normal(self.temperature.contains(sample.temperature)),
            SignalFlag::from_normal(self.humidity.contains(sample.humidity)),
            SignalFlag::from_normal(self.light.contains(sample.light)),
            SignalFlag::from_normal(self.vibration.contains(sample.vibration)),
        ])
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Per-signal verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalFlag {
    #[cfg_attr(feature = "serde", serde(rename = "OK"))]
    Ok,
    #[cfg_attr(feature = "serde", serde(rename = "ALERT"))]
    Alert,
}

impl SignalFlag {
    const fn from_normal(normal: bool) -> Self {
        if normal {
            SignalFlag::Ok
        } else {
            SignalFlag::Alert
        }
    }

    pub const fn is_alert(self) -> bool {
        matches!(self, SignalFlag::Alert)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SignalFlag::Ok => "OK",
            SignalFlag::Alert => "ALERT",
        }
    }
}

impl fmt::Display for SignalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flags for all four signals, indexed by [`Signal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalFlags([SignalFlag; Signal::COUNT]);

impl SignalFlags {
    /// Every signal OK
    pub const fn all_ok() -> Self {
        Self([SignalFlag::Ok; Signal::COUNT])
    }

    pub fn get(&self, signal: Signal) -> SignalFlag {
        self.0[signal.index()]
    }

    /// Signals flagged Alert, in reporting order
    pub fn alerting(&self) -> impl Iterator<Item = Signal> + '_ {
        Signal::ALL.into_iter().filter(move |s| self.get(*s).is_alert())
    }

    /// Number of Alert flags
    pub fn alert_count(&self) -> u8 {
        self.0.iter().filter(|flag| flag.is_alert()).count() as u8
    }
}

/// Overall equipment health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum HealthStatus {
    Normal,
    Attention,
    Critical,
}

impl HealthStatus {
    /// Fixed ordinal mapping from alert count to status
    pub const fn from_alert_count(alerts: u8) -> Self {
        match alerts {
            0 => HealthStatus::Normal,
            1 | 2 => HealthStatus::Attention,
            _ => HealthStatus::Critical,
        }
    }

    pub const fn risk_level(self) -> RiskLevel {
        match self {
            HealthStatus::Normal => RiskLevel::Low,
            HealthStatus::Attention => RiskLevel::Medium,
            HealthStatus::Critical => RiskLevel::High,
        }
    }

    pub const fn maintenance_window(self) -> MaintenanceWindow {
        match self {
            HealthStatus::Normal => MaintenanceWindow::Scheduled,
            HealthStatus::Attention => MaintenanceWindow::Within24Hours,
            HealthStatus::Critical => MaintenanceWindow::Immediate,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Normal => "NORMAL",
            HealthStatus::Attention => "ATTENTION",
            HealthStatus::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HealthStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str())
    }
}

/// Risk of imminent failure, derived from status only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When the next maintenance visit should happen, derived from status only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaintenanceWindow {
    #[cfg_attr(feature = "serde", serde(rename = "SCHEDULED"))]
    Scheduled,
    #[cfg_attr(feature = "serde", serde(rename = "24H"))]
    Within24Hours,
    #[cfg_attr(feature = "serde", serde(rename = "IMMEDIATE"))]
    Immediate,
}

impl MaintenanceWindow {
    pub const fn as_str(self) -> &'static str {
        match self {
            MaintenanceWindow::Scheduled => "SCHEDULED",
            MaintenanceWindow::Within24Hours => "24H",
            MaintenanceWindow::Immediate => "IMMEDIATE",
        }
    }
}

impl fmt::Display for MaintenanceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthAssessment {
    pub status: HealthStatus,
    pub flags: SignalFlags,
    pub alert_count: u8,
}

impl HealthAssessment {
    pub const fn risk_level(&self) -> RiskLevel {
        self.status.risk_level()
    }

    pub const fn maintenance_window(&self) -> MaintenanceWindow {
        self.status.maintenance_window()
    }

    /// Names of the alerting signals in reporting order, joined with `", "`
    ///
    /// Empty when every signal is OK.
    pub fn status_detail(&self) -> String<STATUS_DETAIL_CAPACITY> {
        let mut detail = String::new();
        for signal in self.flags.alerting() {
            // Capacity covers all four names, so pushes cannot fail
            if !detail.is_empty() {
                let _ = detail.push_str(STATUS_DETAIL_SEPARATOR);
            }
            let _ = detail.push_str(signal.name());
        }
        detail
    }
}

/// Pure classifier holding the threshold table
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HealthClassifier {
    thresholds: Thresholds,
}

impl HealthClassifier {
    pub const fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Per-signal flags for `sample`
    ///
    /// Used by both the classifier and the record builder so the two can
    /// never disagree.
    pub fn flags(&self, sample: &Sample) -> SignalFlags {
        self.thresholds.evaluate(sample)
    }

    /// Classify one sample
    pub fn classify(&self, sample: &Sample) -> HealthAssessment {
        let flags = self.flags(sample);
        let alert_count = flags.alert_count();

        HealthAssessment {
            status: HealthStatus::from_alert_count(alert_count),
            flags,
            alert_count,
        }
    }
}
