//! Core telemetry engine for the Hermes condition-monitoring node
//!
//! Samples four environmental signals on a fixed period, smooths the
//! continuous ones, classifies equipment health against fixed thresholds,
//! assembles a structured telemetry record and renders the status on a
//! blinking indicator, all from one cooperative, non-blocking loop.
//!
//! Key constraints:
//! - Runs on microcontrollers with a few KB of RAM
//! - No heap allocation anywhere in the crate
//! - No call ever blocks; the heaviest cycle is O(1) per signal
//!
//! ```no_run
//! use hermes_core::classifier::{HealthClassifier, HealthStatus};
//! use hermes_core::sample::Sample;
//!
//! let classifier = HealthClassifier::default();
//! let assessment = classifier.classify(&Sample::from_values(40.0, 50.0, 500, 100));
//!
//! assert_eq!(assessment.status, HealthStatus::Attention);
//! assert_eq!(assessment.status_detail().as_str(), "Temperature");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod logging;

pub mod buffer;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod indicator;
pub mod noise;
pub mod record;
pub mod sample;
pub mod time;
pub mod traits;
pub mod window;

// Public API
pub use classifier::{HealthAssessment, HealthClassifier, HealthStatus, SignalFlag, Thresholds};
pub use config::EngineConfig;
pub use engine::{ControlLoop, CycleReport};
pub use errors::{ConfigError, ConfigResult};
pub use indicator::IndicatorController;
pub use record::{TelemetryRecord, TelemetryRecordBuilder};
pub use sample::{RawReading, Sample, Signal};
pub use traits::{IndicatorDevice, SensorSource, TelemetrySink, TimeSource};
pub use window::SlidingAverage;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
