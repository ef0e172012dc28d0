//! Host Side of the Hermes Node
//!
//! ## Overview
//!
//! `hermes-core` decides *what* the node reports; this crate supplies the
//! collaborators that decide *where* it goes when the loop runs on a
//! desktop or a bench instead of a microcontroller:
//!
//! | Collaborator | Type | Backed by |
//! |--------------|------|-----------|
//! | `TelemetrySink` | [`SerialSink`] | any `std::io::Write` (stdout, a file, a UART device) |
//! | `SensorSource` | [`SimulatedSensors`] | seeded `rand::rngs::StdRng` |
//! | `IndicatorDevice` | [`ConsoleIndicator`] | `log` records |
//! | `TimeSource` | [`StdClock`] | `std::time::Instant` |
//!
//! ## Serial Output Format
//!
//! Every cycle writes two lines:
//!
//! ```text
//! JSON_DATA: {"deviceId":"HR-PRED-MAINT-01","firmwareVersion":"1.0.0","sequenceId":1,...}
//! [HR-PRED-MAINT-01] #1 up 5s | T 22.0°C H 50.0% L 500 V 100 | NORMAL | risk LOW | maint SCHEDULED
//! ```
//!
//! The `JSON_DATA: ` prefix lets a capture of the port be mined afterwards
//! with [`capture::extract_readings`], ignoring banners and summary lines.
//!
//! ## Example Usage
//!
//! ```rust
//! use hermes_core::config::EngineConfig;
//! use hermes_core::engine::ControlLoop;
//! use hermes_serial::{ConsoleIndicator, SerialSink, SimulatedSensors, StdClock};
//!
//! let mut node = ControlLoop::new(
//!     EngineConfig::default(),
//!     SimulatedSensors::new(7, 0.1),
//!     ConsoleIndicator::default(),
//!     SerialSink::new(Vec::new()),
//!     StdClock::new(),
//! )?;
//!
//! // Nothing is due this early
//! assert!(node.poll_at(100).is_err());
//! # Ok::<(), hermes_serial::SerialError>(())
//! ```

pub mod capture;
pub mod clock;
pub mod console;
pub mod sim;
pub mod sink;

// Re-export common types
pub use capture::{CaptureSummary, CapturedReading, SignalStats};
pub use clock::StdClock;
pub use console::ConsoleIndicator;
pub use sim::SimulatedSensors;
pub use sink::{SerialSink, JSON_PREFIX};

use hermes_core::errors::ConfigError;
use thiserror::Error;

/// Result type for host-side operations
pub type SerialResult<T> = Result<T, SerialError>;

/// Errors raised on the host side of the node
#[derive(Debug, Error)]
pub enum SerialError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert() {
        let err: SerialError = ConfigError::ZeroInterval { field: "sample_period_ms" }.into();
        assert_eq!(
            err.to_string(),
            "Configuration error: sample_period_ms must be greater than zero"
        );
    }
}
