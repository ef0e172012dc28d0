//! Collaborator Traits for the Telemetry Engine
//!
//! The engine core is pure computation. Everything that touches hardware or
//! a transport sits behind one of these traits so the same loop runs on a
//! microcontroller, on a desktop simulator, and inside unit tests.
//!
//! ## Module Organization
//!
//! - [`time`] - monotonic millisecond clock
//! - [`io`] - sensor acquisition, status indicator and telemetry sink
//!
//! ## Usage Example
//!
//! ```rust
//! use hermes_core::traits::{IndicatorDevice, SensorSource};
//! use hermes_core::sample::RawReading;
//!
//! struct BenchSensors;
//!
//! impl SensorSource for BenchSensors {
//!     fn acquire(&mut self) -> RawReading {
//!         // DHT22 disconnected: continuous channels unavailable
//!         RawReading { temperature: None, humidity: None, light: 512, vibration: 80 }
//!     }
//! }
//!
//! struct Led(bool);
//!
//! impl IndicatorDevice for Led {
//!     fn set_lit(&mut self, lit: bool) {
//!         self.0 = lit;
//!     }
//! }
//! ```

pub mod time;
pub mod io;

pub use time::TimeSource;
pub use io::{IndicatorDevice, SensorSource, TelemetrySink};
