//! Hardware and Transport Collaborators

use crate::record::TelemetryRecord;
use crate::sample::RawReading;

/// Source of one set of raw sensor readings per acquisition
///
/// Continuous channels (temperature, humidity) may be unavailable and are
/// reported as `None`; the engine substitutes a bounded stand-in value.
/// Analog channels are always present.
pub trait SensorSource {
    /// Read every sensor once
    ///
    /// Called once per acquisition period. Must not block longer than the
    /// sensor conversion itself.
    fn acquire(&mut self) -> RawReading;
}

/// Binary status light (usually an LED on a GPIO pin)
///
/// Writes are fire-and-forget: the indicator cannot report failure.
pub trait IndicatorDevice {
    /// Drive the light on (`true`) or off (`false`)
    fn set_lit(&mut self, lit: bool);
}

/// Consumer of completed telemetry records
///
/// Receives exactly one record per completed cycle. Implementations decide
/// the wire form; the reference serial sink writes a structured line
/// followed by a human-readable summary line.
pub trait TelemetrySink {
    /// Error raised by the underlying transport
    type Error;

    /// Emit a completed record
    ///
    /// The engine logs a failed emission and carries on with the next cycle.
    /// There is no retry.
    fn emit(&mut self, record: &TelemetryRecord) -> Result<(), Self::Error>;
}

impl<S: SensorSource + ?Sized> SensorSource for &mut S {
    fn acquire(&mut self) -> RawReading {
        (**self).acquire()
    }
}

impl<D: IndicatorDevice + ?Sized> IndicatorDevice for &mut D {
    fn set_lit(&mut self, lit: bool) {
        (**self).set_lit(lit)
    }
}

impl<K: TelemetrySink + ?Sized> TelemetrySink for &mut K {
    type Error = K::Error;

    fn emit(&mut self, record: &TelemetryRecord) -> Result<(), Self::Error> {
        (**self).emit(record)
    }
}
