//! Sensor Samples and Signal Identity
//!
//! A [`RawReading`] is what the acquisition collaborator hands over: the two
//! continuous channels may be missing. A [`Sample`] is what the rest of the
//! engine works with: every channel has a finite value, a sequence id and a
//! timestamp. The conversion between the two happens in the control loop,
//! where unavailable channels are replaced by substitution noise.

use core::fmt;

use crate::time::Millis;

/// The four monitored signals, in their fixed reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Signal {
    Temperature = 0,
    Humidity = 1,
    Light = 2,
    Vibration = 3,
}

impl Signal {
    /// Number of monitored signals
    pub const COUNT: usize = 4;

    /// All signals in reporting order
    pub const ALL: [Signal; Signal::COUNT] = [
        Signal::Temperature,
        Signal::Humidity,
        Signal::Light,
        Signal::Vibration,
    ];

    /// Position of the signal in reporting order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name used in status details
    pub const fn name(self) -> &'static str {
        match self {
            Signal::Temperature => "Temperature",
            Signal::Humidity => "Humidity",
            Signal::Light => "Light",
            Signal::Vibration => "Vibration",
        }
    }

    /// Unit label carried in the telemetry record
    pub const fn unit(self) -> &'static str {
        match self {
            Signal::Temperature => "°C",
            Signal::Humidity => "%",
            Signal::Light => "lux",
            Signal::Vibration => "intensity",
        }
    }

    /// Whether the signal is smoothed by the sliding window
    pub const fn is_smoothed(self) -> bool {
        matches!(self, Signal::Temperature | Signal::Humidity)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Signal {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

/// Readings as delivered by the sensor collaborator
///
/// `None` on a continuous channel means the sensor did not answer (a
/// disconnected DHT-class sensor, a checksum failure). A non-finite value is
/// treated the same way by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawReading {
    pub temperature: Option<f32>,
    pub humidity: Option<f32>,
    pub light: i32,
    pub vibration: i32,
}

impl RawReading {
    /// Reading with every channel present
    pub const fn new(temperature: f32, humidity: f32, light: i32, vibration: i32) -> Self {
        Self {
            temperature: Some(temperature),
            humidity: Some(humidity),
            light,
            vibration,
        }
    }
}

/// One complete acquisition, ready for smoothing and classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Temperature (°C)
    pub temperature: f32,
    /// Relative humidity (%RH)
    pub humidity: f32,
    /// Light level (raw ADC counts)
    pub light: i32,
    /// Vibration intensity (raw ADC counts)
    pub vibration: i32,
    /// 1-based acquisition counter
    pub sequence_id: u32,
    /// Clock reading at acquisition
    pub timestamp_ms: Millis,
}

impl Sample {
    /// Sample with sequence id and timestamp zeroed, handy for classification alone
    pub const fn from_values(temperature: f32, humidity: f32, light: i32, vibration: i32) -> Self {
        Self {
            temperature,
            humidity,
            light,
            vibration,
            sequence_id: 0,
            timestamp_ms: 0,
        }
    }
}

/// Which continuous channels were replaced by substitution noise in a cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Substituted {
    pub temperature: bool,
    pub humidity: bool,
}

impl Substituted {
    /// True when at least one channel was substituted
    pub const fn any(&self) -> bool {
        self.temperature || self.humidity
    }
}
