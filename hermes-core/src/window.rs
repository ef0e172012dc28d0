//! Sliding-Window Averages for the Continuous Signals
//!
//! Temperature and humidity are smoothed over the last
//! [`MOVING_AVERAGE_WINDOW`] readings. Light and vibration are reported raw.
//!
//! Before the window has filled, the divisor is the number of readings seen
//! so far, so the very first reported average equals the first reading and
//! not a twelfth of it.
//!
//! ```rust
//! use hermes_core::window::SlidingAverage;
//!
//! let mut window: SlidingAverage = SlidingAverage::new();
//! let first = window.update(20.0, 50.0);
//! assert_eq!(first.temperature, 20.0);
//!
//! let second = window.update(22.0, 54.0);
//! assert_eq!(second.temperature, 21.0);
//! assert_eq!(second.humidity, 52.0);
//! ```

use crate::buffer::RunningSumBuffer;
use crate::constants::MOVING_AVERAGE_WINDOW;

/// Moving averages reported after an update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovingAverages {
    /// Mean temperature over the window (°C)
    pub temperature: f32,
    /// Mean humidity over the window (%RH)
    pub humidity: f32,
}

/// Windowed mean of temperature and humidity with O(1) updates
#[derive(Debug, Clone)]
pub struct SlidingAverage<const N: usize = MOVING_AVERAGE_WINDOW> {
    temperature: RunningSumBuffer<N>,
    humidity: RunningSumBuffer<N>,
    samples_seen: u32,
}

impl<const N: usize> SlidingAverage<N> {
    /// Empty window
    pub const fn new() -> Self {
        const { assert!(N > 0, "SlidingAverage needs a window of at least one reading") };
        Self {
            temperature: RunningSumBuffer::new(),
            humidity: RunningSumBuffer::new(),
            samples_seen: 0,
        }
    }

    /// Push one reading of each signal and return the updated means
    pub fn update(&mut self, temperature: f32, humidity: f32) -> MovingAverages {
        self.temperature.push(temperature);
        self.humidity.push(humidity);
        self.samples_seen = self.samples_seen.saturating_add(1);

        self.averages()
    }

    /// Current means without pushing anything
    ///
    /// Both means are 0.0 before the first update.
    pub fn averages(&self) -> MovingAverages {
        let divisor = self.divisor();
        if divisor == 0 {
            return MovingAverages::default();
        }
        let divisor = divisor as f64;

        MovingAverages {
            temperature: (self.temperature.sum() / divisor) as f32,
            humidity: (self.humidity.sum() / divisor) as f32,
        }
    }

    /// Number of readings currently contributing to the mean
    pub fn divisor(&self) -> usize {
        (self.samples_seen as usize).min(N)
    }

    /// Total updates since creation
    pub fn samples_seen(&self) -> u32 {
        self.samples_seen
    }

    /// True once N readings have been recorded
    pub fn is_filled(&self) -> bool {
        self.temperature.is_full()
    }

    /// Temperature readings in the window, oldest first
    pub fn temperature_history(&self) -> impl Iterator<Item = f32> + '_ {
        self.temperature.iter()
    }

    /// Humidity readings in the window, oldest first
    pub fn humidity_history(&self) -> impl Iterator<Item = f32> + '_ {
        self.humidity.iter()
    }
}

impl<const N: usize> Default for SlidingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}
