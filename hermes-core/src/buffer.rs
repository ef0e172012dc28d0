//! Fixed-Size Ring Buffer with a Running Sum
//!
//! ## Overview
//!
//! The moving averages in this crate are computed over a fixed number of
//! recent readings. Recomputing the sum over the whole window on every
//! update would cost O(N); instead the buffer keeps a running sum that is
//! adjusted by exactly the value that enters and the value that leaves.
//!
//! ```text
//! RunningSumBuffer<5> after 7 pushes (v0..v6):
//! ┌────┬────┬────┬────┬────┐
//! │ v5 │ v6 │ v2 │ v3 │ v4 │   ← slots
//! └────┴────┴────┴────┴────┘
//!             ↑
//!             └── write_pos = 2 (next slot to overwrite, holds the oldest)
//!
//! sum = v2 + v3 + v4 + v5 + v6
//! ```
//!
//! Every push touches at most two slots (read the evicted value, write the
//! new one) regardless of N. Storage is an inline array, so the buffer never
//! allocates and can live in a `static`.
//!
//! ## Internal Invariants
//!
//! - `write_pos < N`
//! - `filled` becomes true the first time `write_pos` wraps to 0 and
//!   stays true
//! - `sum` equals the sum of the live slots (up to float rounding)
//!
//! The sum is carried in `f64`. Every push adds one value and subtracts
//! another, and the node runs for months, so an `f32` accumulator would
//! drift away from the true window sum by more than the reported precision.
//! - the live slot count is `N` once filled, `write_pos` before that

/// Ring buffer of `f32` readings that tracks the sum of its contents
#[derive(Debug, Clone)]
pub struct RunningSumBuffer<const N: usize> {
    data: [f32; N],
    write_pos: usize,
    filled: bool,
    sum: f64,
}

impl<const N: usize> RunningSumBuffer<N> {
    /// Create an empty buffer
    ///
    /// This is a const function, so the buffer can be placed in a static:
    /// ```rust
    /// use hermes_core::buffer::RunningSumBuffer;
    /// static HISTORY: RunningSumBuffer<12> = RunningSumBuffer::new();
    /// ```
    ///
    /// A zero-slot buffer is rejected when the crate is built:
    /// ```compile_fail
    /// use hermes_core::buffer::RunningSumBuffer;
    /// let empty = RunningSumBuffer::<0>::new();
    /// # let _ = empty.len();
    /// ```
    pub const fn new() -> Self {
        const { assert!(N > 0, "RunningSumBuffer needs at least one slot") };
        Self {
            data: [0.0; N],
            write_pos: 0,
            filled: false,
            sum: 0.0,
        }
    }

    /// Add a reading, evicting the oldest one once the buffer is full
    ///
    /// Returns the evicted value, if any.
    ///
    /// ```rust
    /// # use hermes_core::buffer::RunningSumBuffer;
    /// let mut buf = RunningSumBuffer::<3>::new();
    /// assert_eq!(buf.push(1.0), None);
    /// assert_eq!(buf.push(2.0), None);
    /// assert_eq!(buf.push(3.0), None);
    ///
    /// // Fourth push overwrites the first
    /// assert_eq!(buf.push(4.0), Some(1.0));
    /// assert_eq!(buf.sum(), 9.0);
    /// ```
    pub fn push(&mut self, value: f32) -> Option<f32> {
        let evicted = if self.filled {
            let old = self.data[self.write_pos];
            self.sum -= f64::from(old);
            Some(old)
        } else {
            None
        };

        self.data[self.write_pos] = value;
        self.sum += f64::from(value);

        self.write_pos = (self.write_pos + 1) % N;
        if self.write_pos == 0 {
            self.filled = true;
        }

        evicted
    }

    /// Number of live readings
    pub fn len(&self) -> usize {
        if self.filled {
            N
        } else {
            self.write_pos
        }
    }

    /// Check if no reading was ever pushed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the buffer has wrapped at least once
    pub fn is_full(&self) -> bool {
        self.filled
    }

    /// Capacity of the buffer
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Running sum of the live readings
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Arithmetic mean of the live readings, `None` when empty
    pub fn mean(&self) -> Option<f32> {
        match self.len() {
            0 => None,
            count => Some((self.sum / count as f64) as f32),
        }
    }

    /// Most recent reading
    pub fn last(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        Some(self.data[idx])
    }

    /// Iterate over live readings from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let len = self.len();
        let start = if self.filled { self.write_pos } else { 0 };
        (0..len).map(move |offset| self.data[(start + offset) % N])
    }

    /// Drop every reading
    pub fn clear(&mut self) {
        self.data = [0.0; N];
        self.write_pos = 0;
        self.filled = false;
        self.sum = 0.0;
    }
}

impl<const N: usize> Default for RunningSumBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let buffer: RunningSumBuffer<5> = RunningSumBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.last().is_none());
        assert!(buffer.mean().is_none());
    }

    #[test]
    fn push_and_retrieve() {
        let mut buffer = RunningSumBuffer::<5>::new();

        buffer.push(25.0);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.last(), Some(25.0));
        assert_eq!(buffer.mean(), Some(25.0));
    }

    #[test]
    fn circular_overwrite_keeps_sum_exact() {
        let mut buffer = RunningSumBuffer::<3>::new();

        for i in 0..5 {
            buffer.push(i as f32);
        }

        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());
        let values: Vec<f32> = buffer.iter().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(buffer.sum(), 9.0);
        assert_eq!(buffer.mean(), Some(3.0));
    }

    #[test]
    fn filled_flag_set_on_first_wrap() {
        let mut buffer = RunningSumBuffer::<4>::new();
        for i in 0..3 {
            buffer.push(i as f32);
            assert!(!buffer.is_full());
        }
        buffer.push(3.0);
        assert!(buffer.is_full());
        assert_eq!(buffer.last(), Some(3.0));
    }

    #[test]
    fn clear_resets_sum() {
        let mut buffer = RunningSumBuffer::<2>::new();
        buffer.push(1.0);
        buffer.push(2.0);
        buffer.push(3.0);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.sum(), 0.0);
        assert_eq!(buffer.push(7.0), None);
    }

    #[test]
    fn sum_does_not_drift_over_a_year_of_readings() {
        // One reading every 5 s for 365 days
        const READINGS: u32 = 365 * 24 * 720;

        let mut buffer = RunningSumBuffer::<12>::new();
        let mut seed: u32 = 12345;
        for _ in 0..READINGS {
            seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
            let value = 5.0 + (seed >> 8) as f32 / (1u32 << 24) as f32 * 40.0;
            buffer.push(value);
        }

        let exact: f64 = buffer.iter().map(f64::from).sum::<f64>() / 12.0;
        let mean = f64::from(buffer.mean().unwrap());
        assert!((mean - exact).abs() < 1e-4, "mean {mean} drifted from {exact}");
    }

    #[test]
    fn single_slot_buffer_tracks_latest() {
        let mut buffer = RunningSumBuffer::<1>::new();
        buffer.push(3.0);
        assert_eq!(buffer.push(4.0), Some(3.0));
        assert_eq!(buffer.mean(), Some(4.0));
    }
}
