//! Error Types
//!
//! Every operation of the telemetry core is total: averaging, classifying,
//! building a record and rendering the indicator cannot fail, and an
//! unavailable sensor is handled by substitution rather than by an error.
//! The only fallible step is checking an [`EngineConfig`](crate::config::EngineConfig)
//! before the loop starts.
//!
//! Like the rest of the crate, errors carry no heap data: payloads are
//! `&'static str` field names and the enum is `Copy`.

use thiserror_no_std::Error;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected engine configuration
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A period or interval was zero
    #[error("{field} must be greater than zero")]
    ZeroInterval {
        /// Name of the offending setting
        field: &'static str,
    },

    /// The loop would poll less often than it samples
    #[error("poll interval {poll_ms} ms exceeds sample period {period_ms} ms")]
    PollSlowerThanPeriod {
        /// Configured poll interval
        poll_ms: u32,
        /// Configured acquisition period
        period_ms: u32,
    },

    /// A normal band has its minimum above its maximum
    #[error("threshold band for {signal} is inverted")]
    InvertedBand {
        /// Signal whose band is inverted
        signal: &'static str,
    },

    /// A substitution range is not finite or has a negative span
    #[error("substitution range for {signal} is invalid")]
    InvalidNoiseRange {
        /// Signal whose range is invalid
        signal: &'static str,
    },

    /// Device identity strings must not be empty
    #[error("{field} must not be empty")]
    EmptyIdentity {
        /// Name of the offending setting
        field: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroInterval { field } => defmt::write!(fmt, "{=str} must be > 0", field),
            Self::PollSlowerThanPeriod { poll_ms, period_ms } => {
                defmt::write!(fmt, "poll {} ms > period {} ms", poll_ms, period_ms)
            }
            Self::InvertedBand { signal } => defmt::write!(fmt, "inverted band: {=str}", signal),
            Self::InvalidNoiseRange { signal } => {
                defmt::write!(fmt, "invalid noise range: {=str}", signal)
            }
            Self::EmptyIdentity { field } => defmt::write!(fmt, "{=str} empty", field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_setting() {
        let err = ConfigError::ZeroInterval { field: "sample_period_ms" };
        assert_eq!(err.to_string(), "sample_period_ms must be greater than zero");

        let err = ConfigError::PollSlowerThanPeriod { poll_ms: 6000, period_ms: 5000 };
        assert_eq!(err.to_string(), "poll interval 6000 ms exceeds sample period 5000 ms");
    }
}
