//! Engine Configuration
//!
//! A plain value assembled in code: defaults come from [`crate::constants`]
//! and can be overridden with the `with_*` builder methods. There is no file
//! format and no runtime reconfiguration; the loop takes its configuration
//! once, at construction.
//!
//! ```rust
//! use hermes_core::config::EngineConfig;
//!
//! let config = EngineConfig::default()
//!     .with_sample_period_ms(10_000)
//!     .with_noise_seed(7);
//!
//! assert!(config.validate().is_ok());
//! ```

use crate::classifier::Thresholds;
use crate::constants::substitution::DEFAULT_NOISE_SEED;
use crate::constants::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_SAMPLE_PERIOD_MS};
use crate::errors::{ConfigError, ConfigResult};
use crate::noise::SubstitutionRanges;
use crate::record::DeviceIdentity;
use crate::time::Millis;

/// Everything the control loop needs to know before it starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub identity: DeviceIdentity,
    /// Expected spacing of control-loop iterations
    pub poll_interval_ms: Millis,
    /// Spacing of full acquisition cycles
    pub sample_period_ms: Millis,
    pub thresholds: Thresholds,
    pub substitution: SubstitutionRanges,
    pub noise_seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            identity: DeviceIdentity::default(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            sample_period_ms: DEFAULT_SAMPLE_PERIOD_MS,
            thresholds: Thresholds::standard(),
            substitution: SubstitutionRanges::default(),
            noise_seed: DEFAULT_NOISE_SEED,
        }
    }
}

impl EngineConfig {
    pub fn with_identity(mut self, identity: DeviceIdentity) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_poll_interval_ms(mut self, poll_interval_ms: Millis) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    pub fn with_sample_period_ms(mut self, sample_period_ms: Millis) -> Self {
        self.sample_period_ms = sample_period_ms;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_substitution(mut self, substitution: SubstitutionRanges) -> Self {
        self.substitution = substitution;
        self
    }

    pub fn with_noise_seed(mut self, noise_seed: u32) -> Self {
        self.noise_seed = noise_seed;
        self
    }

    /// Check the configuration for values the loop cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.identity.device_id.is_empty() {
            return Err(ConfigError::EmptyIdentity { field: "device_id" });
        }
        if self.identity.firmware_version.is_empty() {
            return Err(ConfigError::EmptyIdentity { field: "firmware_version" });
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "poll_interval_ms" });
        }
        if self.sample_period_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "sample_period_ms" });
        }
        if self.poll_interval_ms > self.sample_period_ms {
            return Err(ConfigError::PollSlowerThanPeriod {
                poll_ms: self.poll_interval_ms,
                period_ms: self.sample_period_ms,
            });
        }

        let bands = &self.thresholds;
        if !bands.temperature.is_ordered() {
            return Err(ConfigError::InvertedBand { signal: "temperature" });
        }
        if !bands.humidity.is_ordered() {
            return Err(ConfigError::InvertedBand { signal: "humidity" });
        }
        if !bands.light.is_ordered() {
            return Err(ConfigError::InvertedBand { signal: "light" });
        }
        if !bands.vibration.is_ordered() {
            return Err(ConfigError::InvertedBand { signal: "vibration" });
        }

        if !self.substitution.temperature.is_valid() {
            return Err(ConfigError::InvalidNoiseRange { signal: "temperature" });
        }
        if !self.substitution.humidity.is_valid() {
            return Err(ConfigError::InvalidNoiseRange { signal: "humidity" });
        }

        Ok(())
    }
}
