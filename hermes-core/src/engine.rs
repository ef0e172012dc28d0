//! Cooperative Control Loop
//!
//! ## Overview
//!
//! [`ControlLoop`] owns every piece of mutable state the node has: the
//! sliding window, the indicator, the sequence counter, the substitution
//! noise and the acquisition timer, plus the hardware collaborators. There
//! are no globals; the loop value is created once at boot and polled until
//! power is lost.
//!
//! ## Cadences
//!
//! Each call to [`ControlLoop::poll`] reads the clock exactly once and
//! then:
//!
//! 1. If a full sample period has elapsed, runs one cycle:
//!    acquire → substitute → average → classify → build → emit → re-arm indicator
//! 2. Always ticks the indicator, so blinks advance between cycles
//!
//! The call never waits. It returns `Ok(report)` when a cycle ran and
//! `Err(nb::Error::WouldBlock)` otherwise, the same convention the `nb`
//! crate uses for non-blocking peripherals:
//!
//! ```rust
//! use hermes_core::config::EngineConfig;
//! use hermes_core::engine::ControlLoop;
//! use hermes_core::record::TelemetryRecord;
//! use hermes_core::sample::RawReading;
//! use hermes_core::time::FixedTime;
//! use hermes_core::traits::{IndicatorDevice, SensorSource, TelemetrySink};
//!
//! struct Bench;
//! impl SensorSource for Bench {
//!     fn acquire(&mut self) -> RawReading {
//!         RawReading::new(22.0, 50.0, 500, 100)
//!     }
//! }
//!
//! struct Led;
//! impl IndicatorDevice for Led {
//!     fn set_lit(&mut self, _lit: bool) {}
//! }
//!
//! struct Discard;
//! impl TelemetrySink for Discard {
//!     type Error = ();
//!     fn emit(&mut self, _record: &TelemetryRecord) -> Result<(), ()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut node = ControlLoop::new(EngineConfig::default(), Bench, Led, Discard, FixedTime::new(0))
//!     .expect("default config is valid");
//!
//! assert!(matches!(node.poll_at(100), Err(nb::Error::WouldBlock)));
//! let report = node.poll_at(5_000).expect("period elapsed");
//! assert_eq!(report.sequence_id, 1);
//! ```
//!
//! ## Work per cycle
//!
//! Bounded and constant: two ring-buffer slots per continuous signal, four
//! threshold comparisons, one record on the stack. Nothing allocates.

use core::convert::Infallible;

use crate::classifier::{HealthClassifier, HealthStatus};
use crate::config::EngineConfig;
use crate::errors::ConfigResult;
use crate::indicator::IndicatorController;
use crate::noise::SubstitutionNoise;
use crate::record::{CycleStats, TelemetryRecordBuilder};
use crate::sample::{Sample, Substituted};
use crate::time::{Millis, PeriodicTimer};
use crate::traits::{IndicatorDevice, SensorSource, TelemetrySink, TimeSource};
use crate::window::SlidingAverage;

/// Outcome of one full telemetry cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub sequence_id: u32,
    pub timestamp_ms: Millis,
    pub status: HealthStatus,
    pub alert_count: u8,
    /// Continuous channels replaced by substitution noise
    pub substituted: Substituted,
    /// False when the sink rejected the record
    pub emitted: bool,
    /// True when this cycle re-armed the indicator
    pub status_changed: bool,
}

/// The node's single control loop
pub struct ControlLoop<S, D, K, C> {
    config: EngineConfig,
    sensors: S,
    indicator: IndicatorController<D>,
    sink: K,
    clock: C,
    window: SlidingAverage,
    classifier: HealthClassifier,
    builder: TelemetryRecordBuilder,
    noise: SubstitutionNoise,
    cycle_timer: PeriodicTimer,
    sequence: u32,
    last_status: Option<HealthStatus>,
}

impl<S, D, K, C> ControlLoop<S, D, K, C>
where
    S: SensorSource,
    D: IndicatorDevice,
    K: TelemetrySink,
    C: TimeSource,
{
    /// Validate `config` and assemble the loop
    ///
    /// The first cycle runs one full sample period after the clock reading
    /// taken here.
    pub fn new(config: EngineConfig, sensors: S, indicator: D, sink: K, clock: C) -> ConfigResult<Self> {
        config.validate()?;

        let boot = clock.now_ms();
        Ok(Self {
            sensors,
            indicator: IndicatorController::new(indicator),
            sink,
            clock,
            window: SlidingAverage::new(),
            classifier: HealthClassifier::new(config.thresholds),
            builder: TelemetryRecordBuilder::new(config.identity, config.thresholds),
            noise: SubstitutionNoise::new(config.noise_seed),
            cycle_timer: PeriodicTimer::new(config.sample_period_ms, boot),
            sequence: 0,
            last_status: None,
            config,
        })
    }

    /// Run one loop iteration against the owned clock
    pub fn poll(&mut self) -> nb::Result<CycleReport, Infallible> {
        let now = self.clock.now_ms();
        self.poll_at(now)
    }

    /// Run one loop iteration at an explicit timestamp
    pub fn poll_at(&mut self, now: Millis) -> nb::Result<CycleReport, Infallible> {
        let report = if self.cycle_timer.poll(now) {
            Some(self.run_cycle(now))
        } else {
            None
        };

        self.indicator.tick(now);

        report.ok_or(nb::Error::WouldBlock)
    }

    fn run_cycle(&mut self, now: Millis) -> CycleReport {
        self.sequence = self.sequence.wrapping_add(1);
        let sequence_id = self.sequence;

        let raw = self.sensors.acquire();
        let ranges = self.config.substitution;
        let (temperature, temperature_substituted) = self.noise.fill(raw.temperature, ranges.temperature);
        let (humidity, humidity_substituted) = self.noise.fill(raw.humidity, ranges.humidity);
        let substituted = Substituted {
            temperature: temperature_substituted,
            humidity: humidity_substituted,
        };
        if substituted.any() {
            log_warn!(
                "reading #{}: sensor unavailable, substituted temperature={} humidity={}",
                sequence_id,
                substituted.temperature,
                substituted.humidity
            );
        }

        let sample = Sample {
            temperature,
            humidity,
            light: raw.light,
            vibration: raw.vibration,
            sequence_id,
            timestamp_ms: now,
        };

        let averages = self.window.update(temperature, humidity);
        let assessment = self.classifier.classify(&sample);
        let record = self.builder.build(
            &sample,
            &assessment,
            averages,
            CycleStats {
                uptime_ms: now,
                total_readings: sequence_id,
            },
        );

        let emitted = self.sink.emit(&record).is_ok();
        if !emitted {
            log_warn!("reading #{}: telemetry sink rejected record", sequence_id);
        }

        let status_changed = self.indicator.on_status_changed(assessment.status);
        if status_changed {
            log_info!("reading #{}: status changed to {}", sequence_id, assessment.status);
        }
        self.last_status = Some(assessment.status);

        log_debug!(
            "reading #{} complete: {} with {} alert(s)",
            sequence_id,
            assessment.status,
            assessment.alert_count
        );

        CycleReport {
            sequence_id,
            timestamp_ms: now,
            status: assessment.status,
            alert_count: assessment.alert_count,
            substituted,
            emitted,
            status_changed,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Readings taken so far
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Status of the most recent cycle, `None` before the first one
    pub fn last_status(&self) -> Option<HealthStatus> {
        self.last_status
    }

    pub fn window(&self) -> &SlidingAverage {
        &self.window
    }

    pub fn indicator(&self) -> &IndicatorController<D> {
        &self.indicator
    }

    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Tear the loop apart, returning the collaborators
    pub fn into_parts(self) -> (S, D, K, C) {
        (self.sensors, self.indicator.into_device(), self.sink, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TelemetryRecord;
    use crate::sample::RawReading;
    use crate::time::FixedTime;

    struct Scripted {
        readings: Vec<RawReading>,
        next: usize,
    }

    impl SensorSource for Scripted {
        fn acquire(&mut self) -> RawReading {
            let reading = self.readings[self.next % self.readings.len()];
            self.next += 1;
            reading
        }
    }

    #[derive(Default)]
    struct Light {
        lit: bool,
    }

    impl IndicatorDevice for Light {
        fn set_lit(&mut self, lit: bool) {
            self.lit = lit;
        }
    }

    #[derive(Default)]
    struct Collect {
        records: Vec<TelemetryRecord>,
        fail: bool,
    }

    impl TelemetrySink for Collect {
        type Error = ();

        fn emit(&mut self, record: &TelemetryRecord) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.records.push(record.clone());
            Ok(())
        }
    }

    fn node(readings: Vec<RawReading>) -> ControlLoop<Scripted, Light, Collect, FixedTime> {
        ControlLoop::new(
            EngineConfig::default(),
            Scripted { readings, next: 0 },
            Light::default(),
            Collect::default(),
            FixedTime::new(0),
        )
        .unwrap()
    }

    #[test]
    fn no_cycle_before_first_period() {
        let mut node = node(vec![RawReading::new(22.0, 50.0, 500, 100)]);

        for now in (0..5_000).step_by(100) {
            assert_eq!(node.poll_at(now), Err(nb::Error::WouldBlock));
        }
        assert!(node.sink().records.is_empty());
        assert_eq!(node.sequence(), 0);
    }

    #[test]
    fn cycle_emits_record_with_sequence_and_uptime() {
        let mut node = node(vec![RawReading::new(22.0, 50.0, 500, 100)]);

        let report = node.poll_at(5_000).unwrap();
        assert_eq!(report.sequence_id, 1);
        assert_eq!(report.status, HealthStatus::Normal);
        assert!(report.emitted);

        let record = &node.sink().records[0];
        assert_eq!(record.sequence_id, 1);
        assert_eq!(record.operational_stats.total_readings, 1);
        assert_eq!(record.operational_stats.uptime_ms, 5_000);
    }

    #[test]
    fn first_normal_reading_keeps_indicator_dark() {
        let mut node = node(vec![RawReading::new(22.0, 50.0, 500, 100)]);

        let report = node.poll_at(5_000).unwrap();
        assert!(!report.status_changed);
        assert!(!node.indicator().device().lit);
    }

    #[test]
    fn status_change_starts_blinking_on_same_iteration() {
        let mut node = node(vec![RawReading::new(40.0, 50.0, 500, 100)]);

        let report = node.poll_at(5_000).unwrap();
        assert_eq!(report.status, HealthStatus::Attention);
        assert!(report.status_changed);
        assert!(node.indicator().device().lit);
    }

    #[test]
    fn unavailable_sensor_is_substituted_not_dropped() {
        let mut node = node(vec![RawReading {
            temperature: None,
            humidity: Some(f32::NAN),
            light: 500,
            vibration: 100,
        }]);

        let report = node.poll_at(5_000).unwrap();
        assert!(report.substituted.temperature);
        assert!(report.substituted.humidity);
        assert!(report.emitted);

        let record = &node.sink().records[0];
        let temperature = record.per_signal.temperature.value.as_f32();
        let humidity = record.per_signal.humidity.value.as_f32();
        assert!((5.0..=35.0).contains(&temperature));
        assert!((20.0..=80.0).contains(&humidity));
    }

    #[test]
    fn sink_failure_does_not_stop_the_loop() {
        let mut node = node(vec![RawReading::new(22.0, 50.0, 500, 100)]);
        node.sink_mut().fail = true;

        let report = node.poll_at(5_000).unwrap();
        assert!(!report.emitted);

        node.sink_mut().fail = false;
        let report = node.poll_at(10_000).unwrap();
        assert_eq!(report.sequence_id, 2);
        assert!(report.emitted);
    }

    #[test]
    fn replaced_sensor_script_drives_next_cycle() {
        let mut node = node(vec![RawReading::new(22.0, 50.0, 500, 100)]);
        assert_eq!(node.poll_at(5_000).unwrap().status, HealthStatus::Normal);

        node.sensors_mut().readings = vec![RawReading::new(40.0, 80.0, 500, 100)];
        let report = node.poll_at(10_000).unwrap();
        assert_eq!(report.status, HealthStatus::Attention);
        assert!(report.status_changed);
        assert_eq!(node.last_status(), Some(HealthStatus::Attention));
    }

    #[test]
    fn poll_reads_owned_clock() {
        let mut node = node(vec![RawReading::new(22.0, 50.0, 500, 100)]);

        node.clock_mut().set(4_999);
        assert!(node.poll().is_err());
        node.clock_mut().advance(1);
        assert!(node.poll().is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = ControlLoop::new(
            EngineConfig::default().with_sample_period_ms(0),
            Scripted { readings: vec![RawReading::new(22.0, 50.0, 500, 100)], next: 0 },
            Light::default(),
            Collect::default(),
            FixedTime::new(0),
        );
        assert!(result.is_err());
    }
}
