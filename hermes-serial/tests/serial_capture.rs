//! End-to-end: control loop → serial sink → capture file → extractor

use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom, Write};

use hermes_core::classifier::HealthStatus;
use hermes_core::config::EngineConfig;
use hermes_core::engine::ControlLoop;
use hermes_core::sample::Signal;
use hermes_core::time::FixedTime;
use hermes_serial::capture::{extract_readings, CaptureSummary};
use hermes_serial::{ConsoleIndicator, SerialSink, SimulatedSensors};

fn run_into(file: File, seed: u64, dropout: f64, cycles: u32) -> File {
    let mut node = ControlLoop::new(
        EngineConfig::default(),
        SimulatedSensors::new(seed, dropout),
        ConsoleIndicator::default(),
        SerialSink::new(file),
        FixedTime::new(0),
    )
    .unwrap();

    let mut now = 0u32;
    while node.sequence() < cycles {
        now += 100;
        let _ = node.poll_at(now);
    }

    let (_, _, sink, _) = node.into_parts();
    assert_eq!(sink.records_written(), u64::from(cycles));
    sink.into_inner()
}

#[test]
fn test_capture_round_trip() {
    let mut file = tempfile::tempfile().unwrap();
    writeln!(file, "Hermes predictive maintenance node").unwrap();

    let mut file = run_into(file, 11, 0.3, 24);
    file.seek(SeekFrom::Start(0)).unwrap();

    let readings = extract_readings(BufReader::new(file)).unwrap();
    assert_eq!(readings.len(), 24);

    for (i, reading) in readings.iter().enumerate() {
        let sequence = i as u32 + 1;
        assert_eq!(reading.device_id, "HR-PRED-MAINT-01");
        assert_eq!(reading.sequence_id, sequence);
        assert_eq!(reading.total_readings, sequence);
        assert_eq!(reading.uptime_ms, sequence * 5_000);
        assert!(reading.temperature_moving_average.is_some());
        assert!((0..=1023).contains(&reading.light_level));

        let alerts = Signal::ALL
            .iter()
            .filter(|&&signal| reading.status_of(signal).is_alert())
            .count();
        assert_eq!(reading.status, HealthStatus::from_alert_count(alerts as u8));
        assert_eq!(reading.risk_level, reading.status.risk_level());
    }

    let summary = CaptureSummary::from_readings(&readings);
    assert_eq!(summary.readings, 24);
    assert_eq!(summary.normal + summary.attention + summary.critical, 24);
}

#[test]
fn test_capture_with_sensor_offline() {
    let mut file = run_into(tempfile::tempfile().unwrap(), 5, 1.0, 6);
    file.seek(SeekFrom::Start(0)).unwrap();

    let readings = extract_readings(BufReader::new(file)).unwrap();
    assert_eq!(readings.len(), 6);
    for reading in &readings {
        assert!((5.0..=35.0).contains(&reading.temperature));
        assert!((20.0..=80.0).contains(&reading.humidity));
    }
}
