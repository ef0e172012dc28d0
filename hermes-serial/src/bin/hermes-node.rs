//! Hermes Node on a Host
//!
//! Runs the full control loop against simulated sensors, writing the serial
//! stream to stdout and the status light to the log.
//!
//! # Usage
//! ```bash
//! RUST_LOG=info hermes-node --cycles 20 --dropout 0.2 > serial_output.log
//! ```

use std::io;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::info;

use hermes_core::config::EngineConfig;
use hermes_core::constants::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_SAMPLE_PERIOD_MS};
use hermes_core::engine::ControlLoop;
use hermes_serial::{ConsoleIndicator, SerialError, SerialSink, SimulatedSensors, StdClock};

#[derive(Parser, Debug)]
#[command(name = "hermes-node")]
#[command(about = "Hermes predictive-maintenance node with simulated sensors")]
#[command(version)]
struct Args {
    /// Stop after this many cycles (runs until interrupted when absent)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    cycles: Option<u32>,

    /// Seed for the simulated sensors
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Probability that the temperature/humidity sensor misses a read
    #[arg(long, default_value_t = 0.05)]
    dropout: f64,

    /// Control loop poll interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    poll_ms: u32,

    /// Acquisition period in milliseconds
    #[arg(long, default_value_t = DEFAULT_SAMPLE_PERIOD_MS)]
    period_ms: u32,
}

fn main() -> Result<(), SerialError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let config = EngineConfig::default()
        .with_poll_interval_ms(args.poll_ms)
        .with_sample_period_ms(args.period_ms)
        .with_noise_seed(args.seed as u32);
    config.validate()?;

    info!("Hermes predictive maintenance node");
    info!(
        "device {} | firmware {}",
        config.identity.device_id, config.identity.firmware_version
    );
    info!("sensors: temperature/humidity, light, vibration, status light");
    info!(
        "read period {} ms | poll {} ms | dropout {:.2}",
        config.sample_period_ms, config.poll_interval_ms, args.dropout
    );
    info!("waiting for first reading");

    let mut node = ControlLoop::new(
        config,
        SimulatedSensors::new(args.seed, args.dropout),
        ConsoleIndicator::default(),
        SerialSink::new(io::stdout()),
        StdClock::new(),
    )?;

    let poll = Duration::from_millis(u64::from(args.poll_ms));
    loop {
        if let Ok(report) = node.poll() {
            if args.cycles.is_some_and(|limit| report.sequence_id >= limit) {
                break;
            }
        }
        thread::sleep(poll);
    }

    info!(
        "stopped after {} readings, {} written",
        node.sequence(),
        node.sink().records_written()
    );
    Ok(())
}
