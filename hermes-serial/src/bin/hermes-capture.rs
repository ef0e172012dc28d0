//! Serial Capture Extractor
//!
//! Pulls the structured telemetry out of a saved serial log and prints one
//! JSON row per reading, followed by a summary on stderr.
//!
//! # Usage
//! ```bash
//! hermes-capture serial_output.log > readings.jsonl
//! ```

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use hermes_core::sample::Signal;
use hermes_serial::capture::{extract_readings, CaptureSummary};
use hermes_serial::SerialError;

#[derive(Parser, Debug)]
#[command(name = "hermes-capture")]
#[command(about = "Extract Hermes telemetry from a serial capture")]
#[command(version)]
struct Args {
    /// Serial log to read
    capture: PathBuf,
}

fn main() -> Result<(), SerialError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    let args = Args::parse();
    let readings = extract_readings(BufReader::new(File::open(&args.capture)?))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for reading in &readings {
        serde_json::to_writer(&mut out, reading)?;
        writeln!(out)?;
    }

    let summary = CaptureSummary::from_readings(&readings);
    info!(
        "{} readings over {:.1}s",
        summary.readings,
        f64::from(summary.duration_ms) / 1000.0
    );
    if let Some(t) = summary.temperature {
        info!("temperature: {:.1}°C - {:.1}°C (mean {:.1}°C)", t.min, t.max, t.mean);
    }
    if let Some(h) = summary.humidity {
        info!("humidity: {:.1}% - {:.1}% (mean {:.1}%)", h.min, h.max, h.mean);
    }
    info!(
        "status: {} normal, {} attention, {} critical",
        summary.normal, summary.attention, summary.critical
    );
    for signal in Signal::ALL {
        info!("{}: {} alert(s)", signal, summary.alerts_for(signal));
    }
    Ok(())
}
