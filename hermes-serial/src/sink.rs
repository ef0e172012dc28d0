//! Serial-style telemetry sink
//!
//! Writes each record as one prefixed JSON line followed by its summary
//! line. The writer is flushed after every record so a capture of the port
//! never ends on half a cycle.

use std::io::Write;

use hermes_core::record::TelemetryRecord;
use hermes_core::traits::TelemetrySink;

use crate::SerialError;

/// Prefix marking a structured line in the serial stream
pub const JSON_PREFIX: &str = "JSON_DATA: ";

/// `TelemetrySink` over any byte writer
#[derive(Debug)]
pub struct SerialSink<W: Write> {
    writer: W,
    records_written: u64,
}

impl<W: Write> SerialSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
        }
    }

    /// Records fully written so far
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TelemetrySink for SerialSink<W> {
    type Error = SerialError;

    fn emit(&mut self, record: &TelemetryRecord) -> Result<(), SerialError> {
        let json = serde_json::to_string(record)?;
        writeln!(self.writer, "{JSON_PREFIX}{json}")?;
        writeln!(self.writer, "{}", record.summary())?;
        self.writer.flush()?;

        self.records_written += 1;
        Ok(())
    }
}
