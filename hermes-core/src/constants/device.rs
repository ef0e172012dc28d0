//! Device Identity and Hardware Limits

/// Identifier stamped on every telemetry record.
pub const DEFAULT_DEVICE_ID: &str = "HR-PRED-MAINT-01";

/// Firmware version stamped on every telemetry record.
pub const DEFAULT_FIRMWARE_VERSION: &str = "1.0.0";

/// Largest value of the 10-bit ADC feeding the light and vibration channels.
pub const ADC_MAX: i32 = 1023;

/// Smallest value of the ADC.
pub const ADC_MIN: i32 = 0;
