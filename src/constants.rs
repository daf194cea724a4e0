//! Constants used throughout the crate
//!
//! This module centralizes default patterns, file names and messages
//! to keep them consistent between the adapters and the config layer.

// Default patterns (chrono strftime syntax)
/// Default pattern for [`CustomDate`](crate::CustomDate) values
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Default pattern for [`CustomDateTime`](crate::CustomDateTime) values (RFC 3339, seconds precision)
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
/// Default pattern for [`CustomTime`](crate::CustomTime) values
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

// Adapter kind names, used in error messages and serde expectations
pub const KIND_DATE: &str = "date";
pub const KIND_DATE_TIME: &str = "date-time";
pub const KIND_TIME: &str = "time";

// Components of chrono's zero date (`NaiveDate::default()`), used to fill
// fields a pattern does not carry
pub const ZERO_YEAR: i64 = 1970;
pub const ZERO_MONTH: i64 = 1;
pub const ZERO_DAY: i64 = 1;

// Config file lookup
pub const CONFIG_FILE_NAME: &str = "custom_datetime.toml";
pub const CONFIG_DIR_NAME: &str = "custom-datetime";
pub const CONFIG_XDG_FILE_NAME: &str = "config.toml";

// Messages
pub const CONFIG_HEADER: &str = "# custom-datetime Configuration File\n# Patterns use chrono strftime syntax";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Logging
/// Timestamp format for log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
/// Default log level when logging is enabled without an explicit level
pub const DEFAULT_LOG_LEVEL: &str = "info";
