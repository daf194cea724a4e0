//! custom-datetime - dates and times in a format you choose
//!
//! This library provides three wrappers around `chrono::DateTime<FixedOffset>`
//! whose textual form is controlled by a configurable strftime pattern instead
//! of a fixed default. The same pattern drives both directions of every serde
//! format they pass through: XML (elements, attributes, text and CDATA), JSON,
//! YAML and TOML, plus `Display`/`FromStr` and raw text bytes.
//!
//! # Modules
//!
//! * [`adapter`] - The [`Adapter`] trait shared by all wrappers
//! * [`date`] - [`CustomDate`], date only
//! * [`datetime`] - [`CustomDateTime`], date and time
//! * [`time`] - [`CustomTime`], time only
//! * [`config`] - Active [`Formats`] and configuration file handling
//! * [`error`] - [`FormatError`]
//! * [`logger`] - stderr logging for host applications
//!
//! # Example
//!
//! ```
//! use custom_datetime::{CustomDate, Formats};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Element {
//!     created_at: CustomDate,
//! }
//!
//! let _formats = Formats::default().with_date("%d•%m•%Y").scoped();
//!
//! let element = Element { created_at: CustomDate::from_ymd(2009, 11, 10).unwrap() };
//! assert_eq!(serde_json::to_string(&element).unwrap(), r#"{"created_at":"10•11•2009"}"#);
//! ```

/// Shared rendering, parsing and serde glue
pub mod adapter;

/// Configuration module for the active formats and config files
pub mod config;

/// Default patterns and other constant values
pub mod constants;

/// Date-only wrapper
pub mod date;

/// Date-time wrapper
pub mod datetime;

/// Error types
pub mod error;

/// Logging utilities for host applications
pub mod logger;

/// Time-only wrapper
pub mod time;

pub use adapter::Adapter;
pub use config::{set_date_format, set_date_time_format, set_time_format, Config, Formats, ScopedFormats};
pub use date::CustomDate;
pub use datetime::CustomDateTime;
pub use error::FormatError;
pub use time::CustomTime;
