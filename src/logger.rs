//! Logging setup for host applications.
//!
//! The library itself only emits through the `log` facade; this installs a
//! stderr dispatcher for binaries and demos that want to see it.

use crate::constants::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;

/// Install a stderr logger emitting records up to `level`
///
/// Fails if a global logger was already installed.
pub fn init(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Utc::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("Failed to install logger")
}
