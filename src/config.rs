//! Configuration management for the adapters
//!
//! This module owns the process-wide [`Formats`] used by every adapter, the
//! thread-scoped override used for isolated configuration, and the loading,
//! parsing and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, CONFIG_HEADER, CONFIG_XDG_FILE_NAME, DEFAULT_DATE_FORMAT,
    DEFAULT_DATE_TIME_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_TIME_FORMAT,
};
use crate::{logger, Adapter, CustomDate, CustomDateTime, CustomTime};
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, TimeZone};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

static FORMATS: Lazy<RwLock<Formats>> = Lazy::new(|| RwLock::new(Formats::default()));

thread_local! {
    static SCOPED: RefCell<Option<Formats>> = const { RefCell::new(None) };
}

/// Patterns used to render and parse each adapter kind
///
/// Patterns use chrono's strftime syntax. Previously encoded text is not
/// self-describing: changing a pattern changes how every later value of that
/// kind is read and written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Formats {
    /// Pattern for [`CustomDate`] values
    pub date: String,
    /// Pattern for [`CustomDateTime`] values
    pub date_time: String,
    /// Pattern for [`CustomTime`] values
    pub time: String,
}

impl Default for Formats {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_FORMAT.to_string(),
            date_time: DEFAULT_DATE_TIME_FORMAT.to_string(),
            time: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Formats {
    pub fn with_date(mut self, format: impl Into<String>) -> Self {
        self.date = format.into();
        self
    }

    pub fn with_date_time(mut self, format: impl Into<String>) -> Self {
        self.date_time = format.into();
        self
    }

    pub fn with_time(mut self, format: impl Into<String>) -> Self {
        self.time = format.into();
        self
    }

    /// Snapshot of the formats active on the current thread
    pub fn current() -> Self {
        with_formats(Formats::clone)
    }

    /// Replace the process-wide formats
    ///
    /// Meant to be called once during startup, before values are encoded or
    /// decoded concurrently.
    pub fn install(self) {
        log::debug!(
            "Installing formats: date={:?} date_time={:?} time={:?}",
            self.date,
            self.date_time,
            self.time
        );
        *FORMATS.write().unwrap_or_else(PoisonError::into_inner) = self;
    }

    /// Use these formats on the current thread until the guard is dropped
    ///
    /// Takes precedence over the process-wide formats. Guards nest; dropping
    /// one restores whatever was active before it.
    pub fn scoped(self) -> ScopedFormats {
        let previous = SCOPED.with(|scoped| scoped.replace(Some(self)));
        ScopedFormats {
            previous,
            _not_send: PhantomData,
        }
    }

    /// Check that every pattern can be interpreted and read back
    pub fn validate(&self) -> Result<()> {
        let patterns = [("date", &self.date), ("date_time", &self.date_time), ("time", &self.time)];
        for (name, pattern) in patterns {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                anyhow::bail!("Invalid {} format '{}': unsupported specifier", name, pattern);
            }
        }

        let sample = FixedOffset::east_opt(0)
            .and_then(|utc| utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).single())
            .context("Failed to build sample instant")?;
        check_round_trip::<CustomDate>(sample, self).with_context(|| format!("Invalid date format '{}'", self.date))?;
        check_round_trip::<CustomDateTime>(sample, self)
            .with_context(|| format!("Invalid date_time format '{}'", self.date_time))?;
        check_round_trip::<CustomTime>(sample, self).with_context(|| format!("Invalid time format '{}'", self.time))?;

        Ok(())
    }
}

/// Render `sample` and read it back, expecting the narrowed value
fn check_round_trip<A: Adapter>(sample: DateTime<FixedOffset>, formats: &Formats) -> Result<()> {
    let value = A::from(sample);
    let text = value.render_with(formats);
    let parsed = A::parse_with(&text, formats)?;
    if parsed != value.narrowed() {
        anyhow::bail!("'{}' reads back as '{}'", text, parsed.render_with(formats));
    }
    Ok(())
}

/// Guard returned by [`Formats::scoped`]
#[must_use = "the scoped formats are reverted as soon as the guard is dropped"]
pub struct ScopedFormats {
    previous: Option<Formats>,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ScopedFormats {
    fn drop(&mut self) {
        let previous = self.previous.take();
        SCOPED.with(|scoped| *scoped.borrow_mut() = previous);
    }
}

/// Run `f` against the formats active on the current thread
pub(crate) fn with_formats<R>(f: impl FnOnce(&Formats) -> R) -> R {
    SCOPED.with(|scoped| match scoped.borrow().as_ref() {
        Some(formats) => f(formats),
        None => f(&FORMATS.read().unwrap_or_else(PoisonError::into_inner)),
    })
}

/// Set the process-wide pattern for [`CustomDate`]
pub fn set_date_format(format: impl Into<String>) {
    let format = format.into();
    log::debug!("Setting date format to {:?}", format);
    FORMATS.write().unwrap_or_else(PoisonError::into_inner).date = format;
}

/// Set the process-wide pattern for [`CustomDateTime`]
pub fn set_date_time_format(format: impl Into<String>) {
    let format = format.into();
    log::debug!("Setting date_time format to {:?}", format);
    FORMATS.write().unwrap_or_else(PoisonError::into_inner).date_time = format;
}

/// Set the process-wide pattern for [`CustomTime`]
pub fn set_time_format(format: impl Into<String>) {
    let format = format.into();
    log::debug!("Setting time format to {:?}", format);
    FORMATS.write().unwrap_or_else(PoisonError::into_inner).time = format;
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formats: Formats,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Install a stderr logger when the config is applied
    pub enabled: bool,
    /// Maximum level to emit ("error", "warn", "info", "debug", "trace")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load the first config file found, or defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::candidate_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {}", path.as_ref().display()))?;

        log::debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Files [`Config::load`] looks for, most specific first: the working
    /// directory, then the per-user config directory
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        paths.extend(Self::user_config_path().ok());
        paths
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.formats.validate()?;

        if let Err(e) = self.logging.level.parse::<log::LevelFilter>() {
            anyhow::bail!("Invalid logging level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    /// Install the formats process-wide and start logging if enabled
    ///
    /// Can be called again on reload: the formats are always replaced, and a
    /// logger installed earlier is kept with its level updated.
    pub fn apply(&self) -> Result<()> {
        let level = self
            .logging
            .level
            .parse::<log::LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", self.logging.level))?;

        self.formats.clone().install();

        if self.logging.enabled {
            if let Err(e) = logger::init(level) {
                log::set_max_level(level);
                log::warn!("Keeping the existing logger: {:#}", e);
            }
        }

        Ok(())
    }

    /// Default configuration as TOML, with a short header
    pub fn default_toml() -> Result<String> {
        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;
        Ok(format!("{}\n\n{}", CONFIG_HEADER, body))
    }

    /// Write [`Config::default_toml`] to `path`, creating missing directories
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(path, Self::default_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }

    /// Per-user config file, under the platform config directory
    pub fn user_config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_XDG_FILE_NAME))
    }
}
