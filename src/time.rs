//! Time-only adapter.

use crate::adapter::{self, utc, Adapter};
use crate::config::Formats;
use crate::constants::{DEFAULT_TIME_FORMAT, KIND_TIME};
use crate::error::FormatError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SubsecRound, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A time of day rendered through [`Formats::time`]
///
/// Values parsed from text sit on chrono's zero date, 1970-01-01, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomTime(DateTime<FixedOffset>);

impl CustomTime {
    /// The given time of day on the zero date, `None` if it does not exist
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self::from)
    }

    /// Time of day in the wrapped instant's own offset
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl Adapter for CustomTime {
    const KIND: &'static str = KIND_TIME;
    const DEFAULT_FORMAT: &'static str = DEFAULT_TIME_FORMAT;

    fn format(formats: &Formats) -> &str {
        &formats.time
    }

    fn narrow(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        utc().from_utc_datetime(&NaiveDate::default().and_time(instant.time().trunc_subsecs(0)))
    }
}

impl Default for CustomTime {
    fn default() -> Self {
        Self(adapter::zero_instant())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CustomTime {
    fn from(instant: DateTime<Tz>) -> Self {
        Self(instant.fixed_offset())
    }
}

impl From<NaiveTime> for CustomTime {
    fn from(time: NaiveTime) -> Self {
        Self(utc().from_utc_datetime(&NaiveDate::default().and_time(time)))
    }
}

impl From<CustomTime> for DateTime<FixedOffset> {
    fn from(time: CustomTime) -> Self {
        time.0
    }
}

impl fmt::Display for CustomTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.render())
    }
}

impl FromStr for CustomTime {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CustomTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        adapter::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for CustomTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        adapter::deserialize(deserializer)
    }
}
