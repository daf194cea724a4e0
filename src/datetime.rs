//! Date-time adapter.

use crate::adapter::{self, utc, Adapter};
use crate::config::Formats;
use crate::constants::{DEFAULT_DATE_TIME_FORMAT, KIND_DATE_TIME};
use crate::error::FormatError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SubsecRound, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A full date and time rendered through [`Formats::date_time`]
///
/// The default pattern is RFC 3339 at seconds precision, so the offset the
/// value was observed in survives a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomDateTime(DateTime<FixedOffset>);

impl CustomDateTime {
    /// Interpret `naive` as UTC
    pub fn from_naive_utc(naive: NaiveDateTime) -> Self {
        Self(utc().from_utc_datetime(&naive))
    }

    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl Adapter for CustomDateTime {
    const KIND: &'static str = KIND_DATE_TIME;
    const DEFAULT_FORMAT: &'static str = DEFAULT_DATE_TIME_FORMAT;

    fn format(formats: &Formats) -> &str {
        &formats.date_time
    }

    fn narrow(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        instant.trunc_subsecs(0)
    }
}

impl Default for CustomDateTime {
    fn default() -> Self {
        Self(adapter::zero_instant())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CustomDateTime {
    fn from(instant: DateTime<Tz>) -> Self {
        Self(instant.fixed_offset())
    }
}

impl From<NaiveDateTime> for CustomDateTime {
    fn from(naive: NaiveDateTime) -> Self {
        Self::from_naive_utc(naive)
    }
}

impl From<CustomDateTime> for DateTime<FixedOffset> {
    fn from(date_time: CustomDateTime) -> Self {
        date_time.0
    }
}

impl fmt::Display for CustomDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.render())
    }
}

impl FromStr for CustomDateTime {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CustomDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        adapter::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for CustomDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        adapter::deserialize(deserializer)
    }
}
