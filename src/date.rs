//! Date-only adapter.

use crate::adapter::{self, utc, Adapter};
use crate::config::Formats;
use crate::constants::{DEFAULT_DATE_FORMAT, KIND_DATE};
use crate::error::FormatError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar date rendered through [`Formats::date`]
///
/// Wraps a full instant; the time of day is not part of its textual form and
/// comes back as midnight UTC after a round trip.
///
/// ```
/// use custom_datetime::{Adapter, CustomDate, Formats};
///
/// let _formats = Formats::default().with_date("%d•%m•%Y").scoped();
/// let date = CustomDate::from_ymd(2009, 11, 10).unwrap();
/// assert_eq!(date.to_string(), "10•11•2009");
/// assert_eq!(CustomDate::parse("10•11•2009").unwrap(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomDate(DateTime<FixedOffset>);

impl CustomDate {
    /// Midnight UTC on the given day, `None` if the date does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    /// Calendar date in the wrapped instant's own offset
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl Adapter for CustomDate {
    const KIND: &'static str = KIND_DATE;
    const DEFAULT_FORMAT: &'static str = DEFAULT_DATE_FORMAT;

    fn format(formats: &Formats) -> &str {
        &formats.date
    }

    fn narrow(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        utc().from_utc_datetime(&instant.date_naive().and_time(NaiveTime::MIN))
    }
}

impl Default for CustomDate {
    fn default() -> Self {
        Self(adapter::zero_instant())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CustomDate {
    fn from(instant: DateTime<Tz>) -> Self {
        Self(instant.fixed_offset())
    }
}

impl From<NaiveDate> for CustomDate {
    fn from(date: NaiveDate) -> Self {
        Self(utc().from_utc_datetime(&date.and_time(NaiveTime::MIN)))
    }
}

impl From<CustomDate> for DateTime<FixedOffset> {
    fn from(date: CustomDate) -> Self {
        date.0
    }
}

impl fmt::Display for CustomDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.render())
    }
}

impl FromStr for CustomDate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CustomDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        adapter::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for CustomDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        adapter::deserialize(deserializer)
    }
}
