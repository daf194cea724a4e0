//! Rendering and parsing shared by the three adapter types
//!
//! Every adapter is a newtype over `DateTime<FixedOffset>` that differs only in
//! which pattern it reads from [`Formats`] and which parts of the instant it
//! keeps. [`Adapter`] captures those differences; everything else (text,
//! serde, generic byte hooks) is implemented once here on top of it.

use crate::config::{with_formats, Formats};
use crate::constants::{ZERO_DAY, ZERO_MONTH, ZERO_YEAR};
use crate::error::{FormatError, Result};
use chrono::format::{self, Item, ParseErrorKind, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A date/time value rendered and parsed through a configurable pattern
pub trait Adapter: Sized + Copy + PartialEq + From<DateTime<FixedOffset>> + Into<DateTime<FixedOffset>> {
    /// Name of the adapter kind, used in errors
    const KIND: &'static str;

    /// Pattern used when the configured one cannot be rendered
    const DEFAULT_FORMAT: &'static str;

    /// Select this kind's pattern
    fn format(formats: &Formats) -> &str;

    /// Drop the parts of `instant` this kind does not carry
    fn narrow(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset>;

    /// The wrapped instant
    fn instant(&self) -> DateTime<FixedOffset> {
        (*self).into()
    }

    /// This value with the kind's narrowing applied
    fn narrowed(&self) -> Self {
        Self::from(Self::narrow(self.instant()))
    }

    /// Render through the active pattern
    fn render(&self) -> String {
        with_formats(|formats| self.render_with(formats))
    }

    /// Render through the pattern in `formats`
    fn render_with(&self, formats: &Formats) -> String {
        render(&self.instant(), Self::format(formats), Self::DEFAULT_FORMAT)
    }

    /// Parse `text` against the active pattern
    ///
    /// The whole text must match; surrounding whitespace is not skipped.
    /// Weekday fields are checked for shape but never constrain the date.
    fn parse(text: &str) -> Result<Self> {
        with_formats(|formats| Self::parse_with(text, formats))
    }

    /// Parse `text` against the pattern in `formats`
    fn parse_with(text: &str, formats: &Formats) -> Result<Self> {
        let pattern = Self::format(formats);
        match parse(text, pattern) {
            Ok(Some(instant)) => Ok(Self::from(instant)),
            Ok(None) => Err(FormatError::OutOfRange {
                kind: Self::KIND,
                input: text.to_string(),
            }),
            Err(source) => Err(FormatError::Mismatch {
                kind: Self::KIND,
                input: text.to_string(),
                format: pattern.to_string(),
                source,
            }),
        }
    }

    /// Rendered text as raw bytes
    fn encode_text(&self) -> Vec<u8> {
        self.render().into_bytes()
    }

    /// Parse raw UTF-8 bytes against the active pattern
    fn decode_text(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|source| FormatError::InvalidUtf8 {
            kind: Self::KIND,
            source,
        })?;
        Self::parse(text)
    }

    /// Replace this value with the one parsed from `text`
    ///
    /// On failure `self` is left untouched.
    fn set_from_str(&mut self, text: &str) -> Result<()> {
        *self = Self::parse(text)?;
        Ok(())
    }
}

pub(crate) fn utc() -> FixedOffset {
    Utc.fix()
}

/// Chrono's zero instant, 1970-01-01T00:00:00+00:00
pub(crate) fn zero_instant() -> DateTime<FixedOffset> {
    utc().from_utc_datetime(&NaiveDate::default().and_time(NaiveTime::MIN))
}

fn render(instant: &DateTime<FixedOffset>, pattern: &str, fallback: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        log::warn!("Format {:?} has unsupported specifiers, rendering with {:?}", pattern, fallback);
        return instant.format(fallback).to_string();
    }
    instant.format_with_items(items.iter()).to_string()
}

fn parse(text: &str, pattern: &str) -> ParseResult<Option<DateTime<FixedOffset>>> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, StrftimeItems::new(pattern))?;
    // Weekday names never constrain the date, which comes from numeric fields only
    parsed.weekday = None;

    if let Ok(instant) = parsed.to_datetime() {
        return Ok(Some(instant));
    }

    let date_fills: [Fill; 3] = [
        |p| p.set_year(ZERO_YEAR),
        |p| p.set_month(ZERO_MONTH),
        |p| p.set_day(ZERO_DAY),
    ];
    let time_fills: [Fill; 2] = [|p| p.set_minute(0), |p| p.set_hour(0)];

    let date = complete(&parsed, &date_fills, Parsed::to_naive_date, NaiveDate::default())?;
    let time = complete(&parsed, &time_fills, Parsed::to_naive_time, NaiveTime::MIN)?;
    let offset = match parsed.to_fixed_offset() {
        Ok(offset) => offset,
        Err(e) if e.kind() == ParseErrorKind::NotEnough => utc(),
        Err(e) => return Err(e),
    };

    Ok(offset.from_local_datetime(&date.and_time(time)).single())
}

type Fill = fn(&mut Parsed) -> ParseResult<()>;

/// Resolve a value from `parsed`, filling missing fields one at a time
///
/// Fields read from the text always win over the zero value; a fill that
/// conflicts with them is ignored. Falls back to `zero` when the text carried
/// none of the fields at all.
fn complete<T>(parsed: &Parsed, fills: &[Fill], resolve: fn(&Parsed) -> ParseResult<T>, zero: T) -> ParseResult<T> {
    let mut filled = parsed.clone();
    let mut result = resolve(&filled);
    for fill in fills {
        match &result {
            Err(e) if e.kind() == ParseErrorKind::NotEnough => {}
            _ => return result,
        }
        let _ = fill(&mut filled);
        result = resolve(&filled);
    }

    match result {
        Err(e) if e.kind() == ParseErrorKind::NotEnough => Ok(zero),
        other => other,
    }
}

/// Serialize `value` as its rendered text
pub(crate) fn serialize<A: Adapter, S: Serializer>(value: &A, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.render())
}

/// Deserialize a value from a text scalar
pub(crate) fn deserialize<'de, A: Adapter, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<A, D::Error> {
    deserializer.deserialize_str(TextVisitor(PhantomData))
}

struct TextVisitor<A>(PhantomData<A>);

impl<A: Adapter> Visitor<'_> for TextVisitor<A> {
    type Value = A;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = with_formats(|formats| A::format(formats).to_string());
        write!(f, "a {} in the format {:?}", A::KIND, pattern)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<A, E> {
        A::parse(value).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> std::result::Result<A, E> {
        let text = std::str::from_utf8(value)
            .map_err(|source| E::custom(FormatError::InvalidUtf8 { kind: A::KIND, source }))?;
        self.visit_str(text)
    }
}
