use std::cmp::Ordering;
use std::fmt::Write as _;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

use crate::consts::{DATE_COMPONENTS, DATE_SEPARATOR};
use crate::parse;
use crate::prelude::*;

/// A calendar date as seen by someone in an unspecified timezone.
///
/// Every value is a valid proleptic Gregorian date. Ordering is
/// lexicographic over `(year, month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", year, month, day)]
pub struct CivilDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl CivilDate {
    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns `CivilError::Invalid` if the components do not name a real
    /// calendar date, e.g. February 29 in a common year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self::from)
            .ok_or_else(|| {
                CivilError::invalid("date", format!("{year}-{month:02}-{day:02}"))
            })
    }

    /// Parses a `YYYY-MM-DD` stamp.
    ///
    /// The year is unpadded and may have any number of digits. Month and
    /// day may drop their zero padding (`2010-5-6`), which is restored on
    /// output.
    ///
    /// # Errors
    /// Returns `CivilError::Invalid` for anything that is not exactly three
    /// numeric components forming a valid date.
    ///
    /// # Examples
    ///
    /// ```
    /// use civil_datetime::CivilDate;
    ///
    /// let date = CivilDate::from_iso_date_stamp("1996-02-29").unwrap();
    /// assert_eq!(date.to_iso_date_stamp(), "1996-02-29");
    /// assert!(CivilDate::from_iso_date_stamp("2019-02-29").is_err());
    /// ```
    pub fn from_iso_date_stamp(stamp: &str) -> Result<Self> {
        let invalid = || {
            trace!("rejecting date stamp {stamp:?}");
            CivilError::invalid("date", stamp)
        };

        let parts: Vec<&str> = stamp.split(DATE_SEPARATOR).collect();
        if parts.len() != DATE_COMPONENTS {
            return Err(invalid());
        }
        let year = parse::canonical::<i32>(parts[0]).ok_or_else(invalid)?;
        let month = parse::padded::<u8>(parts[1]).ok_or_else(invalid)?;
        let day = parse::padded::<u8>(parts[2]).ok_or_else(invalid)?;

        Self::new(year, month, day).map_err(|_| invalid())
    }

    /// Renders the date as `YYYY-MM-DD`.
    pub fn to_iso_date_stamp(&self) -> String {
        self.to_string()
    }

    /// Renders the date with a strftime-style pattern, e.g. `"%a %-d %b %Y"`.
    ///
    /// # Errors
    /// Returns `CivilError::InvalidPattern` if the pattern is malformed or
    /// asks for fields a date does not have, such as the hour.
    pub fn format(&self, pattern: &str) -> Result<String> {
        render(pattern, |items, out| {
            write!(out, "{}", self.to_naive().format_with_items(items))
        })
    }

    /// The date on which `instant` falls for an observer in `timezone`.
    ///
    /// The same instant gives different dates in different timezones.
    pub fn for_moment_in_timezone<I, Z>(instant: &DateTime<I>, timezone: &Z) -> Self
    where
        I: TimeZone,
        Z: TimeZone,
    {
        Self::from(instant.with_timezone(timezone).date_naive())
    }

    /// Returns the date `days` calendar days later; negative values go back.
    ///
    /// # Errors
    /// Returns `CivilError::OutOfRange` if the result falls outside the
    /// range the calendar engine can represent.
    pub fn add_days(self, days: i64) -> Result<Self> {
        if days == 0 {
            return Ok(self);
        }
        let out_of_range = || CivilError::OutOfRange(format!("{self} + {days} days"));
        let midnight = self.to_naive().and_time(NaiveTime::MIN);
        TimeDelta::try_days(days)
            .and_then(|delta| midnight.checked_add_signed(delta))
            .map(|moved| Self::from(moved.date()))
            .ok_or_else(out_of_range)
    }

    /// Signed number of days from `b` to `a`: positive when `a` is later.
    pub fn diff_days(a: &Self, b: &Self) -> i64 {
        a.to_naive().signed_duration_since(b.to_naive()).num_days()
    }

    /// Whether this date is strictly after `other`.
    pub fn later_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// The earliest of `dates`; ties go to the first occurrence.
    ///
    /// # Panics
    /// Panics if `dates` is empty.
    pub fn earliest<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut dates = dates.into_iter();
        let Some(first) = dates.next() else {
            panic!("CivilDate::earliest called with no dates");
        };
        dates.fold(first, |earliest, date| {
            if earliest.later_than(&date) { date } else { earliest }
        })
    }

    /// The latest of `dates`; ties go to the first occurrence.
    ///
    /// # Panics
    /// Panics if `dates` is empty.
    pub fn latest<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut dates = dates.into_iter();
        let Some(first) = dates.next() else {
            panic!("CivilDate::latest called with no dates");
        };
        dates.fold(first, |latest, date| {
            if date.later_than(&latest) { date } else { latest }
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The equivalent chrono date.
    pub fn to_naive(&self) -> NaiveDate {
        // Components are validated on construction.
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Formats through chrono after checking the pattern compiles.
pub(crate) fn render<F>(pattern: &str, write: F) -> Result<String>
where
    F: FnOnce(StrftimeItems<'_>, &mut String) -> std::fmt::Result,
{
    let items = StrftimeItems::new(pattern);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(CivilError::InvalidPattern(pattern.to_owned()));
    }
    let mut out = String::new();
    write(items, &mut out).map_err(|_| CivilError::InvalidPattern(pattern.to_owned()))?;
    Ok(out)
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        // chrono months and days always fit in a byte.
        Self {
            year:  date.year(),
            month: date.month() as u8,
            day:   date.day() as u8,
        }
    }
}

impl From<CivilDate> for NaiveDate {
    fn from(date: CivilDate) -> Self {
        date.to_naive()
    }
}

impl FromStr for CivilDate {
    type Err = CivilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_iso_date_stamp(s)
    }
}

impl Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso_date_stamp())
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
