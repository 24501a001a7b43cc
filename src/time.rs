use std::cmp::Ordering;
use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::consts::{
    MAX_HOUR_12, MAX_HOUR_24, MAX_MINUTE, MAX_SECOND, NOON, TIME_COMPONENTS,
    TIME_COMPONENTS_WITHOUT_SECONDS, TIME_SEPARATOR,
};
use crate::date::render;
use crate::parse;
use crate::prelude::*;
use crate::types::Meridiem;

/// A wall clock reading with no date or timezone attached.
///
/// The hour is stored on the 24-hour clock. Ordering is lexicographic over
/// `(hour, minute, second)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct CivilTime {
    hour:   u8,
    minute: u8,
    second: u8,
}

impl CivilTime {
    /// Creates a time from 24-hour clock components.
    ///
    /// # Errors
    /// Returns `CivilError::Invalid` unless `hour <= 23`, `minute <= 59` and
    /// `second <= 59`.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > MAX_HOUR_24 || minute > MAX_MINUTE || second > MAX_SECOND {
            return Err(CivilError::invalid(
                "time",
                format!("{hour:02}:{minute:02}:{second:02}"),
            ));
        }
        Ok(Self { hour, minute, second })
    }

    /// Parses an `HH:MM:SS` stamp.
    ///
    /// Each component must be exactly two digits wide. Values are not range
    /// checked, so `"99:99:99"` is accepted as written.
    ///
    /// # Errors
    /// Returns `CivilError::Invalid` for a wrong component count, a wrong
    /// component width or a non-numeric component.
    pub fn from_24_hours_stamp(stamp: &str) -> Result<Self> {
        let [hour, minute, second] = clock_components::<TIME_COMPONENTS>(stamp)?;
        Ok(Self { hour, minute, second })
    }

    /// Parses an `HH:MM` stamp; the seconds are zero.
    ///
    /// # Errors
    /// Same rules as [`CivilTime::from_24_hours_stamp`] with two components.
    pub fn from_24_hours_without_seconds_stamp(stamp: &str) -> Result<Self> {
        let [hour, minute] = clock_components::<TIME_COMPONENTS_WITHOUT_SECONDS>(stamp)?;
        Ok(Self {
            hour,
            minute,
            second: 0,
        })
    }

    /// Builds a time from a 12-hour clock reading.
    ///
    /// `12 am` is midnight and `12 pm` is noon. Hour `0` is accepted and
    /// read on the 24-hour clock.
    ///
    /// # Errors
    /// Returns `CivilError::Invalid` unless `hour <= 12`, `minute <= 59` and
    /// `second <= 59`.
    ///
    /// # Examples
    ///
    /// ```
    /// use civil_datetime::{CivilTime, Meridiem};
    ///
    /// assert_eq!(CivilTime::from_12_hour_clock(12, 0, 0, Meridiem::Am).unwrap().hour_24(), 0);
    /// assert_eq!(CivilTime::from_12_hour_clock(11, 0, 0, Meridiem::Pm).unwrap().hour_24(), 23);
    /// ```
    pub fn from_12_hour_clock(hour: u8, minute: u8, second: u8, meridiem: Meridiem) -> Result<Self> {
        if hour > MAX_HOUR_12 || minute > MAX_MINUTE || second > MAX_SECOND {
            trace!("rejecting 12-hour reading {hour}:{minute}:{second} {meridiem}");
            return Err(CivilError::invalid(
                "12-hour time",
                format!("{hour:02}:{minute:02}:{second:02} {meridiem}"),
            ));
        }
        let hour = match (meridiem, hour) {
            (Meridiem::Am, NOON) => 0,
            (Meridiem::Am, h) | (Meridiem::Pm, h @ NOON) => h,
            (Meridiem::Pm, h) => h + NOON,
        };
        Ok(Self { hour, minute, second })
    }

    pub const fn hour_24(&self) -> u8 {
        self.hour
    }

    /// The hour on a 12-hour clock face: midnight and noon are both 12.
    pub const fn hour_12(&self) -> u8 {
        match self.hour {
            0 | NOON => NOON,
            h if h > NOON => h - NOON,
            h => h,
        }
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn meridiem(&self) -> Meridiem {
        Meridiem::of_hour(self.hour)
    }

    /// Renders the time as `HH:MM:SS`.
    pub fn to_24_hour_stamp(&self) -> String {
        self.to_string()
    }

    /// Whether this time is strictly after `other`.
    pub fn later_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// The equivalent chrono time.
    ///
    /// # Errors
    /// Returns `CivilError::OutOfRange` for a time read from a stamp whose
    /// components exceed the clock, e.g. `25:00:00`.
    pub fn to_naive(&self) -> Result<NaiveTime> {
        NaiveTime::from_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
        .ok_or_else(|| CivilError::OutOfRange(format!("{self} is not a clock time")))
    }

    /// Renders the time with a strftime-style pattern, e.g. `"%-I:%M %P"`.
    ///
    /// # Errors
    /// Returns `CivilError::InvalidPattern` for a malformed pattern or one
    /// that asks for date fields, and `CivilError::OutOfRange` if the time
    /// is not a clock time.
    pub fn format(&self, pattern: &str) -> Result<String> {
        let naive = self.to_naive()?;
        render(pattern, |items, out| write!(out, "{}", naive.format_with_items(items)))
    }
}

/// Splits a clock stamp into exactly `N` two-digit components.
fn clock_components<const N: usize>(stamp: &str) -> Result<[u8; N]> {
    let invalid = || {
        trace!("rejecting time stamp {stamp:?}");
        CivilError::invalid("time", stamp)
    };

    let parts: Vec<&str> = stamp.split(TIME_SEPARATOR).collect();
    if parts.len() != N {
        return Err(invalid());
    }
    let mut components = [0u8; N];
    for (slot, part) in components.iter_mut().zip(parts) {
        *slot = parse::clock_component(part).ok_or_else(invalid)?;
    }
    Ok(components)
}

impl From<NaiveTime> for CivilTime {
    fn from(time: NaiveTime) -> Self {
        // chrono clock fields always fit in a byte.
        Self {
            hour:   time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }
}

impl FromStr for CivilTime {
    type Err = CivilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_24_hours_stamp(s)
    }
}

impl Serialize for CivilTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_24_hour_stamp())
    }
}

impl<'de> Deserialize<'de> for CivilTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
