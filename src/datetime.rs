use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::consts::DATE_TIME_SEPARATOR;
use crate::date::{CivilDate, render};
use crate::prelude::*;
use crate::time::CivilTime;
use crate::types::Meridiem;
use crate::zone::{self, Disambiguation};

/// A civil date paired with a civil time, still without a timezone.
///
/// Ordering compares dates first and times second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}T{}", date, time)]
pub struct CivilDateTime {
    date: CivilDate,
    time: CivilTime,
}

impl CivilDateTime {
    pub const fn new(date: CivilDate, time: CivilTime) -> Self {
        Self { date, time }
    }

    /// Parses a `YYYY-MM-DDTHH:MM:SS` stamp.
    ///
    /// # Errors
    /// Returns `CivilError::Invalid` unless there is exactly one `T` and both
    /// halves parse on their own.
    ///
    /// # Examples
    ///
    /// ```
    /// use civil_datetime::CivilDateTime;
    ///
    /// let stamp = "2010-05-06T06:13:59";
    /// let dt = CivilDateTime::from_iso_date_time_stamp(stamp).unwrap();
    /// assert_eq!(dt.to_iso_date_time_stamp(), stamp);
    /// ```
    pub fn from_iso_date_time_stamp(stamp: &str) -> Result<Self> {
        let invalid = || CivilError::invalid("date-time", stamp);

        let mut halves = stamp.split(DATE_TIME_SEPARATOR);
        let (Some(date), Some(time), None) = (halves.next(), halves.next(), halves.next()) else {
            trace!("rejecting date-time stamp {stamp:?}");
            return Err(invalid());
        };
        let date = CivilDate::from_iso_date_stamp(date).map_err(|_| invalid())?;
        let time = CivilTime::from_24_hours_stamp(time).map_err(|_| invalid())?;
        Ok(Self { date, time })
    }

    /// Renders as `YYYY-MM-DDTHH:MM:SS`.
    pub fn to_iso_date_time_stamp(&self) -> String {
        self.to_string()
    }

    /// The date and time shown on a wall clock in `timezone` at `instant`.
    ///
    /// Both halves come from the same localized reading.
    pub fn for_moment_in_timezone<I, Z>(instant: &DateTime<I>, timezone: &Z) -> Self
    where
        I: TimeZone,
        Z: TimeZone,
    {
        let local = instant.with_timezone(timezone).naive_local();
        trace!("{instant:?} is {local} on the wall clock");
        Self::from(local)
    }

    /// The instant at which this date-time is shown on a wall clock in
    /// `timezone`.
    ///
    /// A wall time that occurs twice when clocks go back resolves to the
    /// earlier instant. Use [`CivilDateTime::to_date_time_with`] to choose
    /// otherwise.
    ///
    /// # Errors
    /// Returns `CivilError::NonexistentLocalTime` for a wall time skipped when
    /// clocks go forward, and `CivilError::OutOfRange` if the time is not a
    /// clock time (it was parsed from a stamp such as `25:00:00`).
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use chrono_tz::Australia::Sydney;
    /// use civil_datetime::CivilDateTime;
    ///
    /// let dt = CivilDateTime::from_iso_date_time_stamp("2010-05-06T16:13:59").unwrap();
    /// let instant = dt.to_date_time_in(&Sydney).unwrap();
    /// assert_eq!(instant.with_timezone(&Utc), Utc.with_ymd_and_hms(2010, 5, 6, 6, 13, 59).unwrap());
    /// ```
    pub fn to_date_time_in<Z: TimeZone>(&self, timezone: &Z) -> Result<DateTime<Z>> {
        self.to_date_time_with(timezone, Disambiguation::default())
    }

    /// Like [`CivilDateTime::to_date_time_in`] with an explicit policy for
    /// wall times that occur twice.
    ///
    /// # Errors
    /// As [`CivilDateTime::to_date_time_in`], plus
    /// `CivilError::AmbiguousLocalTime` under [`Disambiguation::Reject`].
    pub fn to_date_time_with<Z: TimeZone>(
        &self,
        timezone: &Z,
        policy: Disambiguation,
    ) -> Result<DateTime<Z>> {
        let local = self.to_naive()?;
        zone::resolve_local(timezone, &local, policy)
    }

    /// The equivalent chrono date-time.
    ///
    /// # Errors
    /// Returns `CivilError::OutOfRange` if the time is not a clock time.
    pub fn to_naive(&self) -> Result<NaiveDateTime> {
        Ok(self.date.to_naive().and_time(self.time.to_naive()?))
    }

    /// Renders with a strftime-style pattern, e.g. `"%Y-%m-%d %H:%M"`.
    ///
    /// # Errors
    /// Returns `CivilError::InvalidPattern` for a malformed pattern and
    /// `CivilError::OutOfRange` if the time is not a clock time.
    pub fn format(&self, pattern: &str) -> Result<String> {
        let naive = self.to_naive()?;
        render(pattern, |items, out| write!(out, "{}", naive.format_with_items(items)))
    }

    /// Whether this date-time is strictly after `other`.
    pub fn later_than(&self, other: &Self) -> bool {
        if self.date.later_than(&other.date) {
            return true;
        }
        if other.date.later_than(&self.date) {
            return false;
        }
        self.time.later_than(&other.time)
    }

    pub const fn date(&self) -> CivilDate {
        self.date
    }

    pub const fn time(&self) -> CivilTime {
        self.time
    }

    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    pub const fn hour_24(&self) -> u8 {
        self.time.hour_24()
    }

    pub const fn hour_12(&self) -> u8 {
        self.time.hour_12()
    }

    pub const fn minute(&self) -> u8 {
        self.time.minute()
    }

    pub const fn second(&self) -> u8 {
        self.time.second()
    }

    pub const fn meridiem(&self) -> Meridiem {
        self.time.meridiem()
    }
}

impl From<NaiveDateTime> for CivilDateTime {
    fn from(local: NaiveDateTime) -> Self {
        Self {
            date: CivilDate::from(local.date()),
            time: CivilTime::from(local.time()),
        }
    }
}

impl From<(CivilDate, CivilTime)> for CivilDateTime {
    fn from((date, time): (CivilDate, CivilTime)) -> Self {
        Self::new(date, time)
    }
}

impl FromStr for CivilDateTime {
    type Err = CivilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_iso_date_time_stamp(s)
    }
}

impl Serialize for CivilDateTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso_date_time_stamp())
    }
}

impl<'de> Deserialize<'de> for CivilDateTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use chrono_tz::America::New_York;
    use chrono_tz::Australia::{Adelaide, Sydney};
    use proptest::prelude::*;

    fn dt(stamp: &str) -> CivilDateTime {
        CivilDateTime::from_iso_date_time_stamp(stamp).unwrap()
    }

    fn utc(stamp: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(stamp).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_stamp_round_trip() {
        let stamp = "2010-05-06T06:13:59";
        assert_eq!(dt(stamp).to_iso_date_time_stamp(), stamp);
    }

    #[test]
    fn test_to_iso_date_time_stamp_from_parts() {
        let date = CivilDate::new(2010, 5, 6).unwrap();
        let time = CivilTime::new(6, 13, 59).unwrap();
        let value = CivilDateTime::new(date, time);
        assert_eq!(value.to_iso_date_time_stamp(), "2010-05-06T06:13:59");
        assert_eq!(CivilDateTime::from((date, time)), value);
        assert_eq!(value.date(), date);
        assert_eq!(value.time(), time);
    }

    #[test]
    fn test_accessors_delegate() {
        let value = dt("2021-01-23T18:05:09");
        assert_eq!(value.year(), 2021);
        assert_eq!(value.month(), 1);
        assert_eq!(value.day(), 23);
        assert_eq!(value.hour_24(), 18);
        assert_eq!(value.hour_12(), 6);
        assert_eq!(value.minute(), 5);
        assert_eq!(value.second(), 9);
        assert_eq!(value.meridiem(), Meridiem::Pm);
    }

    #[test]
    fn test_parse_rejects() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase { input: "2010-05-06", description: "missing separator" },
            TestCase { input: "2010-05-06 06:13:59", description: "space separator" },
            TestCase { input: "2010-05-06TT06:13:59", description: "doubled separator" },
            TestCase { input: "2010-05-06T06:13:59T", description: "trailing separator" },
            TestCase { input: "2010-02-30T06:13:59", description: "invalid date half" },
            TestCase { input: "2010-05-06T6:13:59", description: "narrow hour" },
            TestCase { input: "2010-05-06T06:13", description: "missing seconds" },
            TestCase { input: "2010-05-06T06:13:59Z", description: "zone suffix" },
            TestCase { input: "", description: "empty input" },
        ];

        for case in &cases {
            let result = CivilDateTime::from_iso_date_time_stamp(case.input);
            assert!(
                matches!(result, Err(CivilError::Invalid { kind: "date-time", .. })),
                "{} ({:?}) should be rejected",
                case.description,
                case.input
            );
        }
    }

    #[test]
    fn test_for_moment_in_timezone() {
        let cases = [
            ("2021-01-22T19:55:02Z", "2021-01-23T06:55:02", "2021-01-23T06:25:02"),
            ("2021-01-22T20:19:16Z", "2021-01-23T07:19:16", "2021-01-23T06:49:16"),
            ("2021-06-26T20:34:05+10:00", "2021-06-26T20:34:05", "2021-06-26T20:04:05"),
            ("2021-01-26T09:40:00Z", "2021-01-26T20:40:00", "2021-01-26T20:10:00"),
        ];

        for (instant, sydney, adelaide) in cases {
            let instant = utc(instant);
            assert_eq!(CivilDateTime::for_moment_in_timezone(&instant, &Sydney).to_iso_date_time_stamp(), sydney);
            assert_eq!(CivilDateTime::for_moment_in_timezone(&instant, &Adelaide).to_iso_date_time_stamp(), adelaide);
        }
    }

    #[test]
    fn test_for_moment_in_fixed_offset() {
        let instant = utc("2021-01-22T19:55:00Z");
        let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(
            CivilDateTime::for_moment_in_timezone(&instant, &offset).to_iso_date_time_stamp(),
            "2021-01-23T01:25:00"
        );
    }

    #[test]
    fn test_for_moment_agrees_with_civil_date() {
        let instant = utc("2021-01-22T13:29:59Z");
        let value = CivilDateTime::for_moment_in_timezone(&instant, &Adelaide);
        assert_eq!(value.date(), CivilDate::for_moment_in_timezone(&instant, &Adelaide));
    }

    #[test]
    fn test_to_date_time_in() {
        let instant = dt("2010-05-06T16:13:59").to_date_time_in(&Sydney).unwrap();
        assert_eq!(instant.with_timezone(&Utc), utc("2010-05-06T06:13:59Z"));

        let instant = dt("2020-05-06T06:10:15").to_date_time_in(&Adelaide).unwrap();
        assert_eq!(instant.with_timezone(&Utc), utc("2020-05-05T20:40:15Z"));
        assert_eq!(
            instant.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2020-05-05T20:40:15"
        );
    }

    #[test]
    fn test_to_date_time_in_fall_back() {
        // New York winds clocks back from 02:00 EDT to 01:00 EST on 2021-11-07.
        let value = dt("2021-11-07T01:30:00");

        let default = value.to_date_time_in(&New_York).unwrap();
        assert_eq!(default.with_timezone(&Utc), utc("2021-11-07T05:30:00Z"));

        let latest = value.to_date_time_with(&New_York, Disambiguation::Latest).unwrap();
        assert_eq!(latest.with_timezone(&Utc), utc("2021-11-07T06:30:00Z"));

        let rejected = value.to_date_time_with(&New_York, Disambiguation::Reject);
        assert!(matches!(rejected, Err(CivilError::AmbiguousLocalTime(_))));
    }

    #[test]
    fn test_to_date_time_in_spring_forward() {
        // New York skips from 02:00 EST to 03:00 EDT on 2021-03-14.
        let result = dt("2021-03-14T02:30:00").to_date_time_in(&New_York);
        assert_eq!(
            result,
            Err(CivilError::NonexistentLocalTime("2021-03-14 02:30:00".to_owned()))
        );
    }

    #[test]
    fn test_to_date_time_in_rejects_unclocked_time() {
        let result = dt("2021-03-14T25:00:00").to_date_time_in(&Utc);
        assert!(matches!(result, Err(CivilError::OutOfRange(_))));
    }

    #[test]
    fn test_round_trip_through_instant() {
        let value = dt("2021-06-26T20:34:05");
        let instant = value.to_date_time_in(&Sydney).unwrap();
        assert_eq!(CivilDateTime::for_moment_in_timezone(&instant, &Sydney), value);
    }

    #[test]
    fn test_later_than() {
        let cases = [
            ("2010-05-06T20:15:13", "2010-05-06T20:15:14", false),
            ("2010-05-06T20:15:14", "2010-05-06T20:15:14", false),
            ("2010-05-06T20:15:15", "2010-05-06T20:15:14", true),
            ("2010-05-06T20:14:14", "2010-05-06T20:15:14", false),
            ("2010-05-06T20:16:14", "2010-05-06T20:15:14", true),
            ("2010-05-06T19:15:14", "2010-05-06T20:15:14", false),
            ("2010-05-06T21:15:14", "2010-05-06T20:15:14", true),
            ("2010-05-05T20:15:14", "2010-05-06T20:15:14", false),
            ("2010-05-07T20:15:14", "2010-05-06T20:15:14", true),
            ("2010-05-07T20:15:14", "2010-05-06T21:15:14", true),
            ("2010-06-07T20:15:14", "2010-05-08T21:15:14", true),
            ("2011-06-07T20:15:14", "2010-12-08T21:55:14", true),
            ("2009-06-07T20:15:14", "2010-01-01T01:05:04", false),
        ];

        for (a, b, expected) in cases {
            assert_eq!(dt(a).later_than(&dt(b)), expected, "{a} later than {b}");
        }
    }

    #[test]
    fn test_format() {
        let value = dt("2021-04-24T14:05:09");
        assert_eq!(value.format("%a %-d %b %Y, %-I:%M %P").unwrap(), "Sat 24 Apr 2021, 2:05 pm");
        assert!(matches!(value.format("%Q"), Err(CivilError::InvalidPattern(_))));
    }

    #[test]
    fn test_serde() {
        let value = dt("2010-05-06T06:13:59");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#""2010-05-06T06:13:59""#);
        let parsed: CivilDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        let result: std::result::Result<CivilDateTime, _> = serde_json::from_str(r#""2010-05-06""#);
        assert!(result.is_err());
    }

    fn any_date_time() -> impl Strategy<Value = CivilDateTime> {
        (1900i32..=2100, 1u8..=12, 1u8..=28, 0u8..=23, 0u8..=59, 0u8..=59).prop_map(|(y, mo, d, h, mi, s)| {
            CivilDateTime::new(CivilDate::new(y, mo, d).unwrap(), CivilTime::new(h, mi, s).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_stamp_round_trip(value in any_date_time()) {
            prop_assert_eq!(dt(&value.to_iso_date_time_stamp()), value);
        }

        #[test]
        fn prop_later_than_is_strict_order(a in any_date_time(), b in any_date_time(), c in any_date_time()) {
            prop_assert!(!a.later_than(&a));
            prop_assert!(!(a.later_than(&b) && b.later_than(&a)));
            if a.later_than(&b) && b.later_than(&c) {
                prop_assert!(a.later_than(&c));
            }
            prop_assert_eq!(a.later_than(&b), a > b);
        }
    }
}
