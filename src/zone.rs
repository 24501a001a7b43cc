//! Timezone lookup and local-time resolution.
//!
//! Instant arithmetic and offset rules come from `chrono`; the IANA database
//! comes from `chrono-tz`. Every conversion in this crate is generic over
//! [`chrono::TimeZone`], so a `chrono_tz::Tz`, `Utc`, `FixedOffset` or any
//! caller-provided implementation can be passed in.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::prelude::*;

/// How to pick an instant for a local date-time that occurs twice, as
/// happens when clocks are wound back at the end of daylight saving time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Disambiguation {
    /// The first occurrence, i.e. the one with the larger UTC offset.
    #[default]
    #[display(fmt = "earliest")]
    Earliest,
    /// The second occurrence.
    #[display(fmt = "latest")]
    Latest,
    /// Fail with [`CivilError::AmbiguousLocalTime`].
    #[display(fmt = "reject")]
    Reject,
}

/// Resolves an IANA timezone name such as `"Australia/Sydney"`.
///
/// # Errors
///
/// Returns [`CivilError::InvalidTimezone`] if the name is not in the
/// timezone database.
///
/// # Examples
///
/// ```
/// let sydney = civil_datetime::timezone("Australia/Sydney").unwrap();
/// assert_eq!(sydney, chrono_tz::Australia::Sydney);
/// ```
pub fn timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| {
        debug!("unknown timezone {name:?}");
        CivilError::InvalidTimezone(name.to_owned())
    })
}

/// Finds the instant at which `local` is shown on a wall clock in `timezone`.
///
/// Local times skipped by a forward clock change have no instant and are
/// always an error. Local times that occur twice are resolved by `policy`.
pub(crate) fn resolve_local<Z: TimeZone>(
    timezone: &Z,
    local: &NaiveDateTime,
    policy: Disambiguation,
) -> Result<DateTime<Z>> {
    match timezone.from_local_datetime(local) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, latest) => {
            trace!("{local} is ambiguous, resolving with policy {policy}");
            match policy {
                Disambiguation::Earliest => Ok(earliest),
                Disambiguation::Latest => Ok(latest),
                Disambiguation::Reject => {
                    debug!("rejecting ambiguous local time {local}");
                    Err(CivilError::AmbiguousLocalTime(local.to_string()))
                }
            }
        }
        LocalResult::None => {
            debug!("local time {local} falls in a timezone gap");
            Err(CivilError::NonexistentLocalTime(local.to_string()))
        }
    }
}
