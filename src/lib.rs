//! Civil dates, times of day and date-times: calendar values as a person
//! reads them off a calendar or a wall clock, with no timezone attached.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use civil_datetime::{CivilDate, CivilDateTime, timezone};
//!
//! let sydney = timezone("Australia/Sydney").unwrap();
//! let instant = Utc.with_ymd_and_hms(2021, 1, 22, 19, 55, 0).unwrap();
//!
//! let date = CivilDate::for_moment_in_timezone(&instant, &sydney);
//! assert_eq!(date.to_iso_date_stamp(), "2021-01-23");
//!
//! let dt = CivilDateTime::for_moment_in_timezone(&instant, &sydney);
//! assert_eq!(dt.to_iso_date_time_stamp(), "2021-01-23T06:55:00");
//! ```

#[macro_use]
mod logging;

mod consts;
mod date;
mod datetime;
mod error;
mod parse;
mod prelude;
mod time;
mod types;
mod zone;

pub use consts::*;
pub use date::CivilDate;
pub use datetime::CivilDateTime;
pub use error::{CivilError, Result};
pub use time::CivilTime;
pub use types::Meridiem;
pub use zone::{Disambiguation, timezone};
