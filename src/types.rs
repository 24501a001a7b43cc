use crate::consts::{AM, PM};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The am/pm designator of a 12-hour clock reading.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Meridiem {
    #[display(fmt = "am")]
    Am,
    #[display(fmt = "pm")]
    Pm,
}

impl Meridiem {
    /// Returns the designator as it appears in 12-hour input, `"am"` or `"pm"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => AM,
            Self::Pm => PM,
        }
    }

    /// The designator for a 24-hour clock hour: before noon is am.
    pub(crate) const fn of_hour(hour: u8) -> Self {
        if hour < crate::consts::NOON {
            Self::Am
        } else {
            Self::Pm
        }
    }
}

impl FromStr for Meridiem {
    type Err = CivilError;

    /// Accepts exactly `"am"` or `"pm"`.
    ///
    /// # Errors
    /// Returns `CivilError::Invalid` for any other input.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            AM => Ok(Self::Am),
            PM => Ok(Self::Pm),
            _ => Err(CivilError::invalid("meridiem", s)),
        }
    }
}

impl TryFrom<String> for Meridiem {
    type Error = CivilError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Meridiem> for String {
    fn from(meridiem: Meridiem) -> Self {
        meridiem.as_str().to_owned()
    }
}
