/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between the date and time halves of a combined stamp
pub const DATE_TIME_SEPARATOR: char = 'T';

/// Width of every component in a 24-hour time stamp
pub const TIME_COMPONENT_WIDTH: usize = 2;

/// Number of components in an ISO date stamp
pub(crate) const DATE_COMPONENTS: usize = 3;
/// Number of components in a `HH:MM:SS` stamp
pub(crate) const TIME_COMPONENTS: usize = 3;
/// Number of components in a `HH:MM` stamp
pub(crate) const TIME_COMPONENTS_WITHOUT_SECONDS: usize = 2;

/// Largest hour on a 24-hour clock
pub const MAX_HOUR_24: u8 = 23;
/// Largest hour accepted by 12-hour clock input
pub const MAX_HOUR_12: u8 = 12;
/// Hour at which the clock switches from am to pm
pub const NOON: u8 = 12;
/// Largest minute value
pub const MAX_MINUTE: u8 = 59;
/// Largest second value
pub const MAX_SECOND: u8 = 59;

/// Ante meridiem designator
pub const AM: &str = "am";
/// Post meridiem designator
pub const PM: &str = "pm";
