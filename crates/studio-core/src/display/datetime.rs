//! Local time formatting for `created_at` / `updated_at` fields.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a UTC timestamp in the system time zone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    fn in_zone(&self, tz: TimeZone) -> String {
        self.0
            .to_zoned(tz)
            .strftime("%Y-%m-%d %H:%M:%S %Z")
            .to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.in_zone(TimeZone::system()))
    }
}
