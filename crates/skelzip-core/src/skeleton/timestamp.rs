//! Conversion of filesystem times to zip timestamps.
//!
//! Zip stores MS-DOS local date/time with two-second resolution covering
//! 1980 to 2107. Anything outside that range, or a missing time, maps to the
//! zip epoch (1980-01-01 00:00:00).

use chrono::Datelike;
use chrono::NaiveDateTime;
use chrono::Timelike;
use std::time::SystemTime;
use zip::DateTime;

/// Converts a modification time to a zip timestamp in local time.
#[must_use]
pub fn from_system_time(time: Option<SystemTime>) -> DateTime {
    time.map_or_else(DateTime::default, |time| {
        let local: chrono::DateTime<chrono::Local> = time.into();
        from_naive(&local.naive_local())
    })
}

/// Current time in UTC as a zip timestamp.
#[must_use]
pub fn now_utc() -> DateTime {
    from_naive(&chrono::Utc::now().naive_utc())
}

fn from_naive(time: &NaiveDateTime) -> DateTime {
    let convert = || -> Option<DateTime> {
        DateTime::from_date_and_time(
            u16::try_from(time.year()).ok()?,
            u8::try_from(time.month()).ok()?,
            u8::try_from(time.day()).ok()?,
            u8::try_from(time.hour()).ok()?,
            u8::try_from(time.minute()).ok()?,
            u8::try_from(time.second()).ok()?,
        )
        .ok()
    };
    convert().unwrap_or_default()
}
