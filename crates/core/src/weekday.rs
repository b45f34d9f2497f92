//! Weekday numbering conversions.
//!
//! Stored weekdays (sessions, permanences) count from Sunday:
//! 1 = Sunday, 2 = Monday ... 7 = Saturday.
//! `chrono` counts from Monday starting at zero: 0 = Monday ... 6 = Sunday.
//! Every comparison between a calendar date and a stored weekday goes
//! through this module.

use chrono::Datelike;

use crate::types::Date;

pub const SUNDAY: i16 = 1;
pub const MONDAY: i16 = 2;
pub const TUESDAY: i16 = 3;
pub const WEDNESDAY: i16 = 4;
pub const THURSDAY: i16 = 5;
pub const FRIDAY: i16 = 6;
pub const SATURDAY: i16 = 7;

/// Lowest and highest valid stored weekday.
pub const MIN_STORED_WEEKDAY: i16 = SUNDAY;
pub const MAX_STORED_WEEKDAY: i16 = SATURDAY;

/// Convert a stored weekday (1 = Sunday) to the library numbering (0 = Monday).
///
/// Returns `None` for values outside `1..=7`.
pub fn to_library_weekday(stored: i16) -> Option<i16> {
    if !(MIN_STORED_WEEKDAY..=MAX_STORED_WEEKDAY).contains(&stored) {
        return None;
    }
    Some((stored + 5) % 7)
}

/// Convert a library weekday (0 = Monday) to the stored numbering (1 = Sunday).
///
/// Returns `None` for values outside `0..=6`.
pub fn from_library_weekday(library: i16) -> Option<i16> {
    if !(0..=6).contains(&library) {
        return None;
    }
    Some((library + 1) % 7 + 1)
}

/// Stored weekday number of a calendar date.
pub fn stored_weekday_of(date: Date) -> i16 {
    // number_from_sunday() is already 1 = Sunday .. 7 = Saturday.
    date.weekday().number_from_sunday() as i16
}

/// English name of a stored weekday, for messages and listings.
pub fn weekday_name(stored: i16) -> Option<&'static str> {
    match stored {
        SUNDAY => Some("Sunday"),
        MONDAY => Some("Monday"),
        TUESDAY => Some("Tuesday"),
        WEDNESDAY => Some("Wednesday"),
        THURSDAY => Some("Thursday"),
        FRIDAY => Some("Friday"),
        SATURDAY => Some("Saturday"),
        _ => None,
    }
}
