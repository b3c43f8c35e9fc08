//! Token normalization for the holiday grammars.
//!
//! Pure lookup functions that turn individual rule tokens ("3rd", "Monday",
//! "Jul", "25th") into canonical values. Each function lowercases its input
//! and matches exact forms only: the vocabulary is the fixed English set
//! the grammars define, not a fuzzy prefix match. Callers treat `None` as
//! "this token is invalid here" and fail the whole rule.

use chrono::{Datelike, NaiveDate, Weekday};

/// Which instance of a weekday within a month an occurrence rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    /// The nth instance (1 through 5). A fifth instance that the month does
    /// not contain resolves into the following month; see
    /// [`crate::HolidayRule::resolve`].
    Nth(u8),
    /// The final instance, whatever the month length.
    Last,
}

/// Canonical full weekday names, Monday-first.
///
/// Every weekday comparison in the crate goes through these strings (via
/// [`weekday_name`] and [`falls_on`]) rather than numeric weekday indices.
const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Parse an occurrence token: "1st"/"1" through "5th"/"5", or "Last".
pub(crate) fn occurrence_from_token(token: &str) -> Option<Occurrence> {
    match token.to_ascii_lowercase().as_str() {
        "1st" | "1" => Some(Occurrence::Nth(1)),
        "2nd" | "2" => Some(Occurrence::Nth(2)),
        "3rd" | "3" => Some(Occurrence::Nth(3)),
        "4th" | "4" => Some(Occurrence::Nth(4)),
        "5th" | "5" => Some(Occurrence::Nth(5)),
        "last" => Some(Occurrence::Last),
        _ => None,
    }
}

/// Parse a weekday name, full or exactly three letters.
pub(crate) fn weekday_from_token(token: &str) -> Option<Weekday> {
    match token.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse a month name to number (1-12), full or exactly three letters.
pub(crate) fn month_from_token(token: &str) -> Option<u32> {
    match token.to_ascii_lowercase().as_str() {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sep" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}

/// Parse a day-of-month token: a bare number 1-31 without a leading zero,
/// or the number with its correct ordinal suffix ("1st", "22nd", "25th").
///
/// The suffix must agree with the number: "3th" and "11st" are rejected,
/// as are padded forms like "04".
pub(crate) fn day_of_month_from_token(token: &str) -> Option<u32> {
    let lower = token.to_ascii_lowercase();
    let digits_end = lower
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(lower.len());
    let (digits, suffix) = lower.split_at(digits_end);
    if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
        return None;
    }
    let day: u32 = digits.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    if suffix.is_empty() || suffix == ordinal_suffix(day) {
        Some(day)
    } else {
        None
    }
}

/// The English ordinal suffix for a number: 1→"st", 2→"nd", 3→"rd", 4→"th",
/// with the teens (11-13) always taking "th".
pub(crate) fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// The canonical full English name of a weekday.
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Whether `date` falls on `weekday`, decided by comparing canonical
/// weekday names case-insensitively. All occurrence walking uses this
/// predicate; nothing compares weekday numbers directly.
pub(crate) fn falls_on(date: NaiveDate, weekday: Weekday) -> bool {
    weekday_name(date.weekday()).eq_ignore_ascii_case(weekday_name(weekday))
}
