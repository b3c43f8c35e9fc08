//! Holiday-rule classification and resolution.
//!
//! A holiday rule is a short piece of English text in one of two grammars:
//!
//! - **Occurrence**: `<occurrence> <weekday> in <month> [<sign><days>]` —
//!   `"3rd Monday in January"`, `"Last Mon in May"`, `"4th Thu in Nov -3"`.
//!   The trailing signed single digit shifts the resolved date by that many
//!   days; the sign and digit may be written together or apart.
//! - **Fixed date**: `<month> <day> [Observance]` — `"July 4th"`,
//!   `"November 11 Observance"`. The `Observance` marker moves a Saturday
//!   to the preceding Friday and a Sunday to the following Monday.
//!
//! Classification is deterministic: the occurrence grammar is tried first,
//! then the fixed-date grammar, and anything that matches neither is
//! rejected outright rather than guessed at. Matching is case-insensitive
//! and tokens are separated by any amount of whitespace.

use chrono::{Duration, NaiveDate, Weekday};

use crate::error::{HolidayError, Result};
use crate::norm::{self, Occurrence};

/// Earliest year a rule may be resolved for.
pub const MIN_YEAR: i32 = 1970;

/// Latest year a rule may be resolved for (inclusive).
pub const MAX_YEAR: i32 = 2200;

// ── rule type ───────────────────────────────────────────────────────────────

/// A classified holiday rule, ready to resolve for any supported year.
///
/// Produced by [`HolidayRule::parse`]; the variants correspond to the two
/// grammars. Values are plain data. Resolving one never mutates it, so a
/// rule parsed once can be resolved for many years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayRule {
    /// An occurrence rule: "2nd Monday in October", optionally offset by a
    /// signed number of days.
    Occurrence {
        /// Which instance of the weekday to select.
        occurrence: Occurrence,
        /// The weekday being counted.
        weekday: Weekday,
        /// Month number, 1-12.
        month: u32,
        /// Signed day adjustment applied after the occurrence is found;
        /// zero when the rule carries no offset.
        offset_days: i64,
    },
    /// A fixed-date rule: "July 4th", optionally with the observance shift.
    FixedDate {
        /// Month number, 1-12.
        month: u32,
        /// Day of month, 1-31 as written. Whether the date exists is only
        /// known once a year is supplied.
        day: u32,
        /// Apply the weekend observance shift after constructing the date.
        observed: bool,
    },
}

impl HolidayRule {
    /// Classify rule text into a [`HolidayRule`].
    ///
    /// The occurrence grammar is tried first, then the fixed-date grammar;
    /// the whole token sequence must match one of them.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::BlankInput`] for empty or whitespace-only
    /// text, and [`HolidayError::UnrecognizedFormat`] (carrying the text
    /// verbatim) when neither grammar matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Weekday;
    /// use holiday_engine::{HolidayRule, Occurrence};
    ///
    /// let rule = HolidayRule::parse("4th Thu in Nov").unwrap();
    /// assert_eq!(
    ///     rule,
    ///     HolidayRule::Occurrence {
    ///         occurrence: Occurrence::Nth(4),
    ///         weekday: Weekday::Thu,
    ///         month: 11,
    ///         offset_days: 0,
    ///     }
    /// );
    /// ```
    pub fn parse(config: &str) -> Result<Self> {
        if config.trim().is_empty() {
            return Err(HolidayError::BlankInput);
        }
        let tokens: Vec<&str> = config.split_whitespace().collect();
        parse_occurrence_rule(&tokens)
            .or_else(|| parse_fixed_date_rule(&tokens))
            .ok_or_else(|| HolidayError::UnrecognizedFormat(config.to_string()))
    }

    /// Resolve this rule to a concrete date in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::InvalidYear`] when `year` is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`], and [`HolidayError::InvalidDate`] when
    /// a fixed-date rule names a day the month does not have in that year
    /// (February 30th, or February 29th outside a leap year).
    ///
    /// # Examples
    ///
    /// ```
    /// use holiday_engine::HolidayRule;
    ///
    /// let rule = HolidayRule::parse("July 4th Observance").unwrap();
    /// // 2026-07-04 is a Saturday, so the observed holiday is Friday the 3rd.
    /// assert_eq!(rule.resolve(2026).unwrap().to_string(), "2026-07-03");
    /// ```
    pub fn resolve(&self, year: i32) -> Result<NaiveDate> {
        check_year(year)?;
        match *self {
            HolidayRule::Occurrence {
                occurrence,
                weekday,
                month,
                offset_days,
            } => {
                let date = match occurrence {
                    Occurrence::Nth(n) => nth_weekday(year, month, weekday, n)?,
                    Occurrence::Last => last_weekday(year, month, weekday)?,
                };
                Ok(date + Duration::days(offset_days))
            }
            HolidayRule::FixedDate {
                month,
                day,
                observed,
            } => {
                let date = NaiveDate::from_ymd_opt(year, month, day)
                    .ok_or(HolidayError::InvalidDate { year, month, day })?;
                Ok(if observed { observance_shift(date) } else { date })
            }
        }
    }
}

/// Resolve holiday rule text to a concrete date in `year`.
///
/// The one-call form of [`HolidayRule::parse`] followed by
/// [`HolidayRule::resolve`]. Input checks run in a fixed order (blank text,
/// then the year bound, then the grammar), so an out-of-range year is
/// reported as [`HolidayError::InvalidYear`] even when the text is also
/// malformed.
///
/// # Arguments
///
/// * `config` — Rule text in either grammar (e.g. `"3rd Monday in January"`,
///   `"July 4th Observance"`)
/// * `year` — Target year, [`MIN_YEAR`]..=[`MAX_YEAR`]
///
/// # Errors
///
/// Any [`HolidayError`]: blank input, out-of-range year, unrecognized
/// text, or an impossible fixed date.
///
/// # Examples
///
/// ```
/// use holiday_engine::resolve;
///
/// let mlk = resolve("3rd Monday in January", 2024).unwrap();
/// assert_eq!(mlk.to_string(), "2024-01-15");
/// ```
pub fn resolve(config: &str, year: i32) -> Result<NaiveDate> {
    if config.trim().is_empty() {
        return Err(HolidayError::BlankInput);
    }
    check_year(year)?;
    HolidayRule::parse(config)?.resolve(year)
}

fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(HolidayError::InvalidYear(year))
    }
}

// ── grammar matching ────────────────────────────────────────────────────────

/// Match `<occurrence> <weekday> in <month> [<sign><digit>]` against the
/// full token sequence.
fn parse_occurrence_rule(tokens: &[&str]) -> Option<HolidayRule> {
    if tokens.len() < 4 {
        return None;
    }
    let occurrence = norm::occurrence_from_token(tokens[0])?;
    let weekday = norm::weekday_from_token(tokens[1])?;
    if !tokens[2].eq_ignore_ascii_case("in") {
        return None;
    }
    let month = norm::month_from_token(tokens[3])?;
    let offset_days = parse_offset(&tokens[4..])?;
    Some(HolidayRule::Occurrence {
        occurrence,
        weekday,
        month,
        offset_days,
    })
}

/// Match `<month> <day> [Observance]` against the full token sequence.
fn parse_fixed_date_rule(tokens: &[&str]) -> Option<HolidayRule> {
    let (month_token, day_token, observed) = match tokens {
        [month, day] => (month, day, false),
        [month, day, marker] if marker.eq_ignore_ascii_case("observance") => (month, day, true),
        _ => return None,
    };
    let month = norm::month_from_token(month_token)?;
    let day = norm::day_of_month_from_token(day_token)?;
    Some(HolidayRule::FixedDate {
        month,
        day,
        observed,
    })
}

/// Parse the optional trailing day offset: nothing, one fused token
/// (`"+2"`), or a sign token followed by a digit token (`"-" "1"`).
/// The magnitude is a single digit.
fn parse_offset(tokens: &[&str]) -> Option<i64> {
    let (sign, digits) = match tokens {
        [] => return Some(0),
        [fused] => {
            let mut chars = fused.chars();
            (chars.next()?, chars.as_str())
        }
        [sign, digits] => {
            let mut chars = sign.chars();
            let first = chars.next()?;
            if !chars.as_str().is_empty() {
                return None;
            }
            (first, *digits)
        }
        _ => return None,
    };
    if digits.len() != 1 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    match sign {
        '+' => Some(magnitude),
        '-' => Some(-magnitude),
        _ => None,
    }
}

// ── occurrence arithmetic ───────────────────────────────────────────────────

/// The nth `weekday` of the month: walk forward from the 1st to the first
/// matching day, then jump whole weeks.
///
/// No containment check follows the jump, so a fifth occurrence the month
/// does not contain lands in the following month.
fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> Result<NaiveDate> {
    let mut date = NaiveDate::from_ymd_opt(year, month, 1).ok_or(HolidayError::InvalidDate {
        year,
        month,
        day: 1,
    })?;
    while !norm::falls_on(date, weekday) {
        date = date + Duration::days(1);
    }
    Ok(date + Duration::weeks(i64::from(n) - 1))
}

/// The last `weekday` of the month: walk backward from the month's final
/// day until the weekday matches. December anchors on January 1st of the
/// following year.
fn last_weekday(year: i32, month: u32, weekday: Weekday) -> Result<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(HolidayError::InvalidDate {
            year: next_year,
            month: next_month,
            day: 1,
        })?;
    let mut date = first_of_next - Duration::days(1);
    while !norm::falls_on(date, weekday) {
        date = date - Duration::days(1);
    }
    Ok(date)
}

/// Shift a weekend date to its observed weekday: Saturday to the Friday
/// before, Sunday to the Monday after. Weekdays pass through unchanged.
fn observance_shift(date: NaiveDate) -> NaiveDate {
    if norm::falls_on(date, Weekday::Sat) {
        date - Duration::days(1)
    } else if norm::falls_on(date, Weekday::Sun) {
        date + Duration::days(1)
    } else {
        date
    }
}
