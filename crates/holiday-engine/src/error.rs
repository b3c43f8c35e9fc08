//! Error types for holiday-engine operations.

use thiserror::Error;

/// Everything that can go wrong while classifying or resolving a holiday rule.
///
/// Derives `PartialEq`/`Eq` so callers (and tests) can assert on the exact
/// failure rather than matching message strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolidayError {
    /// The rule text was empty or whitespace-only.
    #[error("Blank holiday rule")]
    BlankInput,

    /// The rule text matched neither supported grammar. Carries the
    /// offending input verbatim.
    #[error("Unrecognized holiday rule: {0}")]
    UnrecognizedFormat(String),

    /// The target year falls outside the supported range.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// The rule names a calendar date that does not exist in the target
    /// year (e.g. February 30th, or February 29th outside a leap year).
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, HolidayError>;
