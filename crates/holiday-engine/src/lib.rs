//! # holiday-engine
//!
//! Resolve free-text holiday rules like `"3rd Monday in January"` or
//! `"July 4th Observance"` to concrete calendar dates.
//!
//! Two grammars are supported: occurrence rules (`<occurrence> <weekday> in
//! <month>` with an optional signed day offset) and fixed-date rules
//! (`<month> <day>` with an optional weekend observance shift). Everything
//! is a pure function over its inputs, with no clock access and no I/O.
//! Anything the grammars cannot classify unambiguously is rejected with a
//! typed error rather than guessed at.
//!
//! ```
//! use holiday_engine::{resolve, HolidayError};
//!
//! // Thanksgiving 2024, and the day before it.
//! assert_eq!(resolve("4th Thursday in November", 2024).unwrap().to_string(), "2024-11-28");
//! assert_eq!(resolve("4th Thursday in November -1", 2024).unwrap().to_string(), "2024-11-27");
//!
//! // Christmas 2022 fell on a Sunday, so it was observed on the Monday.
//! assert_eq!(resolve("December 25th Observance", 2022).unwrap().to_string(), "2022-12-26");
//!
//! assert_eq!(resolve("brunchmas", 2024), Err(HolidayError::UnrecognizedFormat("brunchmas".into())));
//! ```
//!
//! ## Modules
//!
//! - [`rule`] — Rule classification and date resolution
//! - [`holiday`] — A named holiday (description + rule text)
//! - [`federal`] — The built-in US federal holiday calendar
//! - [`error`] — Error types

pub mod error;
pub mod federal;
pub mod holiday;
mod norm;
pub mod rule;

pub use error::{HolidayError, Result};
pub use federal::us_federal_holidays;
pub use holiday::Holiday;
pub use norm::Occurrence;
pub use rule::{resolve, HolidayRule, MAX_YEAR, MIN_YEAR};
