//! A named holiday: a human-readable description paired with rule text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rule::{self, HolidayRule};

/// A holiday with a display description and the rule text that locates it
/// in any given year.
///
/// [`Holiday::new`] validates the rule text eagerly, so a constructed value
/// is known to parse; resolution can still fail per year (year bound,
/// impossible fixed date). Values deserialized from JSON skip that check
/// and surface any problem from [`Holiday::date_for_year`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub(crate) description: String,
    pub(crate) config: String,
}

impl Holiday {
    /// Create a holiday, validating `config` against the rule grammars.
    ///
    /// The description is trimmed; the rule text is kept as written.
    ///
    /// # Errors
    ///
    /// Whatever [`HolidayRule::parse`] reports for `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holiday_engine::Holiday;
    ///
    /// let labor_day = Holiday::new("Labor Day", "1st Monday in September").unwrap();
    /// assert_eq!(labor_day.date_for_year(2024).unwrap().to_string(), "2024-09-02");
    ///
    /// assert!(Holiday::new("Mystery Day", "whenever feels right").is_err());
    /// ```
    pub fn new(description: &str, config: &str) -> Result<Self> {
        HolidayRule::parse(config)?;
        Ok(Holiday {
            description: description.trim().to_string(),
            config: config.to_string(),
        })
    }

    /// The display description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The rule text.
    pub fn config(&self) -> &str {
        &self.config
    }

    /// The date this holiday falls on in `year`.
    pub fn date_for_year(&self, year: i32) -> Result<NaiveDate> {
        rule::resolve(&self.config, year)
    }
}
