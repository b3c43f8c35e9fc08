//! The built-in United States federal holiday calendar.

use crate::holiday::Holiday;

/// Description/config pairs for the federal holidays, in calendar order.
const US_FEDERAL: [(&str, &str); 11] = [
    ("New Year's Day", "January 1st Observance"),
    ("Martin Luther King Jr. Day", "3rd Monday in January"),
    ("Washington's Birthday", "3rd Monday in February"),
    ("Memorial Day", "Last Monday in May"),
    ("Juneteenth National Independence Day", "June 19th Observance"),
    ("Independence Day", "July 4th Observance"),
    ("Labor Day", "1st Monday in September"),
    ("Columbus Day", "2nd Monday in October"),
    ("Veterans Day", "November 11th Observance"),
    ("Thanksgiving Day", "4th Thursday in November"),
    ("Christmas Day", "December 25th Observance"),
];

/// The eleven United States federal holidays, in calendar order.
///
/// Fixed-date entries carry the observance shift, so resolving the set for
/// a year yields the dates federal offices actually close.
///
/// # Examples
///
/// ```
/// use holiday_engine::us_federal_holidays;
///
/// let holidays = us_federal_holidays();
/// assert_eq!(holidays.len(), 11);
/// // 2026-07-04 is a Saturday; Independence Day is observed on the Friday.
/// let independence = &holidays[5];
/// assert_eq!(independence.description(), "Independence Day");
/// assert_eq!(independence.date_for_year(2026).unwrap().to_string(), "2026-07-03");
/// ```
pub fn us_federal_holidays() -> Vec<Holiday> {
    US_FEDERAL
        .iter()
        .map(|&(description, config)| Holiday {
            description: description.to_string(),
            config: config.to_string(),
        })
        .collect()
}
