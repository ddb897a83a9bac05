//! Tenure calculation.
//!
//! Whole years of service between a hire date and a reference date.

use chrono::{Datelike, NaiveDate};

/// Returns the number of completed years of service on `reference_date`.
///
/// The year difference is reduced by one when the hire anniversary has not yet
/// been reached in the reference year. Hire dates after the reference date
/// yield zero.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::tenure_years;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
///
/// assert_eq!(tenure_years(hired, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 3);
/// assert_eq!(tenure_years(hired, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 4);
/// ```
pub fn tenure_years(hire_date: NaiveDate, reference_date: NaiveDate) -> u32 {
    let mut years = reference_date.year() - hire_date.year();

    if (reference_date.month(), reference_date.day()) < (hire_date.month(), hire_date.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}
