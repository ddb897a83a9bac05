//! Employee model.
//!
//! This module defines the [`Employee`] record as delivered by the HR API.
//! The record is read-only to the engine.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee on the payroll roster.
///
/// `hire_date` is kept as the raw text supplied by the HR API so that a single
/// unparseable date is reported against that employee instead of rejecting the
/// whole roster at deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name (first + last). Used only for filtering.
    pub full_name: String,
    /// The name of the employee's role. Used only for filtering.
    #[serde(default)]
    pub role_name: String,
    /// The hire date, `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub hire_date: String,
    /// The monthly gross base pay of the employee's role.
    #[serde(default)]
    pub role_base_salary: Option<Decimal>,
    /// The department label. Used only for filtering.
    #[serde(default)]
    pub department_name: String,
}

impl Employee {
    /// Parses the hire date.
    ///
    /// Accepts a plain calendar date (`2020-06-15`) or an RFC 3339 timestamp
    /// (`2020-06-15T00:00:00Z`), in which case the date part as written is used.
    /// Returns `None` when the value is neither.
    ///
    /// # Examples
    ///
    /// ```
    /// use planilla_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     full_name: "Ana Flores".to_string(),
    ///     role_name: "Analyst".to_string(),
    ///     hire_date: "2020-06-15T00:00:00.000Z".to_string(),
    ///     role_base_salary: None,
    ///     department_name: "Finance".to_string(),
    /// };
    /// assert_eq!(
    ///     employee.parsed_hire_date(),
    ///     NaiveDate::from_ymd_opt(2020, 6, 15)
    /// );
    /// ```
    pub fn parsed_hire_date(&self) -> Option<NaiveDate> {
        let raw = self.hire_date.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }

        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    }
}
