//! Contribution rate configuration.
//!
//! The HR API exposes a single rate configuration per session. The engine
//! receives it explicitly on every call rather than holding it globally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Percentages applied to the capped contribution bases.
///
/// Each rate is a percentage, e.g. `7.25` means 7.25%.
///
/// # Example
///
/// ```
/// use planilla_engine::models::RateConfiguration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateConfiguration {
///     pension_employee_rate: Decimal::from_str("7.25").unwrap(),
///     pension_employer_rate: Decimal::from_str("7.75").unwrap(),
///     social_employee_rate: Decimal::from(3),
///     social_employer_rate: Decimal::from_str("7.5").unwrap(),
/// };
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfiguration {
    /// Pension contribution withheld from the employee.
    pub pension_employee_rate: Decimal,
    /// Pension contribution paid by the employer.
    pub pension_employer_rate: Decimal,
    /// Social security contribution withheld from the employee.
    pub social_employee_rate: Decimal,
    /// Social security contribution paid by the employer.
    pub social_employer_rate: Decimal,
}

impl RateConfiguration {
    /// Checks that every rate lies within `0..=100`.
    ///
    /// Returns the first offending field as
    /// [`EngineError::InvalidRateConfiguration`].
    pub fn validate(&self) -> EngineResult<()> {
        let hundred = Decimal::ONE_HUNDRED;

        for (field, value) in self.fields() {
            if value < Decimal::ZERO || value > hundred {
                return Err(EngineError::InvalidRateConfiguration {
                    field: field.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }

    fn fields(&self) -> [(&'static str, Decimal); 4] {
        [
            ("pension_employee_rate", self.pension_employee_rate),
            ("pension_employer_rate", self.pension_employer_rate),
            ("social_employee_rate", self.social_employee_rate),
            ("social_employer_rate", self.social_employer_rate),
        ]
    }
}
