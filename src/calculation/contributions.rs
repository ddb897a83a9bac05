//! Pension and social security contribution calculation.
//!
//! Contributions are computed on capped bases, while net pay is computed from
//! the full salary.
//!
//! ## Caps
//!
//! - Pension base: `min(salary, 7000)`
//! - Social security base: `min(salary, 1000)`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RateConfiguration;

/// Ceiling of the pension contribution base.
pub const PENSION_CONTRIBUTION_CAP: Decimal = Decimal::from_parts(7000, 0, 0, false, 0);

/// Ceiling of the social security contribution base.
pub const SOCIAL_CONTRIBUTION_CAP: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Contribution amounts for one salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionResult {
    /// The salary after applying the pension cap.
    pub pension_base: Decimal,
    /// The salary after applying the social security cap.
    pub social_base: Decimal,
    /// Pension contribution withheld from the employee.
    pub pension_employee_amount: Decimal,
    /// Pension contribution paid by the employer.
    pub pension_employer_amount: Decimal,
    /// Social security contribution withheld from the employee.
    pub social_employee_amount: Decimal,
    /// Social security contribution paid by the employer.
    pub social_employer_amount: Decimal,
    /// Employee-side withholdings.
    pub total_deductions: Decimal,
    /// Uncapped salary minus `total_deductions`.
    pub net_pay: Decimal,
}

fn percentage_of(base: Decimal, rate: Decimal) -> Option<Decimal> {
    base.checked_mul(rate)?.checked_div(Decimal::ONE_HUNDRED)
}

/// Calculates contributions, deductions and net pay for a monthly salary.
///
/// Employer amounts are reported but not deducted. No rounding is applied.
/// Returns `None` if any amount exceeds the `Decimal` range.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::calculate_contributions;
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
///
/// let result = calculate_contributions(Decimal::from(800), &rates).unwrap();
/// assert_eq!(result.pension_employee_amount, Decimal::from(58));
/// assert_eq!(result.social_employee_amount, Decimal::from(24));
/// assert_eq!(result.net_pay, Decimal::from(718));
/// ```
pub fn calculate_contributions(
    base_salary: Decimal,
    rates: &RateConfiguration,
) -> Option<ContributionResult> {
    let pension_base = base_salary.min(PENSION_CONTRIBUTION_CAP);
    let social_base = base_salary.min(SOCIAL_CONTRIBUTION_CAP);

    let pension_employee_amount = percentage_of(pension_base, rates.pension_employee_rate)?;
    let pension_employer_amount = percentage_of(pension_base, rates.pension_employer_rate)?;
    let social_employee_amount = percentage_of(social_base, rates.social_employee_rate)?;
    let social_employer_amount = percentage_of(social_base, rates.social_employer_rate)?;

    let total_deductions = pension_employee_amount.checked_add(social_employee_amount)?;

    Some(ContributionResult {
        pension_base,
        social_base,
        pension_employee_amount,
        pension_employer_amount,
        social_employee_amount,
        social_employer_amount,
        total_deductions,
        net_pay: base_salary.checked_sub(total_deductions)?,
    })
}
