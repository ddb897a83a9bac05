//! Vacation and year-end bonus accrual calculation.
//!
//! Both accruals are derived from a daily rate under a fixed 30-day month
//! convention, independent of the actual number of days in any month.
//!
//! ## Rules
//!
//! - No accrual before the first full year of service.
//! - Vacation: 15 days at a 1.3 premium, scaled by completed years.
//! - Year-end bonus: 15, 19 or 21 days depending on tenure tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Days in a payroll month.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Base vacation days per completed year.
pub const VACATION_DAYS: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Statutory premium applied to vacation pay (130%).
pub const VACATION_PREMIUM: Decimal = Decimal::from_parts(13, 0, 0, false, 1);

/// Bonus days for tenure up to and including three years.
pub const BONUS_DAYS_TIER_1: u32 = 15;

/// Bonus days for tenure above three years up to and including ten.
pub const BONUS_DAYS_TIER_2: u32 = 19;

/// Bonus days for tenure above ten years.
pub const BONUS_DAYS_TIER_3: u32 = 21;

/// The accrual figures for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// `base_salary / 30`.
    pub daily_rate: Decimal,
    /// The tier-selected year-end bonus days (zero before one full year).
    pub bonus_days: u32,
    /// Accrued vacation pay.
    pub vacation_accrual: Decimal,
    /// Accrued year-end bonus.
    pub year_end_bonus_accrual: Decimal,
}

/// Returns the daily rate under the 30-day month convention.
pub fn daily_rate(base_salary: Decimal) -> Decimal {
    base_salary / DAYS_PER_MONTH
}

/// Selects the year-end bonus days for a tenure.
///
/// Tier boundaries are strict: exactly 3 years is still tier 1 and exactly
/// 10 years is still tier 2.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::year_end_bonus_days;
///
/// assert_eq!(year_end_bonus_days(3), 15);
/// assert_eq!(year_end_bonus_days(4), 19);
/// assert_eq!(year_end_bonus_days(10), 19);
/// assert_eq!(year_end_bonus_days(11), 21);
/// ```
pub fn year_end_bonus_days(tenure_years: u32) -> u32 {
    if tenure_years > 10 {
        BONUS_DAYS_TIER_3
    } else if tenure_years > 3 {
        BONUS_DAYS_TIER_2
    } else {
        BONUS_DAYS_TIER_1
    }
}

/// Calculates accrued vacation pay.
///
/// `daily_rate * 15 * 1.3 * tenure_years`, or zero before the first full year.
/// The multiplication is done ahead of the division by 30 so that whole-number
/// results stay exact. Returns `None` if the amount exceeds the `Decimal` range.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::vacation_accrual;
/// use rust_decimal::Decimal;
///
/// assert_eq!(vacation_accrual(Decimal::from(800), 5), Some(Decimal::from(2600)));
/// assert_eq!(vacation_accrual(Decimal::from(800), 0), Some(Decimal::ZERO));
/// assert_eq!(vacation_accrual(Decimal::MAX, 1), None);
/// ```
pub fn vacation_accrual(base_salary: Decimal, tenure_years: u32) -> Option<Decimal> {
    if tenure_years < 1 {
        return Some(Decimal::ZERO);
    }

    base_salary
        .checked_mul(VACATION_DAYS)?
        .checked_mul(VACATION_PREMIUM)?
        .checked_mul(Decimal::from(tenure_years))?
        .checked_div(DAYS_PER_MONTH)
}

/// Calculates the accrued year-end bonus.
///
/// `daily_rate * bonus_days`, or zero before the first full year. Returns
/// `None` on overflow.
pub fn year_end_bonus_accrual(base_salary: Decimal, tenure_years: u32) -> Option<Decimal> {
    if tenure_years < 1 {
        return Some(Decimal::ZERO);
    }

    base_salary
        .checked_mul(Decimal::from(year_end_bonus_days(tenure_years)))?
        .checked_div(DAYS_PER_MONTH)
}

/// Calculates both accruals for a salary and tenure.
///
/// Returns `None` when either accrual overflows.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::calculate_accruals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_accruals(Decimal::from(800), 5).unwrap();
/// assert_eq!(result.bonus_days, 19);
/// assert_eq!(result.year_end_bonus_accrual.round_dp(2), Decimal::from_str("506.67").unwrap());
/// ```
pub fn calculate_accruals(base_salary: Decimal, tenure_years: u32) -> Option<AccrualResult> {
    let bonus_days = if tenure_years < 1 {
        0
    } else {
        year_end_bonus_days(tenure_years)
    };

    Some(AccrualResult {
        daily_rate: daily_rate(base_salary),
        bonus_days,
        vacation_accrual: vacation_accrual(base_salary, tenure_years)?,
        year_end_bonus_accrual: year_end_bonus_accrual(base_salary, tenure_years)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(DAYS_PER_MONTH, dec("30"));
        assert_eq!(VACATION_DAYS, dec("15"));
        assert_eq!(VACATION_PREMIUM, dec("1.3"));
    }

    #[test]
    fn test_daily_rate_uses_thirty_day_month() {
        assert_eq!(daily_rate(dec("3000")), dec("100"));
        assert_eq!(daily_rate(dec("800")).round_dp(3), dec("26.667"));
    }

    #[test]
    fn test_zero_tenure_accrues_nothing() {
        for salary in ["0", "800", "15000.75"] {
            let result = calculate_accruals(dec(salary), 0).unwrap();
            assert_eq!(result.vacation_accrual, Decimal::ZERO);
            assert_eq!(result.year_end_bonus_accrual, Decimal::ZERO);
            assert_eq!(result.bonus_days, 0);
        }
    }

    #[test]
    fn test_bonus_tier_boundaries() {
        assert_eq!(year_end_bonus_days(1), 15);
        assert_eq!(year_end_bonus_days(3), 15);
        assert_eq!(year_end_bonus_days(4), 19);
        assert_eq!(year_end_bonus_days(10), 19);
        assert_eq!(year_end_bonus_days(11), 21);
        assert_eq!(year_end_bonus_days(40), 21);
    }

    #[test]
    fn test_vacation_scales_with_tenure() {
        // 3000 / 30 = 100 per day; 100 * 15 * 1.3 = 1950 per year
        assert_eq!(vacation_accrual(dec("3000"), 1), Some(dec("1950")));
        assert_eq!(vacation_accrual(dec("3000"), 2), Some(dec("3900")));
        assert_eq!(vacation_accrual(dec("3000"), 10), Some(dec("19500")));
    }

    #[test]
    fn test_year_end_bonus_per_tier() {
        assert_eq!(year_end_bonus_accrual(dec("3000"), 1), Some(dec("1500")));
        assert_eq!(year_end_bonus_accrual(dec("3000"), 3), Some(dec("1500")));
        assert_eq!(year_end_bonus_accrual(dec("3000"), 4), Some(dec("1900")));
        assert_eq!(year_end_bonus_accrual(dec("3000"), 10), Some(dec("1900")));
        assert_eq!(year_end_bonus_accrual(dec("3000"), 11), Some(dec("2100")));
    }

    #[test]
    fn test_five_year_employee_on_800() {
        let result = calculate_accruals(dec("800"), 5).unwrap();

        assert_eq!(result.vacation_accrual, dec("2600"));
        assert_eq!(result.bonus_days, 19);
        assert_eq!(result.year_end_bonus_accrual.round_dp(2), dec("506.67"));
    }

    #[test]
    fn test_zero_salary_accrues_zero() {
        let result = calculate_accruals(Decimal::ZERO, 12).unwrap();
        assert_eq!(result.vacation_accrual, Decimal::ZERO);
        assert_eq!(result.year_end_bonus_accrual, Decimal::ZERO);
        assert_eq!(result.bonus_days, 21);
    }

    #[test]
    fn test_oversized_salary_overflows_to_none() {
        let salary = dec("10000000000000000000000000000");

        assert_eq!(vacation_accrual(salary, 5), None);
        assert_eq!(year_end_bonus_accrual(salary, 5), None);
        assert_eq!(calculate_accruals(salary, 5), None);
        // Before one full year nothing is multiplied.
        assert!(calculate_accruals(salary, 0).is_some());
    }
}
