//! Calculation logic for the Planilla Engine.
//!
//! This module contains the payroll calculations: tenure in whole years,
//! vacation and year-end bonus accruals, capped pension and social security
//! contributions, record validation, roster filtering, and the aggregator that
//! ties them together into a [`PayrollRun`](crate::models::PayrollRun).

mod accrual;
mod contributions;
mod payroll;
mod roster_filter;
mod tenure;
mod validation;

pub use accrual::{
    AccrualResult, BONUS_DAYS_TIER_1, BONUS_DAYS_TIER_2, BONUS_DAYS_TIER_3, DAYS_PER_MONTH,
    VACATION_DAYS, VACATION_PREMIUM, calculate_accruals, daily_rate, vacation_accrual,
    year_end_bonus_accrual, year_end_bonus_days,
};
pub use contributions::{
    ContributionResult, PENSION_CONTRIBUTION_CAP, SOCIAL_CONTRIBUTION_CAP, calculate_contributions,
};
pub use payroll::{calculate_payroll_line, compute_payroll};
pub use roster_filter::{RosterFilter, filter_roster};
pub use tenure::tenure_years;
pub use validation::{ValidatedEmployee, validate_employee};
