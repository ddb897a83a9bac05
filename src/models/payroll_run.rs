//! Payroll run models.
//!
//! This module contains the [`PayrollRun`] type and its associated structures
//! that capture all outputs of a payroll computation: one [`PayrollLine`] per
//! computable employee, one [`RecordError`] per rejected record, and the
//! [`PayrollTotals`] folded from the lines.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed payroll figures for a single employee.
///
/// All amounts are unrounded. Employer contributions are informational and
/// are not part of `total_deductions`.
///
/// # Example
///
/// ```
/// use planilla_engine::models::PayrollLine;
/// use rust_decimal::Decimal;
///
/// let line = PayrollLine {
///     employee_id: "emp_001".to_string(),
///     full_name: "Ana Flores".to_string(),
///     department_name: "Finance".to_string(),
///     tenure_years: 5,
///     gross_base: Decimal::from(800),
///     pension_employee_amount: Decimal::from(58),
///     pension_employer_amount: Decimal::from(62),
///     social_employee_amount: Decimal::from(24),
///     social_employer_amount: Decimal::from(60),
///     total_deductions: Decimal::from(82),
///     net_pay: Decimal::from(718),
///     vacation_accrual: Decimal::from(2600),
///     year_end_bonus_accrual: Decimal::ZERO,
/// };
/// assert_eq!(line.net_pay, line.gross_base - line.total_deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The ID of the employee this line was computed for.
    pub employee_id: String,
    /// The employee's display name.
    pub full_name: String,
    /// The employee's department label.
    pub department_name: String,
    /// Whole years of service at the reference date.
    pub tenure_years: u32,
    /// The uncapped monthly base salary.
    pub gross_base: Decimal,
    /// Pension contribution withheld from the employee.
    pub pension_employee_amount: Decimal,
    /// Pension contribution paid by the employer.
    pub pension_employer_amount: Decimal,
    /// Social security contribution withheld from the employee.
    pub social_employee_amount: Decimal,
    /// Social security contribution paid by the employer.
    pub social_employer_amount: Decimal,
    /// Employee-side deductions only.
    pub total_deductions: Decimal,
    /// `gross_base - total_deductions`.
    pub net_pay: Decimal,
    /// Accrued vacation pay.
    pub vacation_accrual: Decimal,
    /// Accrued year-end bonus.
    pub year_end_bonus_accrual: Decimal,
}

/// Element-wise totals of every monetary field across the included lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of lines folded into these totals.
    pub employee_count: usize,
    /// Sum of `gross_base`.
    pub gross_base: Decimal,
    /// Sum of `pension_employee_amount`.
    pub pension_employee_amount: Decimal,
    /// Sum of `pension_employer_amount`.
    pub pension_employer_amount: Decimal,
    /// Sum of `social_employee_amount`.
    pub social_employee_amount: Decimal,
    /// Sum of `social_employer_amount`.
    pub social_employer_amount: Decimal,
    /// Sum of `total_deductions`.
    pub total_deductions: Decimal,
    /// Sum of `net_pay`.
    pub net_pay: Decimal,
    /// Sum of `vacation_accrual`.
    pub vacation_accrual: Decimal,
    /// Sum of `year_end_bonus_accrual`.
    pub year_end_bonus_accrual: Decimal,
}

impl PayrollTotals {
    /// Returns these totals with a line's values added, or `None` if any sum
    /// exceeds the `Decimal` range.
    ///
    /// # Example
    ///
    /// ```
    /// use planilla_engine::models::{PayrollLine, PayrollTotals};
    /// use rust_decimal::Decimal;
    ///
    /// let line = PayrollLine {
    ///     employee_id: "emp_001".to_string(),
    ///     full_name: "Ana Flores".to_string(),
    ///     department_name: "Finance".to_string(),
    ///     tenure_years: 0,
    ///     gross_base: Decimal::from(500),
    ///     pension_employee_amount: Decimal::from(10),
    ///     pension_employer_amount: Decimal::from(12),
    ///     social_employee_amount: Decimal::from(5),
    ///     social_employer_amount: Decimal::from(7),
    ///     total_deductions: Decimal::from(15),
    ///     net_pay: Decimal::from(485),
    ///     vacation_accrual: Decimal::ZERO,
    ///     year_end_bonus_accrual: Decimal::ZERO,
    /// };
    ///
    /// let totals = PayrollTotals::default()
    ///     .checked_add_line(&line)
    ///     .and_then(|totals| totals.checked_add_line(&line))
    ///     .unwrap();
    /// assert_eq!(totals.employee_count, 2);
    /// assert_eq!(totals.net_pay, Decimal::from(970));
    /// ```
    pub fn checked_add_line(&self, line: &PayrollLine) -> Option<Self> {
        Some(Self {
            employee_count: self.employee_count + 1,
            gross_base: self.gross_base.checked_add(line.gross_base)?,
            pension_employee_amount: self
                .pension_employee_amount
                .checked_add(line.pension_employee_amount)?,
            pension_employer_amount: self
                .pension_employer_amount
                .checked_add(line.pension_employer_amount)?,
            social_employee_amount: self
                .social_employee_amount
                .checked_add(line.social_employee_amount)?,
            social_employer_amount: self
                .social_employer_amount
                .checked_add(line.social_employer_amount)?,
            total_deductions: self.total_deductions.checked_add(line.total_deductions)?,
            net_pay: self.net_pay.checked_add(line.net_pay)?,
            vacation_accrual: self.vacation_accrual.checked_add(line.vacation_accrual)?,
            year_end_bonus_accrual: self
                .year_end_bonus_accrual
                .checked_add(line.year_end_bonus_accrual)?,
        })
    }
}

/// Why an employee record was excluded from the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordErrorReason {
    /// The record carries no base salary.
    MissingSalary,
    /// The base salary is below zero.
    NegativeSalary,
    /// The hire date could not be parsed.
    InvalidHireDate,
    /// A computed amount, or its addition to the totals, exceeds the
    /// representable decimal range.
    AmountOverflow,
}

impl RecordErrorReason {
    /// Returns the wire code for this reason.
    pub fn code(&self) -> &'static str {
        match self {
            RecordErrorReason::MissingSalary => "missing_salary",
            RecordErrorReason::NegativeSalary => "negative_salary",
            RecordErrorReason::InvalidHireDate => "invalid_hire_date",
            RecordErrorReason::AmountOverflow => "amount_overflow",
        }
    }
}

/// A rejected employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordError {
    /// The ID of the rejected employee.
    pub employee_id: String,
    /// The reason the record was rejected.
    pub reason: RecordErrorReason,
}

/// The complete result of a payroll computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// The date tenure was measured against.
    pub reference_date: NaiveDate,
    /// One line per computable employee, in input order.
    pub lines: Vec<PayrollLine>,
    /// One entry per rejected employee, in input order.
    pub errors: Vec<RecordError>,
    /// Totals folded from `lines`.
    pub totals: PayrollTotals,
}
