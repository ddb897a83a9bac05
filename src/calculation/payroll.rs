//! Payroll aggregation.
//!
//! Applies validation, tenure, accrual and contribution calculations to every
//! employee on a roster and folds the resulting lines into totals.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{
    Employee, PayrollLine, PayrollRun, PayrollTotals, RateConfiguration, RecordError,
    RecordErrorReason,
};

use super::accrual::calculate_accruals;
use super::contributions::calculate_contributions;
use super::tenure::tenure_years;
use super::validation::{ValidatedEmployee, validate_employee};

/// Computes the payroll line for a single validated employee.
///
/// Returns `None` if an amount for this salary exceeds the `Decimal` range.
pub fn calculate_payroll_line(
    validated: &ValidatedEmployee<'_>,
    rates: &RateConfiguration,
    reference_date: NaiveDate,
) -> Option<PayrollLine> {
    let employee = validated.employee;
    let tenure = tenure_years(validated.hire_date, reference_date);
    let contributions = calculate_contributions(validated.base_salary, rates)?;
    let accruals = calculate_accruals(validated.base_salary, tenure)?;

    Some(PayrollLine {
        employee_id: employee.id.clone(),
        full_name: employee.full_name.clone(),
        department_name: employee.department_name.clone(),
        tenure_years: tenure,
        gross_base: validated.base_salary,
        pension_employee_amount: contributions.pension_employee_amount,
        pension_employer_amount: contributions.pension_employer_amount,
        social_employee_amount: contributions.social_employee_amount,
        social_employer_amount: contributions.social_employer_amount,
        total_deductions: contributions.total_deductions,
        net_pay: contributions.net_pay,
        vacation_accrual: accruals.vacation_accrual,
        year_end_bonus_accrual: accruals.year_end_bonus_accrual,
    })
}

/// Computes payroll for every employee on the roster.
///
/// The rate configuration is validated first; an invalid configuration fails
/// the whole computation. Malformed employee records are skipped and reported
/// in [`PayrollRun::errors`] without affecting the other employees. A record
/// whose amounts overflow, on its own or when added to the totals, is reported
/// as [`RecordErrorReason::AmountOverflow`]. Lines keep the roster order, and
/// totals are folded from the exact line values.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::compute_payroll;
/// use planilla_engine::models::{Employee, RateConfiguration};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateConfiguration {
///     pension_employee_rate: Decimal::from_str("7.25").unwrap(),
///     pension_employer_rate: Decimal::from_str("7.75").unwrap(),
///     social_employee_rate: Decimal::from(3),
///     social_employer_rate: Decimal::from_str("7.5").unwrap(),
/// };
/// let employees = vec![Employee {
///     id: "emp_001".to_string(),
///     full_name: "Ana Flores".to_string(),
///     role_name: "Accountant".to_string(),
///     hire_date: "2020-06-15".to_string(),
///     role_base_salary: Some(Decimal::from(800)),
///     department_name: "Finance".to_string(),
/// }];
///
/// let run = compute_payroll(
///     &employees,
///     &rates,
///     NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(run.lines.len(), 1);
/// assert_eq!(run.lines[0].tenure_years, 5);
/// assert_eq!(run.totals.net_pay, Decimal::from(718));
/// ```
pub fn compute_payroll(
    employees: &[Employee],
    rates: &RateConfiguration,
    reference_date: NaiveDate,
) -> EngineResult<PayrollRun> {
    rates.validate()?;

    let mut lines = Vec::with_capacity(employees.len());
    let mut errors = Vec::new();
    let mut totals = PayrollTotals::default();

    for employee in employees {
        let outcome = validate_employee(employee).and_then(|validated| {
            calculate_payroll_line(&validated, rates, reference_date)
                .and_then(|line| totals.checked_add_line(&line).map(|next| (line, next)))
                .ok_or_else(|| RecordError {
                    employee_id: employee.id.clone(),
                    reason: RecordErrorReason::AmountOverflow,
                })
        });

        match outcome {
            Ok((line, next)) => {
                totals = next;
                lines.push(line);
            }
            Err(error) => {
                debug!(
                    employee_id = %error.employee_id,
                    reason = error.reason.code(),
                    "Skipping malformed employee record"
                );
                errors.push(error);
            }
        }
    }

    Ok(PayrollRun {
        reference_date,
        lines,
        errors,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn sample_rates() -> RateConfiguration {
        RateConfiguration {
            pension_employee_rate: dec("7.25"),
            pension_employer_rate: dec("7.75"),
            social_employee_rate: dec("3"),
            social_employer_rate: dec("7.5"),
        }
    }

    fn create_test_employee(id: &str, salary: Option<&str>, hire_date: &str) -> Employee {
        Employee {
            id: id.to_string(),
            full_name: format!("Employee {}", id),
            role_name: "Analyst".to_string(),
            hire_date: hire_date.to_string(),
            role_base_salary: salary.map(dec),
            department_name: "Finance".to_string(),
        }
    }

    #[test]
    fn test_end_to_end_five_year_employee() {
        let employees = vec![create_test_employee("emp_001", Some("800"), "2020-06-15")];
        let run = compute_payroll(&employees, &sample_rates(), reference_date()).unwrap();

        assert!(run.errors.is_empty());
        let line = &run.lines[0];
        assert_eq!(line.employee_id, "emp_001");
        assert_eq!(line.tenure_years, 5);
        assert_eq!(line.gross_base, dec("800"));
        assert_eq!(line.pension_employee_amount, dec("58.00"));
        assert_eq!(line.social_employee_amount, dec("24.00"));
        assert_eq!(line.total_deductions, dec("82.00"));
        assert_eq!(line.net_pay, dec("718.00"));
        assert_eq!(line.vacation_accrual.round_dp(2), dec("2600.00"));
        assert_eq!(line.year_end_bonus_accrual.round_dp(2), dec("506.67"));
    }

    #[test]
    fn test_malformed_record_is_isolated() {
        let employees = vec![
            create_test_employee("emp_001", Some("800"), "2020-06-15"),
            create_test_employee("emp_002", Some("-5"), "2020-06-15"),
            create_test_employee("emp_003", Some("1200"), "2022-01-10"),
        ];
        let run = compute_payroll(&employees, &sample_rates(), reference_date()).unwrap();

        assert_eq!(run.lines.len(), 2);
        assert_eq!(run.errors.len(), 1);
        assert_eq!(run.errors[0].employee_id, "emp_002");
        assert_eq!(run.errors[0].reason, RecordErrorReason::NegativeSalary);
        assert_eq!(run.totals.employee_count, 2);
        assert_eq!(run.totals.gross_base, dec("2000"));
    }

    #[test]
    fn test_oversized_salary_is_rejected_without_losing_the_batch() {
        let employees = vec![
            create_test_employee("emp_001", Some("800"), "2020-06-15"),
            create_test_employee("emp_002", Some("10000000000000000000000000000"), "2020-06-15"),
            create_test_employee("emp_003", Some("1200"), "2025-01-10"),
        ];
        let run = compute_payroll(&employees, &sample_rates(), reference_date()).unwrap();

        assert_eq!(run.errors.len(), 1);
        assert_eq!(run.errors[0].employee_id, "emp_002");
        assert_eq!(run.errors[0].reason, RecordErrorReason::AmountOverflow);

        let ids: Vec<_> = run.lines.iter().map(|l| l.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["emp_001", "emp_003"]);
        assert_eq!(run.totals.employee_count, 2);
        assert_eq!(run.totals.gross_base, dec("2000"));
    }

    #[test]
    fn test_totals_overflow_rejects_the_record_that_tips_it() {
        // Each line fits on its own, but the second pushes gross_base past the range.
        let rates = RateConfiguration {
            pension_employee_rate: Decimal::ZERO,
            pension_employer_rate: Decimal::ZERO,
            social_employee_rate: Decimal::ZERO,
            social_employer_rate: Decimal::ZERO,
        };
        let employees = vec![
            create_test_employee("emp_001", Some("50000000000000000000000000000"), "2025-01-01"),
            create_test_employee("emp_002", Some("50000000000000000000000000000"), "2025-01-01"),
        ];
        let run = compute_payroll(&employees, &rates, reference_date()).unwrap();

        assert_eq!(run.lines.len(), 1);
        assert_eq!(run.errors[0].employee_id, "emp_002");
        assert_eq!(run.errors[0].reason, RecordErrorReason::AmountOverflow);
        assert_eq!(run.totals.employee_count, 1);
        assert_eq!(run.totals.gross_base, run.lines[0].gross_base);
    }

    #[test]
    fn test_every_error_kind_is_reported_in_order() {
        let employees = vec![
            create_test_employee("emp_001", None, "2020-06-15"),
            create_test_employee("emp_002", Some("900"), "2020-06-15"),
            create_test_employee("emp_003", Some("-1"), "2020-06-15"),
            create_test_employee("emp_004", Some("900"), "yesterday"),
        ];
        let run = compute_payroll(&employees, &sample_rates(), reference_date()).unwrap();

        let reasons: Vec<_> = run.errors.iter().map(|e| e.reason).collect();
        assert_eq!(
            reasons,
            vec![
                RecordErrorReason::MissingSalary,
                RecordErrorReason::NegativeSalary,
                RecordErrorReason::InvalidHireDate,
            ]
        );
        assert_eq!(run.lines.len(), 1);
        assert_eq!(run.lines[0].employee_id, "emp_002");
    }

    #[test]
    fn test_lines_preserve_input_order() {
        let employees = vec![
            create_test_employee("emp_c", Some("500"), "2019-01-01"),
            create_test_employee("emp_a", Some("700"), "2018-01-01"),
            create_test_employee("emp_b", Some("600"), "2017-01-01"),
        ];
        let run = compute_payroll(&employees, &sample_rates(), reference_date()).unwrap();

        let ids: Vec<_> = run.lines.iter().map(|l| l.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["emp_c", "emp_a", "emp_b"]);
    }

    #[test]
    fn test_totals_equal_sum_of_lines() {
        let employees = vec![
            create_test_employee("emp_001", Some("800"), "2020-06-15"),
            create_test_employee("emp_002", Some("12345.67"), "2001-03-09"),
            create_test_employee("emp_003", Some("999.99"), "2024-12-31"),
        ];
        let run = compute_payroll(&employees, &sample_rates(), reference_date()).unwrap();

        let net_sum: Decimal = run.lines.iter().map(|l| l.net_pay).sum();
        let vacation_sum: Decimal = run.lines.iter().map(|l| l.vacation_accrual).sum();
        let bonus_sum: Decimal = run.lines.iter().map(|l| l.year_end_bonus_accrual).sum();

        assert_eq!(run.totals.net_pay, net_sum);
        assert_eq!(run.totals.vacation_accrual, vacation_sum);
        assert_eq!(run.totals.year_end_bonus_accrual, bonus_sum);
    }

    #[test]
    fn test_empty_roster_returns_zero_totals() {
        let run = compute_payroll(&[], &sample_rates(), reference_date()).unwrap();

        assert!(run.lines.is_empty());
        assert!(run.errors.is_empty());
        assert_eq!(run.totals, PayrollTotals::default());
    }

    #[test]
    fn test_invalid_rates_fail_whole_computation() {
        let mut rates = sample_rates();
        rates.pension_employer_rate = dec("150");
        let employees = vec![create_test_employee("emp_001", Some("800"), "2020-06-15")];

        let result = compute_payroll(&employees, &rates, reference_date());
        assert!(matches!(
            result,
            Err(EngineError::InvalidRateConfiguration { .. })
        ));
    }

    #[test]
    fn test_new_hire_has_no_accruals() {
        let employees = vec![create_test_employee("emp_001", Some("800"), "2025-01-01")];
        let run = compute_payroll(&employees, &sample_rates(), reference_date()).unwrap();

        assert_eq!(run.lines[0].tenure_years, 0);
        assert_eq!(run.lines[0].vacation_accrual, Decimal::ZERO);
        assert_eq!(run.lines[0].year_end_bonus_accrual, Decimal::ZERO);
        assert_eq!(run.lines[0].net_pay, dec("718"));
    }

    #[test]
    fn test_reference_date_is_recorded() {
        let run = compute_payroll(&[], &sample_rates(), reference_date()).unwrap();
        assert_eq!(run.reference_date, reference_date());
    }
}
