//! Employee record validation.
//!
//! Classifies each raw roster record as computable or as a [`RecordError`].

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Employee, RecordError, RecordErrorReason};

/// An employee record whose salary and hire date are usable.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedEmployee<'a> {
    /// The source record.
    pub employee: &'a Employee,
    /// The parsed hire date.
    pub hire_date: NaiveDate,
    /// The non-negative base salary.
    pub base_salary: Decimal,
}

/// Validates a single employee record.
///
/// Checks are applied in order: missing salary, negative salary, then an
/// unparseable hire date. The first failing check is reported.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::validate_employee;
/// use planilla_engine::models::{Employee, RecordErrorReason};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     full_name: "Ana Flores".to_string(),
///     role_name: "Accountant".to_string(),
///     hire_date: "2020-06-15".to_string(),
///     role_base_salary: Some(Decimal::from(-5)),
///     department_name: "Finance".to_string(),
/// };
///
/// let error = validate_employee(&employee).unwrap_err();
/// assert_eq!(error.reason, RecordErrorReason::NegativeSalary);
/// ```
pub fn validate_employee(employee: &Employee) -> Result<ValidatedEmployee<'_>, RecordError> {
    let reject = |reason| RecordError {
        employee_id: employee.id.clone(),
        reason,
    };

    let base_salary = employee
        .role_base_salary
        .ok_or_else(|| reject(RecordErrorReason::MissingSalary))?;

    if base_salary < Decimal::ZERO {
        return Err(reject(RecordErrorReason::NegativeSalary));
    }

    let hire_date = employee
        .parsed_hire_date()
        .ok_or_else(|| reject(RecordErrorReason::InvalidHireDate))?;

    Ok(ValidatedEmployee {
        employee,
        hire_date,
        base_salary,
    })
}
