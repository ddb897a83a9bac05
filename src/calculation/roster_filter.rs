//! Roster filtering.
//!
//! Narrows the employee roster by a name/role search term and a department.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Filter criteria for the roster.
///
/// Empty or omitted criteria do not filter. Both criteria must match when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFilter {
    /// Case-insensitive substring matched against the full name or role name.
    #[serde(default)]
    pub search: Option<String>,
    /// Case-insensitive exact department name.
    #[serde(default)]
    pub department: Option<String>,
}

impl RosterFilter {
    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn department_term(&self) -> Option<String> {
        self.department
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns true when neither criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.department_term().is_none()
    }

    /// Returns true when the employee satisfies every set criterion.
    pub fn matches(&self, employee: &Employee) -> bool {
        let search_ok = self.search_term().is_none_or(|term| {
            employee.full_name.to_lowercase().contains(&term)
                || employee.role_name.to_lowercase().contains(&term)
        });

        let department_ok = self
            .department_term()
            .is_none_or(|department| employee.department_name.to_lowercase() == department);

        search_ok && department_ok
    }
}

/// Returns the employees matching `filter`, in roster order.
///
/// # Examples
///
/// ```
/// use planilla_engine::calculation::{RosterFilter, filter_roster};
/// use planilla_engine::models::Employee;
///
/// let employee = |id: &str, name: &str, department: &str| Employee {
///     id: id.to_string(),
///     full_name: name.to_string(),
///     role_name: "Analyst".to_string(),
///     hire_date: "2020-01-01".to_string(),
///     role_base_salary: None,
///     department_name: department.to_string(),
/// };
/// let roster = vec![
///     employee("emp_001", "Ana Flores", "Finance"),
///     employee("emp_002", "Luis Mamani", "Sales"),
/// ];
///
/// let filter = RosterFilter {
///     search: Some("ANA".to_string()),
///     department: None,
/// };
/// let matched = filter_roster(&roster, &filter);
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].id, "emp_001");
/// ```
pub fn filter_roster(employees: &[Employee], filter: &RosterFilter) -> Vec<Employee> {
    if filter.is_empty() {
        return employees.to_vec();
    }

    employees
        .iter()
        .filter(|employee| filter.matches(employee))
        .cloned()
        .collect()
}
