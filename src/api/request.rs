//! Request types for the Planilla Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::RosterFilter;
use crate::models::{Employee, RateConfiguration};

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The roster as delivered by the HR API.
    pub employees: Vec<Employee>,
    /// Rates for this computation; the session rates are used when omitted.
    #[serde(default)]
    pub rates: Option<RateConfiguration>,
    /// The date tenure is measured against; today (UTC) when omitted.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Roster filter applied before computing.
    #[serde(default)]
    pub filter: RosterFilter,
}

/// Request body for the `/roster/filter` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFilterRequest {
    /// The roster to filter.
    pub employees: Vec<Employee>,
    /// The filter criteria.
    #[serde(default)]
    pub filter: RosterFilter,
}

/// Response body for the `/roster/filter` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFilterResponse {
    /// The matching employees, in roster order.
    pub employees: Vec<Employee>,
}
