//! HTTP API module for the Planilla Engine.
//!
//! This module provides the REST API endpoints the presentation layer calls
//! to compute payroll and filter the roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollRequest, RosterFilterRequest, RosterFilterResponse};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
