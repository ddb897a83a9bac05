//! Core data models for the Planilla Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payroll_run;
mod rate_configuration;

pub use employee::Employee;
pub use payroll_run::{PayrollLine, PayrollRun, PayrollTotals, RecordError, RecordErrorReason};
pub use rate_configuration::RateConfiguration;
