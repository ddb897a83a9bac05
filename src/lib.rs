//! Planilla Engine
//!
//! This crate computes payroll (planilla) figures for an HR administration
//! application: tenure-based vacation and year-end bonus accruals, capped
//! pension and social-security contributions, and roster-wide totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
