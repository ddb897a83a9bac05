//! Configuration loading for the Planilla Engine.
//!
//! This module loads the session contribution rate configuration from YAML and
//! resolves which rate set a computation should use.
//!
//! # Example
//!
//! ```no_run
//! use planilla_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/planilla").unwrap();
//! println!("Pension rate: {}%", config.rates().pension_employee_rate);
//! ```

mod loader;

pub use loader::{CONTRIBUTION_RATES_FILE, ConfigLoader, resolve_rates};
