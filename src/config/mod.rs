//! Pay policy configuration for the ERP calculation core.
//!
//! The business-rule constants (minimum shift length, lunch deduction tiers,
//! Saturday premium) live in YAML configuration rather than in the
//! calculation code, so the policy is auditable and testable on its own.
//!
//! # Example
//!
//! ```no_run
//! use erp_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/erp").unwrap();
//! println!("Minimum shift: {} minutes", loader.policy().shift.minimum_shift_minutes);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{LunchPolicy, PayPolicy, ShiftPolicy, WeekendPolicy};
