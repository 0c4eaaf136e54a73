//! Error types for the ERP calculation core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation failure the core can raise. All failures are local
//! to the single operation attempted; the caller surfaces a message and
//! rolls back the change, nothing here is fatal to the process.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ProjectStatus;

/// The main error type for the ERP calculation core.
///
/// Covers configuration loading failures and the business-rule validation
/// failures raised at the persistence boundary.
///
/// # Example
///
/// ```
/// use erp_engine::error::CoreError;
///
/// let error = CoreError::MissingCheckNumber {
///     disbursement_id: "pay_001".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Payment method is Check but no check number was provided for disbursement pay_001"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time entry was attempted against a deactivated employee.
    #[error("Cannot record time for inactive employee {employee_id}")]
    InactiveEmployee {
        /// The id of the inactive employee.
        employee_id: String,
    },

    /// The adjusted shift duration is below the configured floor.
    #[error("Shift of {minutes} minutes is below the {minimum} minute minimum")]
    ShiftTooShort {
        /// The adjusted shift length in minutes.
        minutes: i64,
        /// The configured minimum shift length in minutes.
        minimum: u32,
    },

    /// The lunch break is at least as long as the whole shift.
    #[error("Lunch break of {lunch_minutes} minutes exceeds the {shift_minutes} minute shift")]
    LunchExceedsShift {
        /// The recorded lunch duration in minutes.
        lunch_minutes: u32,
        /// The adjusted shift length in minutes.
        shift_minutes: i64,
    },

    /// A time entry was attempted against a project that is not open for work.
    #[error("Project {project_id} is {status} and cannot accept time entries")]
    ProjectNotOpen {
        /// The id of the closed project.
        project_id: String,
        /// The status that blocked the entry.
        status: ProjectStatus,
    },

    /// An end or due date precedes its start or issue date.
    #[error("Invalid date order for {entity}: {end} precedes {start}")]
    InvalidDateOrder {
        /// A description of the entity carrying the dates.
        entity: String,
        /// The start or issue date.
        start: NaiveDate,
        /// The offending end or due date.
        end: NaiveDate,
    },

    /// A record was marked Paid without a payment-received date.
    #[error("{entity} is marked Paid but has no payment received date")]
    MissingPaymentDate {
        /// A description of the record missing the date.
        entity: String,
    },

    /// A check disbursement is missing its check number.
    #[error("Payment method is Check but no check number was provided for disbursement {disbursement_id}")]
    MissingCheckNumber {
        /// The id of the disbursement.
        disbursement_id: String,
    },
}

/// A type alias for Results that return CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
