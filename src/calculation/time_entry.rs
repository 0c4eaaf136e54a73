//! Worked-hours and pay calculation for a single time entry.
//!
//! This module applies the lunch-break deduction tiers and the Saturday
//! premium to a [`TimeEntry`], and validates new entries against the
//! employee, the project state, and the shift-length policy.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Weekday};
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::PayPolicy;
use crate::error::{CoreError, CoreResult};
use crate::models::{Employee, Project, TimeEntry};

use super::lifecycle;

/// Returns the payable hours for an entry after the lunch deduction.
///
/// The deduction policy has three bands:
/// - lunch shorter than the no-deduction threshold (30 min): nothing deducted
/// - lunch between the thresholds (30–59 min): the actual break is deducted
/// - lunch at or past the cap threshold (60 min): a flat 0.5 h is deducted,
///   no matter how long the break actually ran
///
/// The result never goes below zero.
///
/// # Examples
///
/// ```no_run
/// use erp_engine::calculation::deducted_hours;
/// use erp_engine::config::PolicyLoader;
/// use erp_engine::models::TimeEntry;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let loader = PolicyLoader::load("./config/erp").unwrap();
/// let entry = TimeEntry {
///     id: "ts_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     project_id: None,
///     date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
///     entry_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     exit_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
///     lunch_duration_minutes: 30,
/// };
/// // 8 hours minus the 30-minute break actually taken
/// assert_eq!(deducted_hours(&entry, loader.policy()), Decimal::new(75, 1));
/// ```
pub fn deducted_hours(entry: &TimeEntry, policy: &PayPolicy) -> Decimal {
    let raw = entry.raw_hours();
    let lunch = entry.lunch_duration_minutes;

    let deduction = if lunch < policy.lunch.no_deduction_below_minutes {
        Decimal::ZERO
    } else if lunch < policy.lunch.flat_cap_from_minutes {
        Decimal::from(lunch) / Decimal::new(60, 0)
    } else {
        policy.lunch.flat_cap_hours
    };

    (raw - deduction).max(Decimal::ZERO)
}

/// Returns the hourly rate in effect for an entry.
///
/// The employee's base rate, plus the flat Saturday premium when the entry
/// date falls on a Saturday. Sundays and weekdays earn the base rate.
pub fn effective_hourly_rate(
    entry: &TimeEntry,
    employee: &Employee,
    policy: &PayPolicy,
) -> Decimal {
    if entry.date.weekday() == Weekday::Sat {
        employee.pay_rate + policy.weekend.saturday_premium
    } else {
        employee.pay_rate
    }
}

/// Returns the pay owed for an entry: deducted hours times the effective rate.
pub fn calculated_pay(entry: &TimeEntry, employee: &Employee, policy: &PayPolicy) -> Decimal {
    deducted_hours(entry, policy) * effective_hourly_rate(entry, employee, policy)
}

/// Validates a new or edited time entry before it is persisted.
///
/// Checks, in order:
/// 1. the employee is active,
/// 2. the shift meets the minimum length,
/// 3. the lunch break is shorter than the shift,
/// 4. the project (when given) is open for time entries.
///
/// For shift-length purposes an exit at or before the entry time is treated
/// as overnight and pushed to the next day, so an entry with identical times
/// passes the length check even though it pays zero hours.
pub fn validate_time_entry(
    entry: &TimeEntry,
    employee: &Employee,
    project: Option<&Project>,
    policy: &PayPolicy,
) -> CoreResult<()> {
    if !employee.is_active {
        warn!(employee_id = %employee.id, "rejected time entry for inactive employee");
        return Err(CoreError::InactiveEmployee {
            employee_id: employee.id.clone(),
        });
    }

    let entry_instant = NaiveDateTime::new(entry.date, entry.entry_time);
    let mut exit_instant = NaiveDateTime::new(entry.date, entry.exit_time);
    if exit_instant <= entry_instant {
        exit_instant += TimeDelta::days(1);
    }
    let shift_minutes = (exit_instant - entry_instant).num_minutes();

    if shift_minutes < i64::from(policy.shift.minimum_shift_minutes) {
        return Err(CoreError::ShiftTooShort {
            minutes: shift_minutes,
            minimum: policy.shift.minimum_shift_minutes,
        });
    }

    if i64::from(entry.lunch_duration_minutes) >= shift_minutes {
        return Err(CoreError::LunchExceedsShift {
            lunch_minutes: entry.lunch_duration_minutes,
            shift_minutes,
        });
    }

    if let Some(project) = project {
        if !lifecycle::accepts_time_entries(project.status) {
            return Err(CoreError::ProjectNotOpen {
                project_id: project.id.clone(),
                status: project.status,
            });
        }
    }

    Ok(())
}
