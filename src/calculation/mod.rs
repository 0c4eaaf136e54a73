//! Calculation logic for the ERP core.
//!
//! This module contains the business-rule arithmetic: timesheet hour and pay
//! computation with lunch-break deduction tiers and the Saturday premium,
//! project cost rollups across labor, materials, and expenses, payroll
//! gross-to-net deduction arithmetic, cash-basis revenue tracking, and the
//! entity lifecycle rules applied before state changes are persisted.

pub mod cost_rollup;
pub mod lifecycle;
pub mod payroll_ledger;
pub mod revenue;
pub mod time_entry;

pub use cost_rollup::{LaborRecord, ProjectLedger};
pub use lifecycle::{
    accepts_time_entries, can_transition, status_after_invoice_added,
    status_after_invoice_deleted, validate_invoice, validate_payable, validate_project_dates,
};
pub use payroll_ledger::{
    net_amount, net_is_consistent, total_deductions, validate_check_details, validate_pay_period,
};
pub use revenue::{actual_net_profit, actual_revenue, build_cost_report};
pub use time_entry::{
    calculated_pay, deducted_hours, effective_hourly_rate, validate_time_entry,
};
