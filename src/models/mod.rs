//! Core data models for the ERP calculation engine.
//!
//! This module contains all the domain entities consumed by the calculation
//! core. They are plain owned values; the persistence layer (out of scope
//! here) is responsible for fetching them and their related collections.

mod employee;
mod expense;
mod invoice;
mod material;
mod payable;
mod payment;
mod payroll;
mod project;
mod report;
mod time_entry;

pub use employee::Employee;
pub use expense::MiscExpense;
pub use invoice::Invoice;
pub use material::MaterialPurchase;
pub use payable::AccountsPayable;
pub use payment::{PaymentMethod, PaymentStatus};
pub use payroll::{DeductionType, PayrollDeduction, PayrollDisbursement};
pub use project::{Project, ProjectStatus};
pub use report::CostReport;
pub use time_entry::TimeEntry;
