//! Calculation core for a small-business ERP.
//!
//! This crate implements the business-rule arithmetic behind an ERP for a
//! small contracting firm: timesheet hour and pay computation (lunch-break
//! deduction tiers, Saturday premium), project cost and profit rollups,
//! payroll gross-to-net deduction arithmetic, paid-invoice revenue tracking,
//! and entity lifecycle validation. Persistence and the web layer are
//! external collaborators; everything here is pure in-process computation
//! over records already fetched from storage.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
