//! Payment enumerations shared across invoices, expenses, and payroll.
//!
//! Both enums are fixed closed sets. Parsing from form input happens at the
//! system boundary via serde and fails fast on unknown values; no
//! string-indexed lookups are performed at calculation time.

use serde::{Deserialize, Serialize};

/// How a payment is (or will be) made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash payment.
    Cash,
    /// Paper check; requires a check number on payroll disbursements.
    Check,
    /// Credit card payment.
    Credit,
    /// Bank transfer.
    Transfer,
    /// Direct deposit into the payee's account.
    DirectDeposit,
    /// Any other arrangement.
    Other,
}

/// The settlement state of an invoice, expense, or payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet paid.
    Pending,
    /// Partially paid.
    Partial,
    /// Fully paid; requires a payment-received date.
    Paid,
    /// Past due and unpaid.
    Overdue,
    /// Processed through an external system.
    Processed,
}
