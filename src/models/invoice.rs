//! Invoice model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PaymentStatus;

/// An invoice issued against a project.
///
/// Date ordering and the Paid/payment-date invariant are enforced by
/// [`crate::calculation::lifecycle::validate_invoice`] before persisting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for the invoice.
    pub id: String,
    /// The project being billed.
    pub project_id: String,
    /// Human-facing invoice number; unique across the system.
    pub invoice_number: String,
    /// The date the invoice was issued.
    pub invoice_date: NaiveDate,
    /// When payment is due; must not precede the invoice date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Total invoiced amount in dollars; non-negative.
    pub amount: Decimal,
    /// Settlement state.
    pub status: PaymentStatus,
    /// When payment was received; required once status is Paid.
    #[serde(default)]
    pub payment_received_date: Option<NaiveDate>,
}

impl Invoice {
    /// Returns true if the invoice has been fully paid.
    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}
