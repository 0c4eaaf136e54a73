//! Accounts payable model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PaymentMethod, PaymentStatus};

/// A bill owed to a vendor.
///
/// Payables carry the same date-order and Paid/payment-date invariants as
/// invoices, enforced by [`crate::calculation::lifecycle::validate_payable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsPayable {
    /// Unique identifier for the payable.
    pub id: String,
    /// The vendor owed.
    pub vendor: String,
    /// What the bill is for.
    pub description: String,
    /// Amount owed in dollars; non-negative.
    pub amount: Decimal,
    /// The date the bill was issued.
    pub issue_date: NaiveDate,
    /// When payment is due; must not precede the issue date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// How the bill was or will be paid.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// Settlement state.
    pub status: PaymentStatus,
    /// When the bill was paid; required once status is Paid.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_round_trip() {
        let payable = AccountsPayable {
            id: "ap_001".to_string(),
            vendor: "Hartley Lumber".to_string(),
            description: "April materials account".to_string(),
            amount: Decimal::new(248075, 2),
            issue_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 5, 31),
            payment_method: Some(PaymentMethod::Transfer),
            status: PaymentStatus::Pending,
            payment_date: None,
        };

        let json = serde_json::to_string(&payable).unwrap();
        let back: AccountsPayable = serde_json::from_str(&json).unwrap();
        assert_eq!(payable, back);
    }
}
