//! Miscellaneous expense model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PaymentMethod, PaymentStatus};

/// A project expense that is neither labor nor material (permits, equipment
/// rental, disposal fees, and the like).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscExpense {
    /// Unique identifier for the expense.
    pub id: String,
    /// The project the expense belongs to.
    pub project_id: String,
    /// What the expense was for.
    pub description: String,
    /// Free-text category.
    #[serde(default)]
    pub category: Option<String>,
    /// Expense amount in dollars; non-negative.
    pub amount: Decimal,
    /// The date the expense was incurred.
    pub date: NaiveDate,
    /// How the expense was or will be paid.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// Settlement state of the expense.
    pub payment_status: PaymentStatus,
    /// When payment is due, if a due date was set.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}
