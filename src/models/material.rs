//! Material purchase model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A material purchased for a specific project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPurchase {
    /// Unique identifier for the purchase.
    pub id: String,
    /// The project the material was bought for.
    pub project_id: String,
    /// What was purchased.
    pub description: String,
    /// Who it was purchased from.
    #[serde(default)]
    pub supplier: Option<String>,
    /// Purchase cost in dollars; non-negative.
    pub cost: Decimal,
    /// When it was purchased.
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    /// Free-text category (e.g., "lumber", "electrical").
    #[serde(default)]
    pub category: Option<String>,
}
