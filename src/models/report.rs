//! Cost report model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point-in-time financial summary of one project.
///
/// Produced by [`crate::calculation::revenue::build_cost_report`] and handed
/// to the rendering/export layer. Carries both the accrual-basis figures
/// (estimated profit against the contract value) and the cash-basis figures
/// (actual revenue from paid invoices); the two diverge whenever paid
/// amounts differ from the contract value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// Unique id for this generated report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The project summarized.
    pub project_id: String,
    /// Sum of material purchase costs.
    pub total_material_cost: Decimal,
    /// Sum of calculated pay over all time entries.
    pub total_labor_cost: Decimal,
    /// Sum of miscellaneous expense amounts.
    pub total_other_expenses: Decimal,
    /// Materials + labor + other expenses.
    pub total_cost: Decimal,
    /// Contract value minus total cost (accrual basis).
    pub estimated_profit: Decimal,
    /// Estimated profit as a percentage of contract value; zero when no
    /// positive contract value exists.
    pub profit_margin: Decimal,
    /// Sum of paid invoice amounts (cash basis).
    pub actual_revenue: Decimal,
    /// Actual revenue minus total cost (cash basis).
    pub actual_net_profit: Decimal,
}
