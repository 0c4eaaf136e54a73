//! Cash-basis revenue tracking and report assembly.
//!
//! Estimated profit (contract basis) lives on the cost rollup; this module
//! adds the cash-basis side, counting only invoices that have actually been
//! paid, and assembles both views into a [`CostReport`].

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::PayPolicy;
use crate::models::{CostReport, Invoice};

use super::cost_rollup::ProjectLedger;

/// Sums the amounts of all paid invoices.
pub fn actual_revenue(invoices: &[Invoice]) -> Decimal {
    invoices
        .iter()
        .filter(|invoice| invoice.is_paid())
        .map(|invoice| invoice.amount)
        .sum()
}

/// Cash-basis profit: paid-invoice revenue minus total incurred cost.
///
/// Diverges from the estimated (contract-basis) profit whenever the paid
/// amounts differ from the contract value or only some invoices have been
/// paid.
pub fn actual_net_profit(ledger: &ProjectLedger<'_>, policy: &PayPolicy) -> Decimal {
    actual_revenue(ledger.invoices) - ledger.total_cost(policy)
}

/// Assembles the full financial summary for one project.
pub fn build_cost_report(ledger: &ProjectLedger<'_>, policy: &PayPolicy) -> CostReport {
    CostReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        project_id: ledger.project.id.clone(),
        total_material_cost: ledger.total_material_cost(),
        total_labor_cost: ledger.total_labor_cost(policy),
        total_other_expenses: ledger.total_other_expenses(),
        total_cost: ledger.total_cost(policy),
        estimated_profit: ledger.estimated_profit(policy),
        profit_margin: ledger.profit_margin(policy),
        actual_revenue: actual_revenue(ledger.invoices),
        actual_net_profit: actual_net_profit(ledger, policy),
    }
}
