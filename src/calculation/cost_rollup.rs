//! Project cost and profit rollups.
//!
//! A [`ProjectLedger`] bundles a project with its already-fetched related
//! collections and computes the four cost categories plus the accrual-basis
//! profit figures. The repository layer assembles the ledger for one
//! request; nothing here touches storage.

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::models::{Employee, Invoice, MaterialPurchase, MiscExpense, Project, TimeEntry};

use super::time_entry::calculated_pay;

/// One time entry paired with the employee who worked it.
///
/// Labor cost needs the employee's pay rate next to each entry; the
/// repository resolves that join before the rollup runs. Entries of
/// employees who have since been deactivated belong here too: deactivation
/// blocks new entries but is not retroactive, so historical labor still
/// counts toward project cost.
#[derive(Debug, Clone, Copy)]
pub struct LaborRecord<'a> {
    /// The time entry.
    pub entry: &'a TimeEntry,
    /// The employee who worked it.
    pub employee: &'a Employee,
}

/// A project together with its related collections, ready for rollup.
#[derive(Debug, Clone)]
pub struct ProjectLedger<'a> {
    /// The project being summarized.
    pub project: &'a Project,
    /// All time entries recorded against the project, with their employees.
    pub labor: &'a [LaborRecord<'a>],
    /// All material purchases for the project.
    pub materials: &'a [MaterialPurchase],
    /// All miscellaneous expenses for the project.
    pub expenses: &'a [MiscExpense],
    /// All invoices issued against the project.
    pub invoices: &'a [Invoice],
}

impl ProjectLedger<'_> {
    /// Sums the cost of all material purchases.
    pub fn total_material_cost(&self) -> Decimal {
        self.materials.iter().map(|m| m.cost).sum()
    }

    /// Sums the calculated pay of every time entry on the project.
    ///
    /// This is the straightforward formula: deducted hours times the
    /// effective rate, summed over all entries.
    pub fn total_labor_cost(&self, policy: &PayPolicy) -> Decimal {
        self.labor
            .iter()
            .map(|record| calculated_pay(record.entry, record.employee, policy))
            .sum()
    }

    /// Sums all miscellaneous expense amounts.
    pub fn total_other_expenses(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Total incurred cost: materials + labor + other expenses.
    pub fn total_cost(&self, policy: &PayPolicy) -> Decimal {
        self.total_material_cost() + self.total_labor_cost(policy) + self.total_other_expenses()
    }

    /// Accrual-basis profit: contract value minus total cost.
    ///
    /// A project with no agreed contract value shows as pure cost, i.e. the
    /// negative of its total cost.
    pub fn estimated_profit(&self, policy: &PayPolicy) -> Decimal {
        self.project.contract_value.unwrap_or(Decimal::ZERO) - self.total_cost(policy)
    }

    /// Estimated profit as a percentage of the contract value.
    ///
    /// Zero when the contract value is absent or not positive.
    pub fn profit_margin(&self, policy: &PayPolicy) -> Decimal {
        match self.project.contract_value {
            Some(value) if value > Decimal::ZERO => {
                (self.estimated_profit(policy) / value) * Decimal::new(100, 0)
            }
            _ => Decimal::ZERO,
        }
    }
}
