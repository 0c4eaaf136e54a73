//! Entity lifecycle rules.
//!
//! Centralizes the status and date-ordering rules that used to be re-derived
//! ad hoc at each call site: the project transition table, which states
//! accept time entries, how invoice creation and deletion move a project
//! through Invoiced/Paid, and the date invariants on projects, invoices, and
//! payables. All checks run before a state change is persisted; a failure
//! means the caller must not commit.

use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::models::{AccountsPayable, Invoice, PaymentStatus, Project, ProjectStatus};

/// Returns true when `to` is a legal next state from `from`.
///
/// The forward chain is Pending → InProgress → Completed → Invoiced → Paid;
/// Pending may also exit sideways to Cancelled. Staying in the current state
/// is always legal.
pub fn can_transition(from: ProjectStatus, to: ProjectStatus) -> bool {
    use ProjectStatus::*;

    if from == to {
        return true;
    }

    matches!(
        (from, to),
        (Pending, InProgress)
            | (Pending, Cancelled)
            | (InProgress, Completed)
            | (Completed, Invoiced)
            | (Invoiced, Paid)
    )
}

/// Returns true when a project in this state may have time entries created
/// or edited against it.
pub fn accepts_time_entries(status: ProjectStatus) -> bool {
    matches!(status, ProjectStatus::Pending | ProjectStatus::InProgress)
}

/// The project status after an invoice is created or re-statused against it.
///
/// Invoicing a Completed project moves it to Invoiced; an invoice that is
/// marked Paid moves the project straight to Paid. The edit path goes
/// through here too: when an existing invoice's status changes to Paid,
/// call this with the updated invoice to pick up the Paid move.
pub fn status_after_invoice_added(current: ProjectStatus, invoice: &Invoice) -> ProjectStatus {
    let status = if current == ProjectStatus::Completed {
        ProjectStatus::Invoiced
    } else {
        current
    };

    if invoice.is_paid() {
        ProjectStatus::Paid
    } else {
        status
    }
}

/// The project status after an invoice is deleted.
///
/// With no invoices left the project reverts to Completed. A Paid project
/// that still has invoices, none of them paid, reverts to Invoiced.
pub fn status_after_invoice_deleted(
    current: ProjectStatus,
    remaining: &[Invoice],
) -> ProjectStatus {
    if matches!(current, ProjectStatus::Invoiced | ProjectStatus::Paid) && remaining.is_empty() {
        return ProjectStatus::Completed;
    }

    if current == ProjectStatus::Paid && !remaining.iter().any(Invoice::is_paid) {
        return ProjectStatus::Invoiced;
    }

    current
}

/// Validates an invoice's date invariants before it is persisted.
///
/// The due date must not precede the invoice date, and an invoice marked
/// Paid must carry a payment-received date.
pub fn validate_invoice(invoice: &Invoice) -> CoreResult<()> {
    if let Some(due_date) = invoice.due_date {
        if due_date < invoice.invoice_date {
            return Err(CoreError::InvalidDateOrder {
                entity: format!("invoice {}", invoice.invoice_number),
                start: invoice.invoice_date,
                end: due_date,
            });
        }
    }

    if invoice.status == PaymentStatus::Paid && invoice.payment_received_date.is_none() {
        warn!(invoice_number = %invoice.invoice_number, "invoice marked Paid without a payment date");
        return Err(CoreError::MissingPaymentDate {
            entity: format!("invoice {}", invoice.invoice_number),
        });
    }

    Ok(())
}

/// Validates a payable's date invariants; same rules as invoices.
pub fn validate_payable(payable: &AccountsPayable) -> CoreResult<()> {
    if let Some(due_date) = payable.due_date {
        if due_date < payable.issue_date {
            return Err(CoreError::InvalidDateOrder {
                entity: format!("payable {}", payable.id),
                start: payable.issue_date,
                end: due_date,
            });
        }
    }

    if payable.status == PaymentStatus::Paid && payable.payment_date.is_none() {
        return Err(CoreError::MissingPaymentDate {
            entity: format!("payable {}", payable.id),
        });
    }

    Ok(())
}

/// Rejects projects whose end date precedes their start date.
///
/// Either date may be absent; the check only applies when both are present.
pub fn validate_project_dates(project: &Project) -> CoreResult<()> {
    if let (Some(start), Some(end)) = (project.start_date, project.end_date) {
        if end < start {
            return Err(CoreError::InvalidDateOrder {
                entity: format!("project {}", project.id),
                start,
                end,
            });
        }
    }
    Ok(())
}
