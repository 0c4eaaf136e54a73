//! Payroll gross-to-net arithmetic and disbursement validation.

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::models::{PaymentMethod, PayrollDisbursement};

/// Sums the deductions attached to a disbursement.
pub fn total_deductions(disbursement: &PayrollDisbursement) -> Decimal {
    disbursement.deductions.iter().map(|d| d.amount).sum()
}

/// Net pay: the gross amount minus all deductions.
///
/// Whenever deductions are added or removed the caller must store this
/// figure back into `amount` within the same transaction.
pub fn net_amount(disbursement: &PayrollDisbursement) -> Decimal {
    disbursement.gross_amount - total_deductions(disbursement)
}

/// Returns true when the stored `amount` matches the recomputed net.
pub fn net_is_consistent(disbursement: &PayrollDisbursement) -> bool {
    disbursement.amount == net_amount(disbursement)
}

/// Rejects check disbursements that carry no check number.
pub fn validate_check_details(disbursement: &PayrollDisbursement) -> CoreResult<()> {
    if disbursement.payment_method == PaymentMethod::Check
        && disbursement
            .check_number
            .as_deref()
            .is_none_or(|n| n.trim().is_empty())
    {
        return Err(CoreError::MissingCheckNumber {
            disbursement_id: disbursement.id.clone(),
        });
    }
    Ok(())
}

/// Rejects pay periods whose end precedes their start.
pub fn validate_pay_period(disbursement: &PayrollDisbursement) -> CoreResult<()> {
    if disbursement.pay_period_end < disbursement.pay_period_start {
        return Err(CoreError::InvalidDateOrder {
            entity: format!("pay period of disbursement {}", disbursement.id),
            start: disbursement.pay_period_start,
            end: disbursement.pay_period_end,
        });
    }
    Ok(())
}
