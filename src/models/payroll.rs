//! Payroll disbursement and deduction models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PaymentMethod;

/// The kind of amount withheld from a gross payroll payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionType {
    /// Income or payroll tax withholding.
    Tax,
    /// Insurance premium.
    Insurance,
    /// Retirement plan contribution.
    Retirement,
    /// Repayment of a pay advance.
    Advance,
    /// Repayment of a loan.
    Loan,
    /// Any other withholding.
    Other,
}

/// A single amount withheld from a parent disbursement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollDeduction {
    /// What the withholding is for.
    pub description: String,
    /// Withheld amount in dollars; non-negative.
    pub amount: Decimal,
    /// The kind of withholding.
    pub deduction_type: DeductionType,
}

/// A single payroll payment to one employee for one pay period.
///
/// The disbursement owns its deductions the way a shift owns its breaks:
/// they travel together, and `amount` is expected to equal `gross_amount`
/// minus the deduction total. The ledger functions in
/// [`crate::calculation::payroll_ledger`] compute and verify that figure;
/// keeping `amount` current when deductions change is the caller's job,
/// inside the same transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollDisbursement {
    /// Unique identifier for the disbursement.
    pub id: String,
    /// The employee being paid.
    pub employee_id: String,
    /// First day of the pay period (inclusive).
    pub pay_period_start: NaiveDate,
    /// Last day of the pay period (inclusive); must not precede the start.
    pub pay_period_end: NaiveDate,
    /// Pay before deductions.
    pub gross_amount: Decimal,
    /// Pay after deductions (net).
    pub amount: Decimal,
    /// The date the payment was made.
    pub payment_date: NaiveDate,
    /// How the payment was made.
    pub payment_method: PaymentMethod,
    /// Check number; required when the method is Check.
    #[serde(default)]
    pub check_number: Option<String>,
    /// Issuing bank, for check payments.
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Amounts withheld from the gross.
    #[serde(default)]
    pub deductions: Vec<PayrollDeduction>,
}
