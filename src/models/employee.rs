//! Employee model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PaymentMethod;

/// Represents a worker whose time and payroll the system tracks.
///
/// Deactivating an employee does not delete history: existing time entries
/// and disbursements remain, and only the creation of new time entries is
/// blocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Optional external identifier (e.g., a badge or payroll number).
    #[serde(default)]
    pub employee_ref: Option<String>,
    /// Hourly pay rate in dollars; non-negative.
    pub pay_rate: Decimal,
    /// Preferred payment method for payroll disbursements.
    pub payment_method: PaymentMethod,
    /// Whether the employee may have new time recorded against them.
    pub is_active: bool,
    /// Date of hire, if known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Maria Lopez",
            "employee_ref": "E-042",
            "pay_rate": "25.00",
            "payment_method": "check",
            "is_active": true,
            "hire_date": "2023-06-01"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Maria Lopez");
        assert_eq!(employee.employee_ref.as_deref(), Some("E-042"));
        assert_eq!(employee.pay_rate, Decimal::new(2500, 2));
        assert_eq!(employee.payment_method, PaymentMethod::Check);
        assert!(employee.is_active);
        assert_eq!(
            employee.hire_date,
            Some(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap())
        );
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let json = r#"{
            "id": "emp_002",
            "name": "Sam Ortiz",
            "pay_rate": "18.50",
            "payment_method": "cash",
            "is_active": false
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.employee_ref.is_none());
        assert!(employee.hire_date.is_none());
        assert!(!employee.is_active);
    }

    #[test]
    fn test_serialize_round_trip() {
        let employee = Employee {
            id: "emp_003".to_string(),
            name: "Devon Reyes".to_string(),
            employee_ref: None,
            pay_rate: Decimal::new(2275, 2),
            payment_method: PaymentMethod::DirectDeposit,
            is_active: true,
            hire_date: None,
        };

        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, back);
    }
}
