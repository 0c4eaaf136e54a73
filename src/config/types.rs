//! Configuration types for the pay policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Limits applied to a single shift.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftPolicy {
    /// The shortest shift, in minutes, that may be recorded.
    pub minimum_shift_minutes: u32,
}

/// The three-band lunch-break deduction policy.
///
/// A recorded lunch shorter than `no_deduction_below_minutes` costs the
/// employee nothing. From there up to `flat_cap_from_minutes` the actual
/// break is deducted. At or beyond `flat_cap_from_minutes` the deduction is
/// capped at a flat `flat_cap_hours`.
#[derive(Debug, Clone, Deserialize)]
pub struct LunchPolicy {
    /// Lunch breaks below this many minutes are not deducted.
    pub no_deduction_below_minutes: u32,
    /// Lunch breaks at or above this many minutes deduct the flat cap.
    pub flat_cap_from_minutes: u32,
    /// The flat deduction, in hours, applied to long lunch breaks.
    pub flat_cap_hours: Decimal,
}

/// Weekend pay premium.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekendPolicy {
    /// Flat dollars-per-hour added to the pay rate for Saturday work.
    pub saturday_premium: Decimal,
}

/// The complete pay policy loaded from YAML configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PayPolicy {
    /// Shift length limits.
    pub shift: ShiftPolicy,
    /// Lunch-break deduction tiers.
    pub lunch: LunchPolicy,
    /// Weekend premium rates.
    pub weekend: WeekendPolicy,
}
