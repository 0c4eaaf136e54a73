//! Time entry model.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single labor entry: one employee, one calendar day, entry and exit
/// wall-clock times, and the recorded lunch break.
///
/// The project is optional; an entry with no project is overhead labor that
/// still counts toward the employee's pay but toward no project rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The employee who worked the hours.
    pub employee_id: String,
    /// The project the hours were worked on, if any.
    #[serde(default)]
    pub project_id: Option<String>,
    /// The calendar day of the entry.
    pub date: NaiveDate,
    /// Wall-clock entry time.
    pub entry_time: NaiveTime,
    /// Wall-clock exit time. An exit earlier than the entry means the shift
    /// ran overnight into the next day.
    pub exit_time: NaiveTime,
    /// Recorded lunch break in minutes.
    #[serde(default)]
    pub lunch_duration_minutes: u32,
}

impl TimeEntry {
    /// Returns the raw worked hours, before any lunch deduction.
    ///
    /// Entry and exit times are combined with the entry date; when the exit
    /// instant is strictly earlier than the entry instant the shift is
    /// treated as overnight and 24 hours are added. Identical entry and exit
    /// times yield zero hours, not a full day.
    ///
    /// # Examples
    ///
    /// ```
    /// use erp_engine::models::TimeEntry;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry {
    ///     id: "ts_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     project_id: None,
    ///     date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
    ///     entry_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     exit_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
    ///     lunch_duration_minutes: 0,
    /// };
    /// assert_eq!(entry.raw_hours(), Decimal::new(80, 1)); // 8.0 hours
    /// ```
    pub fn raw_hours(&self) -> Decimal {
        Decimal::new(self.raw_minutes(), 0) / Decimal::new(60, 0)
    }

    /// Returns the raw worked minutes, overnight-adjusted on strict
    /// exit-before-entry only.
    pub fn raw_minutes(&self) -> i64 {
        let entry_instant = NaiveDateTime::new(self.date, self.entry_time);
        let mut exit_instant = NaiveDateTime::new(self.date, self.exit_time);

        if exit_instant < entry_instant {
            exit_instant += TimeDelta::days(1);
        }

        (exit_instant - entry_instant).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(entry: (u32, u32), exit: (u32, u32)) -> TimeEntry {
        TimeEntry {
            id: "ts_001".to_string(),
            employee_id: "emp_001".to_string(),
            project_id: Some("proj_001".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(), // a Monday
            entry_time: NaiveTime::from_hms_opt(entry.0, entry.1, 0).unwrap(),
            exit_time: NaiveTime::from_hms_opt(exit.0, exit.1, 0).unwrap(),
            lunch_duration_minutes: 0,
        }
    }

    #[test]
    fn test_standard_day_is_eight_hours() {
        let entry = make_entry((8, 0), (16, 0));
        assert_eq!(entry.raw_hours(), Decimal::new(80, 1));
    }

    #[test]
    fn test_overnight_shift_adds_a_day() {
        // 22:00 to 06:00 runs into the next morning
        let entry = make_entry((22, 0), (6, 0));
        assert_eq!(entry.raw_hours(), Decimal::new(80, 1));
    }

    #[test]
    fn test_identical_times_are_zero_hours_not_twenty_four() {
        let entry = make_entry((8, 0), (8, 0));
        assert_eq!(entry.raw_hours(), Decimal::ZERO);
        assert_eq!(entry.raw_minutes(), 0);
    }

    #[test]
    fn test_partial_hours_are_fractional() {
        let entry = make_entry((9, 0), (13, 45));
        assert_eq!(entry.raw_hours(), Decimal::new(475, 2)); // 4.75
    }

    #[test]
    fn test_deserialize_defaults_lunch_to_zero() {
        let json = r#"{
            "id": "ts_002",
            "employee_id": "emp_001",
            "date": "2025-04-07",
            "entry_time": "08:00:00",
            "exit_time": "16:00:00"
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.lunch_duration_minutes, 0);
        assert!(entry.project_id.is_none());
    }

    #[test]
    fn test_serialize_round_trip() {
        let entry = make_entry((7, 30), (17, 0));
        let json = serde_json::to_string(&entry).unwrap();
        let back: TimeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
