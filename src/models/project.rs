//! Project model and lifecycle status.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The lifecycle state of a project.
///
/// The legal forward path is Pending → InProgress → Completed → Invoiced →
/// Paid, with Cancelled as a side exit from Pending. Transition legality is
/// checked by [`crate::calculation::lifecycle`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Agreed but not started; may still accept time entries.
    Pending,
    /// Actively worked; accepts time entries.
    InProgress,
    /// Work finished, not yet invoiced.
    Completed,
    /// At least one invoice has been issued.
    Invoiced,
    /// The invoiced amount has been received.
    Paid,
    /// Abandoned before work started.
    Cancelled,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Invoiced => "Invoiced",
            ProjectStatus::Paid => "Paid",
            ProjectStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// Represents a client project that accrues labor, material, and expense
/// costs and is eventually invoiced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Optional external identifier; unique when present.
    #[serde(default)]
    pub project_ref: Option<String>,
    /// The client the work is performed for.
    #[serde(default)]
    pub client_name: Option<String>,
    /// Where the work is performed.
    #[serde(default)]
    pub location: Option<String>,
    /// The agreed contract value; absent when no price has been agreed.
    #[serde(default)]
    pub contract_value: Option<Decimal>,
    /// Scheduled or actual start date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Scheduled or actual end date; must not precede the start date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Current lifecycle state.
    pub status: ProjectStatus,
}
