//! Data models for the Guard Payroll engine.
//!
//! The `models` module defines the serialisable structs and enums that
//! flow in and out of the engine: raw punch events coming from the
//! time clock, the per-day attendance records the engine derives from
//! them, and the per-guard payroll summaries returned to callers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Note attached to a workday with no punch events.
pub const ABSENT_NOTE: &str = "ขาดงาน";
/// Note attached to a rest day with no punch events.
pub const REST_DAY_NOTE: &str = "วันหยุด";

/// A single time-clock action as delivered by the punch-event source.
///
/// Events arrive unordered and may be duplicated.  The engine never
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PunchEvent {
    /// Name of the guard who punched.
    pub guard_name: String,
    /// Free-text event label, e.g. `"เข้างาน"` or `"Check-out"`.
    pub event_type: String,
    /// Raw timestamp.  Either a canonical UTC timestamp or a localized
    /// `D-M-YYYY H:mm` string; see [`crate::timestamp::normalize_timestamp`].
    pub timestamp: String,
    /// Externally assigned sequence number, only used to break ties
    /// between events with the same instant.
    #[serde(default)]
    pub row_index: u64,
}

impl PunchEvent {
    pub fn new(
        guard_name: impl Into<String>,
        event_type: impl Into<String>,
        timestamp: impl Into<String>,
        row_index: u64,
    ) -> Self {
        Self {
            guard_name: guard_name.into(),
            event_type: event_type.into(),
            timestamp: timestamp.into(),
            row_index,
        }
    }
}

/// Outcome of evaluating one guard on one calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Workday without any punch events.
    Absent,
    /// Rest day without any punch events.
    RestDay,
    /// Present, checked in at or before the scheduled start, or no
    /// check-in could be inferred.
    OnTime,
    /// Present and late, but within the grace period.
    LateGrace,
    /// Present and late enough to lose half an hour's pay.
    LateHalfDeduct,
    /// Present and late enough to lose a full hour's pay.
    LateFullDeduct,
}

/// Attendance and pay for one guard on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyWorkRecord {
    pub date: NaiveDate,
    pub guard_name: String,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: DayStatus,
    pub is_late: bool,
    pub late_minutes: u32,
    pub is_absent: bool,
    pub total_work_hours: u32,
    pub wage: f64,
    pub deduction: f64,
    pub net_wage: f64,
    /// `"ขาดงาน"` for a workday absence, `"วันหยุด"` for an empty rest day.
    pub note: Option<String>,
}

/// Payroll totals for one guard over the requested range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub guard_name: String,
    /// Days that are not workday absences.
    pub total_days: u32,
    pub total_late_days: u32,
    pub total_absent_days: u32,
    pub total_wage: f64,
    pub total_deduction: f64,
    /// No lateness and no absence in the range.
    pub bonus_eligible: bool,
    pub diligence_bonus: f64,
    /// `total_wage - total_deduction + diligence_bonus`.
    pub net_payable: f64,
    pub details: Vec<DailyWorkRecord>,
}

/// Which part of a month a report covers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HalfMonth {
    /// Day 1 to the last day of the month.
    #[default]
    Whole,
    /// Days 1 to 15.
    First,
    /// Day 16 to the last day of the month.
    Second,
}

/// Body of a payroll request submitted over the API.
///
/// The window is given either as explicit `startDate`/`endDate`
/// (inclusive, `YYYY-MM-DD`) or as a `month` (`YYYY-MM`) plus `period`.
/// Explicit dates win when both are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRequest {
    pub events: Vec<PunchEvent>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub period: HalfMonth,
    /// Only return the summary for this guard.
    #[serde(default)]
    pub guard: Option<String>,
}

/// Body of a duty status request submitted over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    pub events: Vec<PunchEvent>,
    /// Instant to evaluate at; the server clock when omitted.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}
