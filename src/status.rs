//! Live duty status.
//!
//! Answers "is the guard at their post right now" from the same punch
//! events the payroll engine consumes.  The current instant is passed in
//! so the answer is reproducible.

use crate::classify::EventKind;
use crate::grouping::Punch;
use crate::models::{PunchEvent, REST_DAY_NOTE};
use crate::timestamp::{shifted_day, shifted_local};
use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Account used to try out the time clock; never counts as a guard.
pub const TEST_GUARD: &str = "ทดสอบ";

const DUTY_START_MINUTE: u32 = 6 * 60 + 30;
const DUTY_END_MINUTE: u32 = 18 * 60 + 30;
const LUNCH_START_MINUTE: u32 = 12 * 60;
const LUNCH_END_MINUTE: u32 = 13 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyStatus {
    Holiday,
    OutsideHours,
    Working,
    Absent,
}

impl DutyStatus {
    /// Label shown next to the indicator.
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::Holiday => REST_DAY_NOTE,
            DutyStatus::OutsideHours => "นอกเวลาปฏิบัติงาน",
            DutyStatus::Working => "กำลังปฏิบัติงาน",
            DutyStatus::Absent => "ไม่มาปฏิบัติงาน",
        }
    }
}

/// Duty status at `now`.
pub fn duty_status(events: &[PunchEvent], now: DateTime<Utc>) -> DutyStatus {
    let local = shifted_local(now);
    if local.weekday() == Weekday::Sun {
        return DutyStatus::Holiday;
    }

    let minute = local.hour() * 60 + local.minute();
    let on_lunch = (LUNCH_START_MINUTE..LUNCH_END_MINUTE).contains(&minute);
    if minute < DUTY_START_MINUTE || minute >= DUTY_END_MINUTE || on_lunch {
        return DutyStatus::OutsideHours;
    }

    let today = shifted_day(now);
    let latest = events
        .iter()
        .filter(|e| e.guard_name != TEST_GUARD)
        .filter_map(Punch::ingest)
        .filter(|p| p.day() == today && p.at <= now)
        .max_by(|a, b| a.at.cmp(&b.at).then(a.row_index.cmp(&b.row_index)));

    match latest.map(|p| p.kind) {
        Some(EventKind::CheckIn) => DutyStatus::Working,
        Some(EventKind::Break) => DutyStatus::OutsideHours,
        _ => DutyStatus::Absent,
    }
}
