//! Daily work record builder.
//!
//! Each guard-day is evaluated on its own, with no state carried across
//! days.  A day ends in one of six states: absent, empty rest day, or
//! present and on time / within grace / half-hour deduction / full-hour
//! deduction.  The transition is picked only from the day type, whether
//! any punch exists, and the minute of day of the inferred check-in.

use crate::grouping::Punch;
use crate::models::{DailyWorkRecord, DayStatus, ABSENT_NOTE, REST_DAY_NOTE};
use crate::rules::{Lateness, PayrollRules};
use chrono::{Datelike, NaiveDate};

/// Check-in and check-out picked out of one day's ordered punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftBounds<'a> {
    pub check_in: Option<&'a Punch>,
    pub check_out: Option<&'a Punch>,
}

/// Infer check-in and check-out from a day's punches, which must already
/// be in chronological order.
///
/// Labelled punches win.  Failing a labelled check-in, the first punch
/// counts if it is before noon; failing a labelled check-out, the last
/// punch counts if it is at or after noon and is not itself a check-in.
/// A single punch picked for both sides is kept on one side only,
/// decided by its hour.
pub fn infer_shift_bounds<'a>(punches: &'a [Punch], rules: &PayrollRules) -> ShiftBounds<'a> {
    let mut check_in = punches
        .iter()
        .position(|p| p.kind.is_check_in())
        .or_else(|| {
            punches
                .first()
                .filter(|p| p.local_hour() < rules.noon_hour)
                .map(|_| 0)
        });

    let mut check_out = punches
        .iter()
        .rposition(|p| p.kind.is_check_out())
        .or_else(|| {
            punches
                .last()
                .filter(|p| p.local_hour() >= rules.noon_hour && !p.kind.is_check_in())
                .map(|_| punches.len() - 1)
        });

    if let (Some(i), Some(o)) = (check_in, check_out) {
        if i == o {
            if punches[i].local_hour() >= rules.noon_hour {
                check_in = None;
            } else {
                check_out = None;
            }
        }
    }

    ShiftBounds {
        check_in: check_in.map(|i| &punches[i]),
        check_out: check_out.map(|o| &punches[o]),
    }
}

/// Build the record for one guard on one day.  `punches` holds that
/// guard's ordered punches for `date` and may be empty.
pub fn build_daily_record(
    guard_name: &str,
    date: NaiveDate,
    punches: &[Punch],
    rules: &PayrollRules,
) -> DailyWorkRecord {
    if punches.is_empty() {
        return if rules.is_work_day(date.weekday()) {
            empty_day(guard_name, date, DayStatus::Absent, ABSENT_NOTE)
        } else {
            empty_day(guard_name, date, DayStatus::RestDay, REST_DAY_NOTE)
        };
    }

    let bounds = infer_shift_bounds(punches, rules);
    let lateness = bounds
        .check_in
        .map(|p| rules.assess_lateness(p.local_minute_of_day()))
        .unwrap_or(Lateness::OnTime);

    let status = match lateness {
        Lateness::OnTime => DayStatus::OnTime,
        Lateness::Grace { .. } => DayStatus::LateGrace,
        Lateness::HalfHour { .. } => DayStatus::LateHalfDeduct,
        Lateness::FullHour { .. } => DayStatus::LateFullDeduct,
    };
    let wage = rules.daily_wage;
    let deduction = lateness.deduction();

    DailyWorkRecord {
        date,
        guard_name: guard_name.to_string(),
        check_in: bounds.check_in.map(|p| p.at),
        check_out: bounds.check_out.map(|p| p.at),
        status,
        is_late: lateness.is_late(),
        late_minutes: if lateness.is_late() { lateness.minutes() } else { 0 },
        is_absent: false,
        total_work_hours: rules.shift_hours,
        wage,
        deduction,
        net_wage: wage - deduction,
        note: None,
    }
}

fn empty_day(guard_name: &str, date: NaiveDate, status: DayStatus, note: &str) -> DailyWorkRecord {
    DailyWorkRecord {
        date,
        guard_name: guard_name.to_string(),
        check_in: None,
        check_out: None,
        status,
        is_late: false,
        late_minutes: 0,
        is_absent: status == DayStatus::Absent,
        total_work_hours: 0,
        wage: 0.0,
        deduction: 0.0,
        net_wage: 0.0,
        note: Some(note.to_string()),
    }
}
