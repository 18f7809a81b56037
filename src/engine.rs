//! Payroll computation engine.
//!
//! The `engine` module turns a flat collection of [`PunchEvent`]s and an
//! inclusive date range into one [`PayrollSummary`] per guard.  Guards
//! are independent of each other, so the per-guard work is spread over
//! CPU cores with [`rayon`].  The computation is pure: the same input
//! always gives the same output, whatever order the events arrive in.

use crate::daily::build_daily_record;
use crate::grouping::{group_by_guard_and_day, GuardDays};
use crate::models::{DailyWorkRecord, PayrollSummary, PunchEvent};
use crate::rules::PayrollRules;
use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::info;

/// Calculate payroll for every guard with at least one usable event in
/// `[start, end]`, using the default rules.
pub fn calculate_payroll(
    events: &[PunchEvent],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<PayrollSummary> {
    calculate_payroll_with(events, start, end, &PayrollRules::default())
}

/// Calculate payroll under the given rules.
///
/// Summaries come back ordered by guard name.  An inverted range yields
/// no summaries.
pub fn calculate_payroll_with(
    events: &[PunchEvent],
    start: NaiveDate,
    end: NaiveDate,
    rules: &PayrollRules,
) -> Vec<PayrollSummary> {
    let grouped = group_by_guard_and_day(events, start, end);

    let summaries: Vec<PayrollSummary> = grouped
        .into_par_iter()
        .map(|(guard_name, days)| {
            let details = build_guard_records(&guard_name, &days, start, end, rules);
            summarize(guard_name, details)
        })
        .collect();

    info!(
        events = events.len(),
        guards = summaries.len(),
        %start,
        %end,
        "payroll calculated"
    );
    summaries
}

/// One record per calendar day in `[start, end]` for a single guard.
pub fn build_guard_records(
    guard_name: &str,
    days: &GuardDays,
    start: NaiveDate,
    end: NaiveDate,
    rules: &PayrollRules,
) -> Vec<DailyWorkRecord> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| {
            let punches = days.get(&date).map(Vec::as_slice).unwrap_or(&[]);
            build_daily_record(guard_name, date, punches, rules)
        })
        .collect()
}

/// Fold a guard's daily records into totals.
pub fn summarize(guard_name: String, details: Vec<DailyWorkRecord>) -> PayrollSummary {
    let count = |pred: fn(&DailyWorkRecord) -> bool| details.iter().filter(|d| pred(d)).count() as u32;
    let total_days = count(|d| !d.is_absent);
    let total_late_days = count(|d| d.is_late);
    let total_absent_days = count(|d| d.is_absent);
    let total_wage: f64 = details.iter().map(|d| d.wage).sum();
    let total_deduction: f64 = details.iter().map(|d| d.deduction).sum();

    let bonus_eligible = total_late_days == 0 && total_absent_days == 0;
    // No payout amount has been agreed for the bonus yet; eligibility is
    // reported but pays nothing.
    let diligence_bonus = 0.0;

    PayrollSummary {
        guard_name,
        total_days,
        total_late_days,
        total_absent_days,
        total_wage,
        total_deduction,
        bonus_eligible,
        diligence_bonus,
        net_payable: total_wage - total_deduction + diligence_bonus,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_day_in_range_gets_a_record() {
        let days = GuardDays::new();
        let records = build_guard_records(
            "A",
            &days,
            date(2024, 1, 1),
            date(2024, 1, 14),
            &PayrollRules::default(),
        );
        assert_eq!(records.len(), 14);
        assert_eq!(records.iter().filter(|r| r.is_absent).count(), 12);
        assert_eq!(records.iter().filter(|r| r.note.as_deref() == Some("วันหยุด")).count(), 2);
    }

    #[test]
    fn guard_without_events_earns_nothing() {
        let records = build_guard_records(
            "A",
            &GuardDays::new(),
            date(2024, 1, 1),
            date(2024, 1, 7),
            &PayrollRules::default(),
        );
        let summary = summarize("A".into(), records);
        assert_eq!(summary.total_absent_days, 6);
        assert_eq!(summary.total_days, 1);
        assert_eq!(summary.net_payable, 0.0);
        assert!(!summary.bonus_eligible);
    }

    #[test]
    fn eligibility_pays_zero_by_default() {
        let events: Vec<PunchEvent> = (1..=6)
            .map(|d| PunchEvent::new("A", "เข้างาน", format!("{d}-1-2024 6:00"), d as u64))
            .collect();
        let summaries = calculate_payroll(&events, date(2024, 1, 1), date(2024, 1, 7));
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].bonus_eligible);
        assert_eq!(summaries[0].diligence_bonus, 0.0);
        assert_eq!(summaries[0].net_payable, 2520.0);
    }

    #[test]
    fn rules_file_cannot_switch_on_a_bonus() {
        let rules: PayrollRules =
            serde_json::from_str(r#"{"diligenceBonus": 500.0}"#).unwrap();
        let events: Vec<PunchEvent> = (1..=6)
            .map(|d| PunchEvent::new("A", "เข้างาน", format!("{d}-1-2024 6:00"), d as u64))
            .collect();
        let summary = &calculate_payroll_with(&events, date(2024, 1, 1), date(2024, 1, 7), &rules)[0];
        assert!(summary.bonus_eligible);
        assert_eq!(summary.diligence_bonus, 0.0);
        assert_eq!(summary.net_payable, 2520.0);
    }

    #[test]
    fn inverted_range_is_empty() {
        let events = vec![PunchEvent::new("A", "เข้างาน", "2-1-2024 6:00", 1)];
        assert!(calculate_payroll(&events, date(2024, 1, 7), date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn deductions_are_summed() {
        let events = vec![
            PunchEvent::new("A", "เข้างาน", "1-1-2024 6:50", 1),
            PunchEvent::new("A", "เข้างาน", "2-1-2024 7:30", 2),
        ];
        let summary = &calculate_payroll(&events, date(2024, 1, 1), date(2024, 1, 2))[0];
        assert_eq!(summary.total_late_days, 2);
        assert_eq!(summary.total_deduction, 52.5);
        assert_eq!(summary.net_payable, 840.0 - 52.5);
    }
}
