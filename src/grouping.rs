//! Daily grouping of punch events.
//!
//! Raw events are normalised, parsed and classified once, then bucketed
//! by guard and by shifted calendar day.  Each day's events are ordered
//! by instant, ties broken by the external sequence number.

use crate::classify::EventKind;
use crate::models::PunchEvent;
use crate::timestamp::{normalize_timestamp, parse_instant, shifted_day, shifted_local};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use std::collections::BTreeMap;
use tracing::debug;

/// A punch event after ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Punch {
    pub guard_name: String,
    pub kind: EventKind,
    pub at: DateTime<Utc>,
    /// Local wall-clock reading of `at` under the fixed offset.
    pub local: NaiveDateTime,
    pub row_index: u64,
}

impl Punch {
    /// Normalise, parse and classify a raw event.  `None` when the
    /// timestamp cannot be placed on any day.
    pub fn ingest(event: &PunchEvent) -> Option<Self> {
        let canonical = normalize_timestamp(&event.timestamp);
        let at = parse_instant(&canonical)?;
        Some(Self {
            guard_name: event.guard_name.clone(),
            kind: EventKind::classify(&event.event_type),
            at,
            local: shifted_local(at),
            row_index: event.row_index,
        })
    }

    pub fn day(&self) -> NaiveDate {
        shifted_day(self.at)
    }

    pub fn local_hour(&self) -> u32 {
        self.local.hour()
    }

    pub fn local_minute_of_day(&self) -> u32 {
        self.local.hour() * 60 + self.local.minute()
    }
}

/// Punches of one guard, keyed by shifted day.
pub type GuardDays = BTreeMap<NaiveDate, Vec<Punch>>;

/// Bucket every event whose shifted day lies in `[start, end]` by guard,
/// then by day.  Events with unusable timestamps are dropped.
pub fn group_by_guard_and_day(
    events: &[PunchEvent],
    start: NaiveDate,
    end: NaiveDate,
) -> BTreeMap<String, GuardDays> {
    let mut grouped: BTreeMap<String, GuardDays> = BTreeMap::new();
    for event in events {
        let Some(punch) = Punch::ingest(event) else {
            debug!(
                guard = %event.guard_name,
                timestamp = %event.timestamp,
                "dropping punch event with unparsable timestamp"
            );
            continue;
        };
        let day = punch.day();
        if day < start || day > end {
            continue;
        }
        grouped
            .entry(punch.guard_name.clone())
            .or_default()
            .entry(day)
            .or_default()
            .push(punch);
    }
    for days in grouped.values_mut() {
        for punches in days.values_mut() {
            sort_punches(punches);
        }
    }
    grouped
}

/// Ordered punches of a single guard per shifted day in `[start, end]`.
pub fn group_guard_days(
    events: &[PunchEvent],
    guard_name: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> GuardDays {
    group_by_guard_and_day(events, start, end)
        .remove(guard_name)
        .unwrap_or_default()
}

/// Chronological order, sequence number on ties.
pub fn sort_punches(punches: &mut [Punch]) {
    punches.sort_by(|a, b| a.at.cmp(&b.at).then(a.row_index.cmp(&b.row_index)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn buckets_by_shifted_day_and_orders_ties_by_row() {
        let events = vec![
            PunchEvent::new("A", "เลิกงาน", "2024-01-01T11:00:00.000Z", 3),
            PunchEvent::new("A", "เข้างาน", "2024-01-01T00:00:00.000Z", 2),
            PunchEvent::new("A", "ตรวจ", "2024-01-01T00:00:00.000Z", 1),
            // 18:00 UTC is 01:00 local the next day.
            PunchEvent::new("A", "เข้างาน", "2024-01-01T18:00:00.000Z", 4),
        ];
        let days = group_guard_days(&events, "A", date(2024, 1, 1), date(2024, 1, 2));
        let first = &days[&date(2024, 1, 1)];
        let rows: Vec<u64> = first.iter().map(|p| p.row_index).collect();
        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(days[&date(2024, 1, 2)].len(), 1);
    }

    #[test]
    fn excludes_out_of_range_and_unparsable_events() {
        let events = vec![
            PunchEvent::new("A", "เข้างาน", "2024-01-05T00:00:00.000Z", 1),
            PunchEvent::new("A", "เข้างาน", "not a time", 2),
            PunchEvent::new("B", "เข้างาน", "2024-01-01T00:00:00.000Z", 3),
        ];
        let grouped = group_by_guard_and_day(&events, date(2024, 1, 1), date(2024, 1, 3));
        assert!(!grouped.contains_key("A"));
        assert_eq!(grouped["B"].len(), 1);
    }

    #[test]
    fn localized_timestamps_land_on_their_written_day() {
        let events = vec![PunchEvent::new("A", "เข้างาน", "2-1-2567 6:20", 1)];
        let days = group_guard_days(&events, "A", date(2024, 1, 1), date(2024, 1, 31));
        let punch = &days[&date(2024, 1, 2)][0];
        assert_eq!(punch.local_minute_of_day(), 6 * 60 + 20);
        assert_eq!(punch.kind, EventKind::CheckIn);
    }
}
