//! Timestamp normalisation and the fixed-offset "shifted day".
//!
//! Punch events reach the engine either as machine-generated UTC
//! timestamps or as localized `D-M-YYYY H:mm` strings typed into a
//! sheet, sometimes with a Buddhist-era year.  Everything is brought to
//! one canonical UTC form before grouping.
//!
//! Local dates and times are derived by adding a flat seven hours to
//! the UTC instant.  There is no timezone database lookup and no DST.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Offset of local (Bangkok) time from UTC, in hours.
pub const BANGKOK_OFFSET_HOURS: i64 = 7;

/// Years above this are taken to be Buddhist-era years.
const BUDDHIST_ERA_CUTOFF: i32 = 2400;
/// Difference between the Buddhist and Gregorian eras.
const BUDDHIST_ERA_OFFSET: i32 = 543;

const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Bring a raw timestamp into canonical UTC form.
///
/// Canonical values (anything containing the `T` date/time separator)
/// pass through untouched.  Localized values are read as local wall
/// clock time and converted to UTC.  Anything unparsable is returned
/// unchanged.
pub fn normalize_timestamp(raw: &str) -> String {
    if raw.contains('T') {
        return raw.to_string();
    }
    match parse_localized(raw) {
        Some(local) => {
            let utc = local - Duration::hours(BANGKOK_OFFSET_HOURS);
            utc.format(CANONICAL_FORMAT).to_string()
        }
        None => raw.to_string(),
    }
}

/// Parse a canonical timestamp into a UTC instant.
///
/// Accepts RFC 3339 (`2024-01-01T06:20:00.000Z`, `...+07:00`) and a
/// bare `YYYY-MM-DDTHH:MM:SS[.fff]`, which is taken to be UTC.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// The local wall-clock reading of a UTC instant under the fixed offset.
pub fn shifted_local(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.naive_utc() + Duration::hours(BANGKOK_OFFSET_HOURS)
}

/// The calendar day a UTC instant falls on under the fixed offset.
pub fn shifted_day(instant: DateTime<Utc>) -> NaiveDate {
    shifted_local(instant).date()
}

/// Parse `D-M-YYYY H:mm[:ss]` (also with `/` between date parts).
fn parse_localized(raw: &str) -> Option<NaiveDateTime> {
    let mut parts = raw.split_whitespace();
    let date_part = parts.next()?;
    let time_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let mut fields = date_part.split(['-', '/']);
    let day: u32 = fields.next()?.parse().ok()?;
    let month: u32 = fields.next()?.parse().ok()?;
    let mut year: i32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    if year > BUDDHIST_ERA_CUTOFF {
        year -= BUDDHIST_ERA_OFFSET;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::parse_from_str(time_part, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time_part, "%H:%M"))
        .ok()?;
    Some(date.and_time(time))
}
