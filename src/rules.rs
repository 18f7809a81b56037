//! Pay and lateness rules.
//!
//! The `rules` module holds the constants the record builder works
//! from: the flat daily wage, the nominal shift length, the scheduled
//! start time and the lateness tiers.  The defaults match the guard
//! contract in force; a JSON file may override any of them.

use crate::error::PayrollError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tier a check-in falls into relative to the scheduled start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lateness {
    /// At or before the scheduled start.
    OnTime,
    /// Late, but within the grace period.  Not flagged, no deduction.
    Grace { minutes: u32 },
    /// Flagged late; half an hour's wage share is deducted.
    HalfHour { minutes: u32, deduction: f64 },
    /// Flagged late; a full hour's wage share is deducted.
    FullHour { minutes: u32, deduction: f64 },
}

impl Lateness {
    pub fn minutes(&self) -> u32 {
        match *self {
            Lateness::OnTime => 0,
            Lateness::Grace { minutes }
            | Lateness::HalfHour { minutes, .. }
            | Lateness::FullHour { minutes, .. } => minutes,
        }
    }

    pub fn deduction(&self) -> f64 {
        match *self {
            Lateness::OnTime | Lateness::Grace { .. } => 0.0,
            Lateness::HalfHour { deduction, .. } | Lateness::FullHour { deduction, .. } => {
                deduction
            }
        }
    }

    pub fn is_late(&self) -> bool {
        matches!(self, Lateness::HalfHour { .. } | Lateness::FullHour { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PayrollRules {
    /// Flat wage for any day with presence.
    pub daily_wage: f64,
    /// Nominal shift length; also the divisor for the hourly share.
    pub shift_hours: u32,
    /// Scheduled start, as minutes after local midnight.
    pub shift_start_minute: u32,
    /// Lateness up to and including this many minutes is forgiven.
    pub grace_minutes: u32,
    /// Lateness above this many minutes costs a full hour.
    pub full_hour_after_minutes: u32,
    /// Local hour splitting morning (check-in side) from afternoon.
    pub noon_hour: u32,
    /// The single scheduled rest day.
    pub rest_day: Weekday,
}

impl Default for PayrollRules {
    fn default() -> Self {
        Self {
            daily_wage: 420.0,
            shift_hours: 12,
            shift_start_minute: 6 * 60 + 30,
            grace_minutes: 15,
            full_hour_after_minutes: 30,
            noon_hour: 12,
            rest_day: Weekday::Sun,
        }
    }
}

impl PayrollRules {
    /// Wage share of one hour of the nominal shift.
    pub fn hourly_rate(&self) -> f64 {
        self.daily_wage / self.shift_hours as f64
    }

    pub fn is_work_day(&self, weekday: Weekday) -> bool {
        weekday != self.rest_day
    }

    /// Tier a check-in given as minutes after local midnight.
    pub fn assess_lateness(&self, check_in_minute: u32) -> Lateness {
        let minutes = check_in_minute.saturating_sub(self.shift_start_minute);
        if minutes == 0 {
            Lateness::OnTime
        } else if minutes <= self.grace_minutes {
            Lateness::Grace { minutes }
        } else if minutes <= self.full_hour_after_minutes {
            Lateness::HalfHour {
                minutes,
                deduction: self.hourly_rate() * 0.5,
            }
        } else {
            Lateness::FullHour {
                minutes,
                deduction: self.hourly_rate(),
            }
        }
    }

    /// Load rules from a JSON file.  Missing keys keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, PayrollError> {
        let data = std::fs::read_to_string(path).map_err(|source| PayrollError::RulesIo {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| PayrollError::RulesParse {
            path: path.display().to_string(),
            source,
        })
    }
}
