//! Reporting window resolution.
//!
//! Callers pick a month and a half-month period; payroll is paid twice a
//! month, days 1 to 15 and day 16 to the end of the month.

use crate::error::PayrollError;
use crate::models::{HalfMonth, PayrollRequest};
use chrono::{Datelike, NaiveDate};

/// Parse an inclusive range bound in `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, PayrollError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| PayrollError::InvalidDate(value.to_string()))
}

/// Inclusive `(start, end)` of `period` within `month` (`YYYY-MM`).
pub fn month_window(month: &str, period: HalfMonth) -> Result<(NaiveDate, NaiveDate), PayrollError> {
    let invalid = || PayrollError::InvalidMonth(month.to_string());
    let (year, month_num) = month.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month_num: u32 = month_num.parse().map_err(|_| invalid())?;

    let first = NaiveDate::from_ymd_opt(year, month_num, 1).ok_or_else(invalid)?;
    let last = last_day_of_month(first).ok_or_else(invalid)?;

    Ok(match period {
        HalfMonth::Whole => (first, last),
        HalfMonth::First => (first, first.with_day(15).ok_or_else(invalid)?),
        HalfMonth::Second => (first.with_day(16).ok_or_else(invalid)?, last),
    })
}

/// Resolve the window of an API request.  Explicit dates win over month.
pub fn request_window(request: &PayrollRequest) -> Result<(NaiveDate, NaiveDate), PayrollError> {
    match (&request.start_date, &request.end_date, &request.month) {
        (Some(start), Some(end), _) => Ok((parse_date(start)?, parse_date(end)?)),
        (_, _, Some(month)) => month_window(month, request.period),
        _ => Err(PayrollError::MissingWindow),
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn half_month_periods() {
        assert_eq!(
            month_window("2024-02", HalfMonth::Whole).unwrap(),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            month_window("2024-02", HalfMonth::First).unwrap(),
            (date(2024, 2, 1), date(2024, 2, 15))
        );
        assert_eq!(
            month_window("2023-12", HalfMonth::Second).unwrap(),
            (date(2023, 12, 16), date(2023, 12, 31))
        );
    }

    #[test]
    fn bad_months_are_rejected() {
        assert!(matches!(
            month_window("2024-13", HalfMonth::Whole),
            Err(PayrollError::InvalidMonth(_))
        ));
        assert!(matches!(
            month_window("February", HalfMonth::Whole),
            Err(PayrollError::InvalidMonth(_))
        ));
    }

    #[test]
    fn explicit_dates_win() {
        let request = PayrollRequest {
            events: vec![],
            start_date: Some("2024-01-03".into()),
            end_date: Some("2024-01-09".into()),
            month: Some("2024-05".into()),
            period: HalfMonth::First,
            guard: None,
        };
        assert_eq!(
            request_window(&request).unwrap(),
            (date(2024, 1, 3), date(2024, 1, 9))
        );
    }

    #[test]
    fn missing_window_is_an_error() {
        let request = PayrollRequest {
            events: vec![],
            start_date: Some("2024-01-03".into()),
            end_date: None,
            month: None,
            period: HalfMonth::Whole,
            guard: None,
        };
        assert!(matches!(request_window(&request), Err(PayrollError::MissingWindow)));
        assert!(matches!(parse_date("03/01/2024"), Err(PayrollError::InvalidDate(_))));
    }
}
