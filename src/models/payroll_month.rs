//! Payroll month model.
//!
//! This module contains the [`PayrollMonth`] type that defines the processing
//! window of a payroll run: the first and last calendar instant of a month.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A (year, month) pair with its inclusive UTC window.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollMonth;
/// use chrono::{TimeZone, Utc};
///
/// let month = PayrollMonth::new(2026, 2).unwrap();
///
/// assert_eq!(month.days_in_month(), 28);
/// assert_eq!(month.label(), "February 2026");
/// assert!(month.contains(Utc.with_ymd_and_hms(2026, 2, 28, 23, 59, 59).unwrap()));
/// assert!(!month.contains(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PayrollMonth {
    year: i32,
    month: u32,
    #[serde(skip)]
    first_day: NaiveDate,
    #[serde(skip)]
    last_day: NaiveDate,
}

impl PayrollMonth {
    /// Builds the window for a calendar month.
    ///
    /// Fails with `InvalidInput` if the month is outside 1-12 or the year is
    /// not representable.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = |field: &str, message: String| EngineError::InvalidInput {
            field: field.to_string(),
            message,
        };

        if !(1..=12).contains(&month) {
            return Err(invalid("month", "must be between 1 and 12".to_string()));
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| invalid("year", format!("{} is not a supported year", year)))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| invalid("year", format!("{} is not a supported year", year)))?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// The month containing `today`.
    pub fn current(today: NaiveDate) -> EngineResult<Self> {
        Self::new(today.year(), today.month())
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of calendar days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    /// First instant of the month (00:00:00.000 UTC on day 1).
    pub fn month_start(&self) -> DateTime<Utc> {
        self.first_day.and_time(NaiveTime::MIN).and_utc()
    }

    /// Last instant of the month (23:59:59.999 UTC on the last day).
    pub fn month_end(&self) -> DateTime<Utc> {
        self.last_day.and_time(NaiveTime::MIN).and_utc() + TimeDelta::days(1)
            - TimeDelta::milliseconds(1)
    }

    /// Checks whether an instant falls within the window, inclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.month_start() && instant <= self.month_end()
    }

    /// Human-readable label such as "October 2026".
    pub fn label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_bounds() {
        let month = PayrollMonth::new(2026, 4).unwrap();
        assert_eq!(
            month.month_start(),
            Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            month.month_end(),
            Utc.with_ymd_and_hms(2026, 4, 30, 23, 59, 59).unwrap() + TimeDelta::milliseconds(999)
        );
        assert_eq!(month.days_in_month(), 30);
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let month = PayrollMonth::new(2025, 12).unwrap();
        assert_eq!(month.days_in_month(), 31);
        assert_eq!(month.label(), "December 2025");
        assert!(month.contains(Utc.with_ymd_and_hms(2025, 12, 31, 12, 0, 0).unwrap()));
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(PayrollMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(PayrollMonth::new(2100, 2).unwrap().days_in_month(), 28);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(matches!(
            PayrollMonth::new(2026, 0),
            Err(EngineError::InvalidInput { ref field, .. }) if field == "month"
        ));
        assert!(PayrollMonth::new(2026, 13).is_err());
    }

    #[test]
    fn test_current_uses_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let month = PayrollMonth::current(today).unwrap();
        assert_eq!((month.year(), month.month()), (2026, 10));
    }

    #[test]
    fn test_serializes_year_and_month_only() {
        let month = PayrollMonth::new(2026, 3).unwrap();
        assert_eq!(
            serde_json::to_string(&month).unwrap(),
            r#"{"year":2026,"month":3}"#
        );
    }
}
