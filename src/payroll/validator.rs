//! Run request validation and target month resolution.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollMonth;

/// Earliest year a payroll run may target unless configured otherwise.
pub const DEFAULT_MINIMUM_YEAR: i32 = 2000;

/// Checks the optional year and month of a run request.
///
/// A supplied year must lie in `[minimum_year, current year + 1]` and a
/// supplied month in `[1, 12]`. Absent values are always valid.
///
/// # Examples
///
/// ```
/// use payroll_engine::payroll::validate_run_request;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
///
/// assert!(validate_run_request(Some(2027), Some(1), 2000, today).is_ok());
/// assert!(validate_run_request(Some(2028), Some(1), 2000, today).is_err());
/// assert!(validate_run_request(None, Some(13), 2000, today).is_err());
/// assert!(validate_run_request(None, None, 2000, today).is_ok());
/// ```
pub fn validate_run_request(
    year: Option<i32>,
    month: Option<i32>,
    minimum_year: i32,
    today: NaiveDate,
) -> EngineResult<()> {
    if let Some(year) = year {
        let maximum_year = today.year() + 1;
        if year < minimum_year || year > maximum_year {
            return Err(EngineError::InvalidInput {
                field: "year".to_string(),
                message: format!(
                    "{} is out of range; must be between {} and {}",
                    year, minimum_year, maximum_year
                ),
            });
        }
    }

    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidInput {
                field: "month".to_string(),
                message: format!("{} is out of range; must be between 1 and 12", month),
            });
        }
    }

    Ok(())
}

/// Resolves the month a run targets.
///
/// The explicit pair is used only when both values are supplied; otherwise
/// the month containing `today` is processed. Call [`validate_run_request`]
/// first.
pub fn resolve_target_month(
    year: Option<i32>,
    month: Option<i32>,
    today: NaiveDate,
) -> EngineResult<PayrollMonth> {
    match (year, month) {
        (Some(year), Some(month)) => {
            let month = u32::try_from(month).map_err(|_| EngineError::InvalidInput {
                field: "month".to_string(),
                message: format!("{} is out of range; must be between 1 and 12", month),
            })?;
            PayrollMonth::new(year, month)
        }
        _ => PayrollMonth::current(today),
    }
}
