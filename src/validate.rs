//! Input validation for calendar dates and observer coordinates.
//!
//! Inputs are rejected, never clamped.

use crate::error::DateViolation;
use crate::time::days_in_month;
use crate::Result;

pub use crate::error::{check_coordinates, check_julian_day, check_latitude, check_longitude};

/// Earliest year the low-precision solar series are accepted for.
pub const MIN_YEAR: i32 = -1000;

/// Latest year the low-precision solar series are accepted for.
pub const MAX_YEAR: i32 = 3000;

/// Checks a calendar date with fractional UTC hour.
///
/// Rules are applied in a fixed order and the first violation is reported:
/// day is positive, month is 1..=12, day fits the month, year is within
/// [`MIN_YEAR`]..=[`MAX_YEAR`], hour is finite and in [0, 24).
///
/// # Errors
/// Returns `InvalidDate` carrying the violated rule.
///
/// # Example
/// ```
/// # use solar_calendar::validate::validate;
/// assert!(validate(2024, 2, 29, 0.0).is_ok());
/// assert!(validate(2023, 2, 29, 0.0).is_err());
/// ```
pub fn validate(year: i32, month: u32, day: u32, hour: f64) -> Result<()> {
    if day == 0 {
        return Err(DateViolation::DayNotPositive.into());
    }

    let Some(max) = days_in_month(year, month) else {
        return Err(DateViolation::MonthOutOfRange { month }.into());
    };

    if day > max {
        return Err(DateViolation::DayOutOfRange {
            year,
            month,
            day,
            max,
        }
        .into());
    }

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateViolation::YearOutOfRange { year }.into());
    }

    if !(0.0..24.0).contains(&hour) {
        return Err(DateViolation::HourOutOfRange { hour }.into());
    }

    Ok(())
}
