//! Error types for calendar conversion and sunrise calculations.

use crate::types::{PolarCondition, SunEventKind};

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the public operations of this crate.
///
/// Every variant is a plain value; nothing is retried internally because the
/// computations are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// Calendrically impossible date, unsupported year or out-of-range hour.
    #[error("invalid date: {reason}")]
    InvalidDate {
        /// The rule the input violated.
        reason: DateViolation,
    },
    /// The sun does not cross the requested horizon on this day.
    #[error("no {event} on this day: {condition}")]
    NoSunriseOrSunset {
        /// The event that could not be computed.
        event: SunEventKind,
        /// Whether the sun stays above or below the horizon.
        condition: PolarCondition,
    },
    /// An inverse trigonometric step received an argument outside its domain.
    #[error("numeric domain error: {message}")]
    NumericDomain {
        /// Description of the failed step.
        message: &'static str,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Julian day that is not finite or precedes the epoch (JD 0).
    #[error("invalid Julian day {value} (must be finite and not before JD 0)")]
    InvalidJulianDay {
        /// The invalid Julian day provided.
        value: f64,
    },
}

/// The validation rule a rejected date broke.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DateViolation {
    /// Day of month is zero.
    #[error("day must be greater than zero")]
    DayNotPositive,
    /// Month outside 1..=12.
    #[error("month {month} is outside 1..=12")]
    MonthOutOfRange {
        /// The month supplied.
        month: u32,
    },
    /// Day larger than the length of the month.
    #[error("there are only {max} days in {} {year}", month_name(.month))]
    DayOutOfRange {
        /// The year supplied.
        year: i32,
        /// The month supplied.
        month: u32,
        /// The day supplied.
        day: u32,
        /// Number of days in that month.
        max: u32,
    },
    /// Year outside the range the solar series are valid for.
    #[error("year {year} is outside the supported range -1000..=3000")]
    YearOutOfRange {
        /// The year supplied.
        year: i32,
    },
    /// Hour outside [0, 24) or not finite.
    #[error("hour {hour} is outside [0, 24)")]
    HourOutOfRange {
        /// The hour supplied.
        hour: f64,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn month_name(month: &u32) -> &'static str {
    match *month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "month",
    }
}

impl Error {
    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(reason: DateViolation) -> Self {
        Self::InvalidDate { reason }
    }

    /// Creates a "no sunrise or sunset" error.
    #[must_use]
    pub const fn no_sunrise_or_sunset(event: SunEventKind, condition: PolarCondition) -> Self {
        Self::NoSunriseOrSunset { event, condition }
    }

    /// Creates a numeric domain error.
    #[must_use]
    pub const fn numeric_domain(message: &'static str) -> Self {
        Self::NumericDomain { message }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid Julian day error.
    #[must_use]
    pub const fn invalid_julian_day(value: f64) -> Self {
        Self::InvalidJulianDay { value }
    }

    /// Returns `true` for the polar day/night condition.
    #[must_use]
    pub const fn is_no_sunrise_or_sunset(&self) -> bool {
        matches!(self, Self::NoSunriseOrSunset { .. })
    }
}

impl From<DateViolation> for Error {
    fn from(reason: DateViolation) -> Self {
        Self::invalid_date(reason)
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a Julian day is finite and not before the epoch.
///
/// # Errors
/// Returns `InvalidJulianDay` for NaN, infinities and negative values.
pub fn check_julian_day(jd: f64) -> Result<()> {
    if !jd.is_finite() || jd < 0.0 {
        return Err(Error::invalid_julian_day(jd));
    }
    Ok(())
}
